use super::Variables;
use super::kind::{Additive, AnyKind, BooleanKind, Kind, Logical, NullKind, NumberKind, Numeric, StringKind};
use crate::{
    BooleanExpression, Chain, Element, Expression, Member, NullExpression, NumberExpression, Operators,
    StringExpression, Summand, Token,
};
use std::fmt;
use std::marker::PhantomData;

/// A value produced by a rule variable or snapshot, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<K: Kind = AnyKind> {
    chain: Chain,
    kind: PhantomData<K>,
}

pub type NullValue = Value<NullKind>;
pub type BooleanValue = Value<BooleanKind>;
pub type NumberValue = Value<NumberKind>;
pub type StringValue = Value<StringKind>;

impl<K: Kind> Value<K> {
    pub(crate) fn from_chain(chain: Chain) -> Self {
        Value { chain, kind: PhantomData }
    }

    pub fn into_chain(self) -> Chain {
        self.chain
    }

    /// Name of the value kind (`"number"`, `"string"`, ...).
    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    fn operator(self, token: Token) -> Variables {
        Variables::from_chain(self.chain.append(token))
    }

    fn method<R: Kind>(self, member: Member) -> Value<R> {
        Value::from_chain(self.chain.append(member))
    }

    pub fn equal(self) -> Variables {
        self.operator(Operators::EQUAL)
    }

    pub fn unequal(self) -> Variables {
        self.operator(Operators::UNEQUAL)
    }
}

impl<K: Logical> Value<K> {
    pub fn and(self) -> Variables {
        self.operator(Operators::AND)
    }

    pub fn or(self) -> Variables {
        self.operator(Operators::OR)
    }
}

impl<K: Numeric> Value<K> {
    pub fn greater_than(self) -> Variables {
        self.operator(Operators::GREATER_THAN)
    }

    pub fn greater_than_or_equal_to(self) -> Variables {
        self.operator(Operators::GREATER_THAN_OR_EQUAL_TO)
    }

    pub fn less_than(self) -> Variables {
        self.operator(Operators::LESS_THAN)
    }

    pub fn less_than_or_equal_to(self) -> Variables {
        self.operator(Operators::LESS_THAN_OR_EQUAL_TO)
    }

    pub fn subtract(self) -> Variables {
        self.operator(Operators::SUBTRACT)
    }

    pub fn multiply(self) -> Variables {
        self.operator(Operators::MULTIPLY)
    }

    pub fn divide(self) -> Variables {
        self.operator(Operators::DIVIDE)
    }

    pub fn modulus(self) -> Variables {
        self.operator(Operators::MODULUS)
    }
}

impl<K: Additive> Value<K> {
    pub fn add(self) -> Variables {
        self.operator(Operators::ADD)
    }
}

impl Value<StringKind> {
    pub fn length(self) -> NumberValue {
        self.method(Member::property("length"))
    }

    pub fn contains(self, substring: &str) -> BooleanValue {
        self.method(Member::call("contains", &quote(substring)))
    }

    pub fn begins_with(self, substring: &str) -> BooleanValue {
        self.method(Member::call("beginsWith", &quote(substring)))
    }

    pub fn ends_with(self, substring: &str) -> BooleanValue {
        self.method(Member::call("endsWith", &quote(substring)))
    }

    pub fn replace(self, substring: &str, replacement: &str) -> StringValue {
        let args = format!("{},{}", quote(substring), quote(replacement));
        self.method(Member::call("replace", &args))
    }

    pub fn to_lower_case(self) -> StringValue {
        self.method(Member::call("toLowerCase", ""))
    }

    pub fn to_upper_case(self) -> StringValue {
        self.method(Member::call("toUpperCase", ""))
    }

    /// Test against a regular expression literal such as `/^[a-z]+$/i`.
    ///
    /// The literal is emitted as given.
    pub fn matches(self, regex: &str) -> BooleanValue {
        if !regex!(r"^/.*/[a-z]*$").is_match(regex) {
            log::warn!("matches() argument {regex:?} is not a /pattern/flags literal");
        }
        self.method(Member::call("matches", regex))
    }
}

fn quote(text: &str) -> String {
    if text.contains('\'') {
        log::warn!("string argument {text:?} contains a single quote and is emitted unescaped");
    }
    format!("'{text}'")
}

impl<K: Kind> fmt::Display for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl<K: Kind> Expression for Value<K> {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

impl BooleanExpression for Value<BooleanKind> {}
impl BooleanExpression for Value<AnyKind> {}

impl NumberExpression for Value<NumberKind> {}
impl NumberExpression for Value<AnyKind> {}

impl StringExpression for Value<StringKind> {}
impl StringExpression for Value<AnyKind> {}

impl NullExpression for Value<NullKind> {}
impl NullExpression for Value<AnyKind> {}

impl<K: Additive> Summand for Value<K> {}
