//! Typed builders for Firebase Realtime Database security rules.
//!
//! Rule expressions are assembled from chainable accessors that mirror the
//! rule language's variables (`auth`, `now`, `root`, `data`, `newData`) and
//! combinators (`equal`, `and`, `scope`, ...). A rule tree holding those
//! builders is then compiled into a plain JSON mapping whose leaves are
//! literal expression strings.
//!
//! ```
//! use firerules::{Null, check, compile, ctx, rules};
//!
//! let tree = rules! {
//!     "rules" => {
//!         ".read" => check().unequal(ctx().auth(), Null),
//!     },
//! };
//!
//! let compiled = compile(&tree).unwrap();
//! assert_eq!(compiled["rules"][".read"], "auth !== null");
//! ```

#[macro_use]
mod macros;
mod api;
mod chain;
mod check;
mod compiler;
mod context;
mod error;
mod expression;
mod operation;
mod path;
mod tokens;

use std::fmt;

pub use api::{CompileResultVerbose, Options, compile, compile_verbose, compile_verbose_with, compile_with};
pub use chain::Chain;
pub use check::{Check, check};
pub use compiler::{Checks, CompileDetails, RuleMap, RuleNode, keys};
pub use context::{
    Additive, AnyKind, Auth, AuthToken, BooleanKind, BooleanValue, Kind, Logical, NullKind, NullValue, NumberKind,
    NumberValue, Numeric, Snapshot, StringKind, StringValue, Value, Variables, auth, ctx, data, new_data, now, root,
};
pub use error::{CompileError, Result};
pub use expression::{BooleanExpression, Expression, NullExpression, NumberExpression, StringExpression, Summand};
pub use operation::{
    Operation, add, and, divide, equal, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to,
    modulus, multiply, negate, not, or, scope, subtract, ternary, unequal,
};
pub use path::{PathBuilder, PathSegment, SegmentKind, path};
pub use serde_json::Value as JsonValue;
pub use tokens::{Operators, Symbols};

// --- Chain elements ---------------------------------------------------------

/// Immutable operator or punctuation fragment.
///
/// Tokens carry their own surrounding whitespace (`" && "`, `"!"`), so
/// serialization concatenates them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(&'static str);

impl Token {
    pub(crate) const fn new(text: &'static str) -> Self {
        Token(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Named accessor segment: a property (`uid`) or a call with its arguments
/// already rendered (`child('users')`).
///
/// Two consecutive members are joined with `.` when a chain is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member(String);

impl Member {
    pub fn property(name: impl Into<String>) -> Self {
        Member(name.into())
    }

    pub fn call(name: &str, args: &str) -> Self {
        Member(format!("{name}({args})"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The literal `null` operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

/// Scalar operand rendered in rule-language syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Number(f64),
    /// Rendered single-quoted. Embedded quotes are not escaped.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Number(value) => f.write_str(&format_number(*value)),
            Literal::String(value) => {
                if value.contains('\'') {
                    log::warn!("string literal {value:?} contains a single quote and is emitted unescaped");
                }
                write!(f, "'{value}'")
            }
        }
    }
}

/// Number text as the rule language prints it: shortest round-trip digits,
/// plain notation for magnitudes in `[1e-6, 1e21)`, exponent form (`1e+21`,
/// `1.5e-7`) outside it, `0` for negative zero.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // `digits` times 10^(point - len) is the magnitude.
    let len = digits.len() as i32;
    let point = exponent + 1;
    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let e_sign = if exponent < 0 { '-' } else { '+' };
        match digits.split_at(1) {
            (first, "") => format!("{first}e{e_sign}{}", exponent.abs()),
            (first, rest) => format!("{first}.{rest}e{e_sign}{}", exponent.abs()),
        }
    };
    format!("{sign}{body}")
}

/// One entry of a [`Chain`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Member(Member),
    Token(Token),
    Literal(Literal),
    Chain(Chain),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Member(member) => fmt::Display::fmt(&member, f),
            Element::Token(token) => fmt::Display::fmt(&token, f),
            Element::Literal(literal) => fmt::Display::fmt(&literal, f),
            Element::Chain(chain) => fmt::Display::fmt(&chain, f),
        }
    }
}

impl From<Member> for Element {
    fn from(member: Member) -> Self {
        Element::Member(member)
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}

impl From<Literal> for Element {
    fn from(literal: Literal) -> Self {
        Element::Literal(literal)
    }
}

impl From<Chain> for Element {
    fn from(chain: Chain) -> Self {
        Element::Chain(chain)
    }
}
