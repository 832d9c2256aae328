//! Fixed-arity expression combinators.
//!
//! Each combinator emits its operands and operator token in a fixed order
//! and returns an [`Operation`]:
//!
//! ```text
//! equal(l, r)          l === r
//! not(x)               !x
//! negate(x)            -x
//! ternary(c, a, b)     c ? a : b
//! scope(x)             (x)
//! ```
//!
//! Nothing is reordered or simplified, and no parentheses are ever inserted
//! implicitly: `multiply(add(1, 1), 2)` renders `1 + 1 * 2`. Use [`scope`]
//! wherever the rule language's precedence would otherwise group the
//! expression differently.

use crate::{
    BooleanExpression, Chain, Element, Expression, NullExpression, NumberExpression, Operators, StringExpression,
    Summand, Symbols, Token,
};
use std::fmt;

/// Result of a combinator. Its kind is not tracked, so it is accepted
/// wherever any operand kind is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    chain: Chain,
}

impl Operation {
    fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        Operation { chain: elements.into_iter().collect() }
    }

    fn binary(left: impl Expression, token: Token, right: impl Expression) -> Self {
        Operation::from_elements([left.into_element(), Element::Token(token), right.into_element()])
    }

    fn unary(token: Token, operand: impl Expression) -> Self {
        Operation::from_elements([Element::Token(token), operand.into_element()])
    }

    pub fn into_chain(self) -> Chain {
        self.chain
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl Expression for Operation {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

impl BooleanExpression for Operation {}
impl NumberExpression for Operation {}
impl StringExpression for Operation {}
impl NullExpression for Operation {}
impl Summand for Operation {}

// --- Comparison --------------------------------------------------------------

pub fn equal(left: impl Expression, right: impl Expression) -> Operation {
    Operation::binary(left, Operators::EQUAL, right)
}

pub fn unequal(left: impl Expression, right: impl Expression) -> Operation {
    Operation::binary(left, Operators::UNEQUAL, right)
}

pub fn greater_than(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::GREATER_THAN, right)
}

pub fn greater_than_or_equal_to(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::GREATER_THAN_OR_EQUAL_TO, right)
}

pub fn less_than(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::LESS_THAN, right)
}

pub fn less_than_or_equal_to(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::LESS_THAN_OR_EQUAL_TO, right)
}

// --- Arithmetic --------------------------------------------------------------

/// Numeric addition or string concatenation.
pub fn add(left: impl Summand, right: impl Summand) -> Operation {
    Operation::binary(left, Operators::ADD, right)
}

pub fn subtract(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::SUBTRACT, right)
}

pub fn multiply(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::MULTIPLY, right)
}

pub fn divide(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::DIVIDE, right)
}

pub fn modulus(left: impl NumberExpression, right: impl NumberExpression) -> Operation {
    Operation::binary(left, Operators::MODULUS, right)
}

pub fn negate(operand: impl Expression) -> Operation {
    Operation::unary(Operators::NEGATE, operand)
}

// --- Logic -------------------------------------------------------------------

pub fn and(left: impl BooleanExpression, right: impl BooleanExpression) -> Operation {
    Operation::binary(left, Operators::AND, right)
}

pub fn or(left: impl BooleanExpression, right: impl BooleanExpression) -> Operation {
    Operation::binary(left, Operators::OR, right)
}

pub fn not(operand: impl BooleanExpression) -> Operation {
    Operation::unary(Operators::NOT, operand)
}

pub fn ternary(condition: impl BooleanExpression, truthy: impl Expression, falsy: impl Expression) -> Operation {
    Operation::from_elements([
        condition.into_element(),
        Element::Token(Operators::TERNARY_QUESTION),
        truthy.into_element(),
        Element::Token(Operators::TERNARY_COLON),
        falsy.into_element(),
    ])
}

// --- Grouping ----------------------------------------------------------------

pub fn scope(expression: impl Expression) -> Operation {
    Operation::from_elements([
        Element::Token(Symbols::PARENTHESIS_LEFT),
        expression.into_element(),
        Element::Token(Symbols::PARENTHESIS_RIGHT),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Null, auth, data, new_data, now};

    #[test]
    fn arithmetic() {
        assert_eq!(add(1, 1).to_string(), "1 + 1");
        assert_eq!(add("a", "b").to_string(), "'a' + 'b'");
        assert_eq!(subtract(1, 1).to_string(), "1 - 1");
        assert_eq!(multiply(1, 1).to_string(), "1 * 1");
        assert_eq!(divide(1, 1).to_string(), "1 / 1");
        assert_eq!(modulus(1, 1).to_string(), "1 % 1");
    }

    #[test]
    fn nested_operations_are_not_parenthesized() {
        assert_eq!(add(multiply(1, 1), multiply(2, 2)).to_string(), "1 * 1 + 2 * 2");
        assert_eq!(multiply(add(1, 1), 2).to_string(), "1 + 1 * 2");
    }

    #[test]
    fn scope_groups_explicitly() {
        assert_eq!(scope(1).to_string(), "(1)");
        assert_eq!(multiply(scope(add(1, 1)), scope(add(2, 2))).to_string(), "(1 + 1) * (2 + 2)");
    }

    #[test]
    fn negation() {
        assert_eq!(negate(1).to_string(), "-1");
        assert_eq!(negate(scope(add(1, 1))).to_string(), "-(1 + 1)");
        assert_eq!(not(true).to_string(), "!true");
        assert_eq!(not(data().exists()).to_string(), "!data.exists()");
    }

    #[test]
    fn ternary_expression() {
        assert_eq!(ternary(true, 1, 0).to_string(), "true ? 1 : 0");
        assert_eq!(
            ternary(data().exists(), data().val(), new_data().val()).to_string(),
            "data.exists() ? data.val() : newData.val()"
        );
    }

    #[test]
    fn comparisons() {
        assert_eq!(equal(now(), 1).to_string(), "now === 1");
        assert_eq!(unequal(auth(), Null).to_string(), "auth !== null");
        assert_eq!(greater_than(now(), 1).to_string(), "now > 1");
        assert_eq!(greater_than_or_equal_to(now(), 1).to_string(), "now >= 1");
        assert_eq!(less_than(now(), 1).to_string(), "now < 1");
        assert_eq!(less_than_or_equal_to(now(), 1).to_string(), "now <= 1");
    }

    #[test]
    fn logic() {
        let rule = and(unequal(auth(), Null), equal(auth().provider(), "password"));
        assert_eq!(rule.to_string(), "auth !== null && auth.provider === 'password'");
        assert_eq!(or(true, false).to_string(), "true || false");
    }

    #[test]
    fn untyped_values_satisfy_any_kind() {
        assert_eq!(add(data().val(), 1).to_string(), "data.val() + 1");
        assert_eq!(and(data().val(), true).to_string(), "data.val() && true");
        assert_eq!(add(new_data().val_string(), "!").to_string(), "newData.val() + '!'");
    }
}
