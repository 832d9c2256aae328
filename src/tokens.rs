//! Operator and punctuation catalog.
//!
//! Every token carries its exact surrounding whitespace, so chains and
//! operations concatenate tokens without any spacing logic of their own.
//! No precedence is encoded here: grouping is always explicit through
//! [`Symbols::PARENTHESIS_LEFT`] / [`Symbols::PARENTHESIS_RIGHT`] (see
//! [`scope`](crate::scope)).

use crate::Token;

/// Unary, binary and ternary operators of the rule language.
pub struct Operators;

impl Operators {
    pub const NEGATE: Token = Token::new("-");
    pub const NOT: Token = Token::new("!");

    pub const ADD: Token = Token::new(" + ");
    pub const SUBTRACT: Token = Token::new(" - ");
    pub const MULTIPLY: Token = Token::new(" * ");
    pub const DIVIDE: Token = Token::new(" / ");
    pub const MODULUS: Token = Token::new(" % ");

    pub const EQUAL: Token = Token::new(" === ");
    pub const UNEQUAL: Token = Token::new(" !== ");
    pub const GREATER_THAN: Token = Token::new(" > ");
    pub const GREATER_THAN_OR_EQUAL_TO: Token = Token::new(" >= ");
    pub const LESS_THAN: Token = Token::new(" < ");
    pub const LESS_THAN_OR_EQUAL_TO: Token = Token::new(" <= ");

    pub const AND: Token = Token::new(" && ");
    pub const OR: Token = Token::new(" || ");

    pub const TERNARY_QUESTION: Token = Token::new(" ? ");
    pub const TERNARY_COLON: Token = Token::new(" : ");
}

/// Grouping punctuation.
pub struct Symbols;

impl Symbols {
    pub const PARENTHESIS_LEFT: Token = Token::new("(");
    pub const PARENTHESIS_RIGHT: Token = Token::new(")");
}
