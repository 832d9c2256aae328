//! Operand traits.
//!
//! [`Expression`] is implemented by everything that can stand as an operand:
//! plain literals (`bool`, numbers, strings, [`Null`]), context chains and
//! combinator results. The kind traits narrow that set the way the rule
//! language's value kinds do, so a number comparison only accepts number
//! operands, `and`/`or` only boolean ones, and so on.
//!
//! The kind is a compile-time constraint only. It never changes the text an
//! operand renders to.
//!
//! Untyped values (`Value<AnyKind>`, [`Operation`](crate::Operation)) are
//! accepted wherever any kind is expected.

use crate::{Chain, Element, Literal, Null};

/// A value that can be placed into a chain as an operand.
pub trait Expression {
    fn into_element(self) -> Element;

    /// Rendered rule-language text of this operand.
    fn render(self) -> String
    where
        Self: Sized,
    {
        self.into_element().to_string()
    }
}

pub trait BooleanExpression: Expression {}

pub trait NumberExpression: Expression {}

pub trait StringExpression: Expression {}

pub trait NullExpression: Expression {}

/// Operand of `+`: numbers add, strings concatenate.
pub trait Summand: Expression {}

impl Expression for Element {
    fn into_element(self) -> Element {
        self
    }
}

impl Expression for Literal {
    fn into_element(self) -> Element {
        Element::Literal(self)
    }
}

impl Expression for Chain {
    fn into_element(self) -> Element {
        Element::Chain(self)
    }
}

impl Expression for Null {
    fn into_element(self) -> Element {
        Element::Literal(Literal::Null)
    }
}

impl NullExpression for Null {}

impl Expression for bool {
    fn into_element(self) -> Element {
        Element::Literal(Literal::Boolean(self))
    }
}

impl BooleanExpression for bool {}

impl Expression for &str {
    fn into_element(self) -> Element {
        Element::Literal(Literal::String(self.to_string()))
    }
}

impl Expression for String {
    fn into_element(self) -> Element {
        Element::Literal(Literal::String(self))
    }
}

impl StringExpression for &str {}
impl StringExpression for String {}
impl Summand for &str {}
impl Summand for String {}

macro_rules! number_expression {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Expression for $ty {
                fn into_element(self) -> Element {
                    Element::Literal(Literal::Number(f64::from(self)))
                }
            }

            impl NumberExpression for $ty {}
            impl Summand for $ty {}
        )*
    };
}

// Only types with a lossless conversion to `f64`.
number_expression!(i8, i16, i32, u8, u16, u32, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_operands_are_single_quoted() {
        assert_eq!("s".render(), "'s'");
        assert_eq!(String::from("a b").render(), "'a b'");
        assert_eq!("".render(), "''");
    }

    #[test]
    fn scalar_operands_render_as_literals() {
        assert_eq!(true.render(), "true");
        assert_eq!(Null.render(), "null");
        assert_eq!(10i32.render(), "10");
        assert_eq!(0.25f64.render(), "0.25");
        assert_eq!((-3i32).render(), "-3");
        assert_eq!(u32::MAX.render(), "4294967295");
    }
}
