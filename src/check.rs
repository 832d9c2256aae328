//! Open-ended condition builder.
//!
//! [`Check`] accumulates operands and operator tokens in order into one
//! [`Chain`], which makes it convenient for conjunctions of arbitrary length:
//!
//! ```
//! use firerules::{check, data, new_data};
//!
//! let rule = check()
//!     .condition(new_data().is_number())
//!     .and()
//!     .greater_than(new_data().val_number(), 0)
//!     .and()
//!     .not()
//!     .condition(data().exists());
//!
//! assert_eq!(rule.to_string(), "newData.isNumber() && newData.val() > 0 && !data.exists()");
//! ```

use crate::{Chain, Element, Expression, NumberExpression, Operators, Token};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Check {
    chain: Chain,
}

pub fn check() -> Check {
    Check::default()
}

impl Check {
    fn push(self, items: impl IntoIterator<Item = Element>) -> Self {
        Check { chain: items.into_iter().fold(self.chain, |chain, item| chain.append(item)) }
    }

    fn compare(self, left: impl Expression, token: Token, right: impl Expression) -> Self {
        self.push([left.into_element(), Element::Token(token), right.into_element()])
    }

    pub fn is_empty(&self) -> bool {
        self.chain.elements().is_empty()
    }

    pub fn condition(self, expression: impl Expression) -> Self {
        self.push([expression.into_element()])
    }

    pub fn and(self) -> Self {
        self.push([Element::Token(Operators::AND)])
    }

    pub fn or(self) -> Self {
        self.push([Element::Token(Operators::OR)])
    }

    pub fn not(self) -> Self {
        self.push([Element::Token(Operators::NOT)])
    }

    pub fn equal(self, left: impl Expression, right: impl Expression) -> Self {
        self.compare(left, Operators::EQUAL, right)
    }

    pub fn unequal(self, left: impl Expression, right: impl Expression) -> Self {
        self.compare(left, Operators::UNEQUAL, right)
    }

    pub fn greater_than(self, left: impl Expression, right: impl NumberExpression) -> Self {
        self.compare(left, Operators::GREATER_THAN, right)
    }

    pub fn greater_than_or_equal_to(self, left: impl Expression, right: impl NumberExpression) -> Self {
        self.compare(left, Operators::GREATER_THAN_OR_EQUAL_TO, right)
    }

    pub fn less_than(self, left: impl Expression, right: impl NumberExpression) -> Self {
        self.compare(left, Operators::LESS_THAN, right)
    }

    pub fn less_than_or_equal_to(self, left: impl Expression, right: impl NumberExpression) -> Self {
        self.compare(left, Operators::LESS_THAN_OR_EQUAL_TO, right)
    }

    pub fn ternary(self, condition: impl Expression, truthy: impl Expression, falsy: impl Expression) -> Self {
        self.push([
            condition.into_element(),
            Element::Token(Operators::TERNARY_QUESTION),
            truthy.into_element(),
            Element::Token(Operators::TERNARY_COLON),
            falsy.into_element(),
        ])
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl Expression for Check {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Null, add, auth, ctx, path, root};

    #[test]
    fn empty_check() {
        assert_eq!(check().to_string(), "");
        assert!(check().is_empty());
    }

    #[test]
    fn conditions() {
        assert_eq!(check().condition(true).to_string(), "true");
        assert_eq!(check().condition(add(1, 1)).to_string(), "1 + 1");
        assert_eq!(check().condition(true).and().condition(false).to_string(), "true && false");
        assert_eq!(check().condition(true).or().condition(false).to_string(), "true || false");
        assert_eq!(check().not().condition(true).to_string(), "!true");
    }

    #[test]
    fn comparisons() {
        assert_eq!(check().equal(ctx().now(), 1).to_string(), "now === 1");
        assert_eq!(check().unequal(ctx().now(), 1).to_string(), "now !== 1");
        assert_eq!(check().greater_than(ctx().now(), 1).to_string(), "now > 1");
        assert_eq!(check().greater_than_or_equal_to(ctx().now(), 1).to_string(), "now >= 1");
        assert_eq!(check().less_than(ctx().now(), 1).to_string(), "now < 1");
        assert_eq!(check().less_than_or_equal_to(ctx().now(), 1).to_string(), "now <= 1");
    }

    #[test]
    fn ternary_check() {
        assert_eq!(check().ternary(true, 1, 0).to_string(), "true ? 1 : 0");
    }

    #[test]
    fn negated_condition_has_no_space() {
        let rule = check().not().condition(root().child(path("users").resolve(auth().uid())).exists());
        assert_eq!(rule.to_string(), "!root.child('users/' + auth.uid).exists()");
    }

    #[test]
    fn authenticated_with_password() {
        let rule = check().unequal(auth(), Null).and().equal(auth().provider(), "password");
        assert_eq!(rule.to_string(), "auth !== null && auth.provider === 'password'");
    }

    #[test]
    fn rendering_matches_the_nested_form() {
        let rule = check().condition(auth()).condition(crate::now());
        assert_eq!(rule.to_string(), "auth.now");
        assert_eq!(crate::scope(rule).to_string(), "(auth.now)");
    }

    #[test]
    fn checks_nest_as_operands() {
        let inner = check().condition(true).or().condition(false);
        assert_eq!(crate::scope(inner).to_string(), "(true || false)");
    }
}
