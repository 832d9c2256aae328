//! Chain builder.
//!
//! A [`Chain`] is an ordered list of [`Element`]s that serializes to one
//! rule-language expression. Accessors extend a chain in one of two ways:
//!
//! ```text
//! append(chain, e)  ──▶ [ ...chain, e ]           same builder, extended
//! branch(chain, e)  ──▶ [ Chain(chain), e ]       new builder anchored to chain
//! ```
//!
//! Which one an accessor uses is fixed by the accessor itself (see
//! `context.rs`): named root variables and snapshot-producing methods
//! branch; terminal scalar properties and continuation operators append.
//!
//! Both operations take the chain by value. Extending the same intermediate
//! chain from two places therefore needs an explicit `clone()`, so two call
//! sites can never end up writing into one shared builder.
//!
//! ## Serialization
//!
//! Nested chains are flattened depth first, then the elements are reduced
//! left to right:
//!
//! - `Member`: its text, prefixed with `.` when the previous element was
//!   also a member.
//! - `Token`: verbatim (tokens carry their own spacing).
//! - `Literal`: rendered by [`Literal`](crate::Literal)'s `Display`.

use crate::Element;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    elements: Vec<Element>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Chain { elements: Vec::new() }
    }

    /// Create a chain holding a single element.
    pub fn of(element: impl Into<Element>) -> Self {
        Chain { elements: vec![element.into()] }
    }

    /// Extend this chain in place and hand the same builder back.
    pub fn append(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Start a new chain whose content is `[self, element]`.
    pub fn branch(self, element: impl Into<Element>) -> Chain {
        Chain { elements: vec![Element::Chain(self), element.into()] }
    }

    pub fn is_empty(&self) -> bool {
        self.flatten().is_empty()
    }

    /// Direct elements of this chain (nested chains not expanded).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// All elements with nested chains expanded in place, depth first.
    ///
    /// The result never contains an [`Element::Chain`].
    pub fn flatten(&self) -> Vec<&Element> {
        let mut out = Vec::with_capacity(self.elements.len());
        flatten_into(&self.elements, &mut out);
        out
    }
}

fn flatten_into<'a>(elements: &'a [Element], out: &mut Vec<&'a Element>) {
    for element in elements {
        match element {
            Element::Chain(chain) => flatten_into(&chain.elements, out),
            other => out.push(other),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous_is_member = false;
        for element in self.flatten() {
            match element {
                Element::Member(member) => {
                    if previous_is_member {
                        f.write_str(".")?;
                    }
                    fmt::Display::fmt(&member, f)?;
                }
                Element::Token(token) => fmt::Display::fmt(&token, f)?,
                Element::Literal(literal) => fmt::Display::fmt(&literal, f)?,
                // flatten() never yields nested chains
                Element::Chain(chain) => fmt::Display::fmt(&chain, f)?,
            }
            previous_is_member = matches!(element, Element::Member(_));
        }
        Ok(())
    }
}

impl From<Element> for Chain {
    fn from(element: Element) -> Self {
        Chain::of(element)
    }
}

impl FromIterator<Element> for Chain {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Chain { elements: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Literal, Member, Operators, Symbols};

    #[test]
    fn members_are_joined_with_dots() {
        let chain = Chain::new().append(Member::property("auth")).append(Member::property("uid"));
        assert_eq!(chain.to_string(), "auth.uid");
    }

    #[test]
    fn branch_keeps_parent_elements_in_front() {
        let parent = Chain::of(Member::property("data"));
        let child = parent.branch(Member::call("child", "'a'")).branch(Member::call("exists", ""));
        assert_eq!(child.to_string(), "data.child('a').exists()");
        assert_eq!(child.elements().len(), 2);
    }

    #[test]
    fn branching_an_empty_chain_starts_fresh() {
        let chain = Chain::new().branch(Member::property("root"));
        assert_eq!(chain.to_string(), "root");
        assert!(!chain.is_empty());
        assert!(Chain::new().branch(Chain::new()).is_empty());
    }

    #[test]
    fn tokens_break_member_joins() {
        let chain = Chain::of(Member::property("data"))
            .append(Member::call("val", ""))
            .append(Operators::EQUAL)
            .branch(Member::property("newData"))
            .append(Member::call("val", ""));
        assert_eq!(chain.to_string(), "data.val() === newData.val()");
    }

    #[test]
    fn flatten_expands_nested_chains_depth_first() {
        let inner = Chain::of(Literal::Number(1.0)).append(Operators::ADD).append(Literal::Number(2.0));
        let chain = Chain::of(Symbols::PARENTHESIS_LEFT).append(inner).append(Symbols::PARENTHESIS_RIGHT);

        let flat = chain.flatten();
        assert_eq!(flat.len(), 5);
        assert!(flat.iter().all(|e| !matches!(e, Element::Chain(_))));
        assert_eq!(chain.to_string(), "(1 + 2)");
    }

    #[test]
    fn literals_follow_members_without_separator() {
        let chain = Chain::of(Member::property("now")).append(Operators::LESS_THAN).append(Literal::String("x".into()));
        assert_eq!(chain.to_string(), "now < 'x'");
    }
}
