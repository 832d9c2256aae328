//! Typed accessors for the rule language's variables.
//!
//! Every accessor returns a typed wrapper around a [`Chain`](crate::Chain), so
//! the compiler only lets you call what the rule language allows at that
//! point:
//!
//! ```text
//! ctx() ─┬─ auth() ──▶ Auth ─┬─ uid() / provider() ──▶ StringValue
//!        │                   └─ token() ──▶ AuthToken ──▶ email(), iat(), ...
//!        ├─ now() ──▶ NumberValue
//!        └─ root() / data() / new_data() ──▶ Snapshot
//!                  ├─ child(path) / parent() ──▶ Snapshot
//!                  ├─ val() ──▶ Value<AnyKind>   (val_string(), val_number(), ...)
//!                  └─ exists(), has_child(path), is_number(), ... ──▶ BooleanValue
//!
//! Value<K> ── equal() / and() / greater_than() / add() / ... ──▶ Variables
//! ```
//!
//! `Variables` is both the entry point and the continuation after a binary
//! operator, which is what lets expressions read left to right:
//!
//! ```
//! use firerules::data;
//!
//! let rule = data().val().equal().new_data().val();
//! assert_eq!(rule.to_string(), "data.val() === newData.val()");
//! ```
//!
//! ## Append vs. branch
//!
//! Each accessor is fixed to one of the two chain operations:
//!
//! - **branch**: named root variables (`auth`, `root`, `data`, `newData`),
//!   the `auth` members, and every snapshot method.
//! - **append**: `now`, `auth.token` claims, string-value methods, and the
//!   continuation operators on `Value<K>`.

#[path = "context/auth.rs"]
mod auth;
#[path = "context/kind.rs"]
mod kind;
#[path = "context/snapshot.rs"]
mod snapshot;
#[path = "context/value.rs"]
mod value;

pub use auth::{Auth, AuthToken};
pub use kind::{Additive, AnyKind, BooleanKind, Kind, Logical, NullKind, NumberKind, Numeric, StringKind};
pub use snapshot::Snapshot;
pub use value::{BooleanValue, NullValue, NumberValue, StringValue, Value};

use crate::{Chain, Expression, Member, Operators, Symbols};
use std::fmt;

/// Root (and continuation) context exposing the rule variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    chain: Chain,
}

/// Empty variables context.
pub fn ctx() -> Variables {
    Variables::default()
}

/// Shorthand for `ctx().auth()`.
pub fn auth() -> Auth {
    ctx().auth()
}

/// Shorthand for `ctx().now()`.
pub fn now() -> NumberValue {
    ctx().now()
}

/// Shorthand for `ctx().root()`.
pub fn root() -> Snapshot {
    ctx().root()
}

/// Shorthand for `ctx().data()`.
pub fn data() -> Snapshot {
    ctx().data()
}

/// Shorthand for `ctx().new_data()`.
pub fn new_data() -> Snapshot {
    ctx().new_data()
}

impl Variables {
    pub(crate) fn from_chain(chain: Chain) -> Self {
        Variables { chain }
    }

    pub fn into_chain(self) -> Chain {
        self.chain
    }

    /// The current user's authentication state.
    pub fn auth(self) -> Auth {
        Auth::from_chain(self.chain.branch(Member::property("auth")))
    }

    /// Server time in milliseconds since the epoch.
    pub fn now(self) -> NumberValue {
        Value::from_chain(self.chain.append(Member::property("now")))
    }

    /// Snapshot of the database root before the attempted operation.
    pub fn root(self) -> Snapshot {
        Snapshot::from_chain(self.chain.branch(Member::property("root")))
    }

    /// Snapshot of the current location before the attempted operation.
    pub fn data(self) -> Snapshot {
        Snapshot::from_chain(self.chain.branch(Member::property("data")))
    }

    /// Snapshot of the current location as it would be after the write.
    pub fn new_data(self) -> Snapshot {
        Snapshot::from_chain(self.chain.branch(Member::property("newData")))
    }

    /// Logical negation of whatever follows.
    pub fn not(self) -> Variables {
        Variables::from_chain(self.chain.branch(Operators::NOT))
    }

    /// Arithmetic negation of whatever follows.
    pub fn negate(self) -> Variables {
        Variables::from_chain(self.chain.branch(Operators::NEGATE))
    }

    /// Place an arbitrary operand at this point of the chain.
    pub fn evaluate(self, expression: impl Expression) -> Value<AnyKind> {
        Value::from_chain(self.chain.branch(expression.into_element()))
    }

    /// Place a parenthesized operand at this point of the chain.
    pub fn scope(self, expression: impl Expression) -> Value<AnyKind> {
        let chain = self
            .chain
            .branch(Symbols::PARENTHESIS_LEFT)
            .append(expression.into_element())
            .append(Symbols::PARENTHESIS_RIGHT);
        Value::from_chain(chain)
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{add, path};

    #[test]
    fn rule_variables_render_their_names() {
        assert_eq!(ctx().to_string(), "");
        assert_eq!(ctx().auth().to_string(), "auth");
        assert_eq!(ctx().auth().uid().to_string(), "auth.uid");
        assert_eq!(ctx().now().to_string(), "now");
        assert_eq!(ctx().root().to_string(), "root");
        assert_eq!(ctx().data().to_string(), "data");
        assert_eq!(ctx().new_data().to_string(), "newData");
    }

    #[test]
    fn shorthand_roots_match_ctx() {
        assert_eq!(auth().to_string(), "auth");
        assert_eq!(auth().token().email().to_string(), "auth.token.email");
        assert_eq!(auth().token().name().to_string(), "auth.token.name");
        assert_eq!(now().to_string(), "now");
        assert_eq!(root().exists().to_string(), "root.exists()");
        assert_eq!(data().is_boolean().to_string(), "data.isBoolean()");
        assert_eq!(new_data().exists().to_string(), "newData.exists()");
    }

    #[test]
    fn not_prefixes_the_following_expression() {
        assert_eq!(ctx().not().data().exists().to_string(), "!data.exists()");
        assert_eq!(ctx().not().data().is_boolean().to_string(), "!data.isBoolean()");
    }

    #[test]
    fn negate_prefixes_the_following_expression() {
        assert_eq!(ctx().negate().data().val().to_string(), "-data.val()");
        assert_eq!(ctx().negate().new_data().val().to_string(), "-newData.val()");
    }

    #[test]
    fn evaluate_places_literals() {
        assert_eq!(ctx().evaluate(1).to_string(), "1");
        assert_eq!(ctx().evaluate("1").to_string(), "'1'");
        assert_eq!(ctx().evaluate(add(1, 2)).to_string(), "1 + 2");
    }

    #[test]
    fn scope_wraps_in_parentheses() {
        assert_eq!(ctx().scope(1).to_string(), "(1)");
        assert_eq!(ctx().scope("1").to_string(), "('1')");
    }

    #[test]
    fn value_chains_continue_after_operators() {
        assert_eq!(data().val().equal().new_data().val().to_string(), "data.val() === newData.val()");
        assert_eq!(data().val().unequal().new_data().val().to_string(), "data.val() !== newData.val()");
        assert_eq!(data().val().equal().not().new_data().val().to_string(), "data.val() === !newData.val()");
        assert_eq!(data().val().equal().evaluate(1).to_string(), "data.val() === 1");
        assert_eq!(
            data().exists().and().scope(data().val().unequal().new_data().val()).to_string(),
            "data.exists() && (data.val() !== newData.val())"
        );
    }

    #[test]
    fn boolean_value_chains() {
        assert_eq!(
            data().is_boolean().and().new_data().is_boolean().to_string(),
            "data.isBoolean() && newData.isBoolean()"
        );
        assert_eq!(
            new_data().is_number().or().new_data().is_string().to_string(),
            "newData.isNumber() || newData.isString()"
        );
        assert_eq!(
            new_data().val().equal().evaluate(1).or().new_data().val().equal().evaluate(2).to_string(),
            "newData.val() === 1 || newData.val() === 2"
        );
    }

    #[test]
    fn number_value_chains() {
        assert_eq!(new_data().val_number().greater_than().now().to_string(), "newData.val() > now");
        assert_eq!(new_data().val_number().greater_than_or_equal_to().now().to_string(), "newData.val() >= now");
        assert_eq!(new_data().val_number().less_than().now().to_string(), "newData.val() < now");
        assert_eq!(new_data().val_number().less_than_or_equal_to().now().to_string(), "newData.val() <= now");
        assert_eq!(data().val_number().add().new_data().val_number().to_string(), "data.val() + newData.val()");
        assert_eq!(data().val_number().subtract().new_data().val_number().to_string(), "data.val() - newData.val()");
        assert_eq!(data().val_number().multiply().new_data().val_number().to_string(), "data.val() * newData.val()");
        assert_eq!(data().val_number().divide().new_data().val_number().to_string(), "data.val() / newData.val()");
        assert_eq!(data().val_number().modulus().new_data().val_number().to_string(), "data.val() % newData.val()");
    }

    #[test]
    fn chains_embed_other_chains_as_path_segments() {
        let rule = root().child(path("users").resolve(auth().uid())).child("name").val_string().length();
        assert_eq!(rule.to_string(), "root.child('users/' + auth.uid).child('name').val().length");
    }

    #[test]
    fn extending_a_cloned_chain_leaves_the_original_alone() {
        let base = data().val_number();
        let first = base.clone().greater_than().evaluate(1);
        let second = base.less_than().evaluate(5);
        assert_eq!(first.to_string(), "data.val() > 1");
        assert_eq!(second.to_string(), "data.val() < 5");
    }
}
