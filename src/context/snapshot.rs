use super::kind::{AnyKind, Kind};
use super::value::{BooleanValue, NullValue, NumberValue, StringValue, Value};
use crate::{Chain, Element, Expression, Member, PathBuilder};
use std::fmt;

/// A data snapshot (`root`, `data`, `newData`, or a child of one).
///
/// Every method starts a new branch of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    chain: Chain,
}

impl Snapshot {
    pub(crate) fn from_chain(chain: Chain) -> Self {
        Snapshot { chain }
    }

    pub fn into_chain(self) -> Chain {
        self.chain
    }

    fn call<K: Kind>(self, name: &str, args: &str) -> Value<K> {
        Value::from_chain(self.chain.branch(Member::call(name, args)))
    }

    fn navigate(self, name: &str, args: &str) -> Snapshot {
        Snapshot { chain: self.chain.branch(Member::call(name, args)) }
    }

    /// Primitive value at this location, kind unknown.
    pub fn val(self) -> Value<AnyKind> {
        self.call("val", "")
    }

    pub fn val_string(self) -> StringValue {
        self.call("val", "")
    }

    pub fn val_number(self) -> NumberValue {
        self.call("val", "")
    }

    pub fn val_boolean(self) -> BooleanValue {
        self.call("val", "")
    }

    pub fn val_null(self) -> NullValue {
        self.call("val", "")
    }

    /// Snapshot at a relative path. Accepts a [`PathBuilder`] or a plain string.
    pub fn child(self, path: impl Into<PathBuilder>) -> Snapshot {
        let path = path.into();
        self.navigate("child", &path.to_string())
    }

    pub fn parent(self) -> Snapshot {
        self.navigate("parent", "")
    }

    pub fn has_child(self, path: impl Into<PathBuilder>) -> BooleanValue {
        let path = path.into();
        self.call("hasChild", &path.to_string())
    }

    /// `hasChildren()`: true when the location holds any children.
    pub fn has_children(self) -> BooleanValue {
        self.call("hasChildren", "")
    }

    /// `hasChildren([...])`: true when every listed child exists.
    pub fn has_children_at<I, P>(self, paths: I) -> BooleanValue
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuilder>,
    {
        let rendered: Vec<String> = paths.into_iter().map(|p| p.into().to_string()).collect();
        self.call("hasChildren", &format!("[{}]", rendered.join(", ")))
    }

    pub fn exists(self) -> BooleanValue {
        self.call("exists", "")
    }

    pub fn get_priority(self) -> Value<AnyKind> {
        self.call("getPriority", "")
    }

    pub fn is_number(self) -> BooleanValue {
        self.call("isNumber", "")
    }

    pub fn is_string(self) -> BooleanValue {
        self.call("isString", "")
    }

    pub fn is_boolean(self) -> BooleanValue {
        self.call("isBoolean", "")
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}

impl Expression for Snapshot {
    fn into_element(self) -> Element {
        Element::Chain(self.chain)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ctx, path};

    #[test]
    fn val_variants_render_the_same_call() {
        assert_eq!(ctx().data().val().to_string(), "data.val()");
        assert_eq!(ctx().data().val_string().to_string(), "data.val()");
        assert_eq!(ctx().data().val_number().to_string(), "data.val()");
        assert_eq!(ctx().data().val_boolean().to_string(), "data.val()");
        assert_eq!(ctx().data().val_null().to_string(), "data.val()");
    }

    #[test]
    fn child_accepts_builders_and_strings() {
        assert_eq!(ctx().data().child(path("a")).to_string(), "data.child('a')");
        assert_eq!(ctx().data().child("a").to_string(), "data.child('a')");
        assert_eq!(ctx().data().child(path("a")).exists().to_string(), "data.child('a').exists()");
    }

    #[test]
    fn parent_navigation() {
        assert_eq!(ctx().data().parent().to_string(), "data.parent()");
        assert_eq!(ctx().data().parent().parent().child("x").to_string(), "data.parent().parent().child('x')");
    }

    #[test]
    fn has_child() {
        assert_eq!(ctx().data().has_child(path("a")).to_string(), "data.hasChild('a')");
        assert_eq!(ctx().data().has_child("a").to_string(), "data.hasChild('a')");
    }

    #[test]
    fn has_children() {
        assert_eq!(ctx().data().has_children().to_string(), "data.hasChildren()");
        assert_eq!(ctx().data().has_children_at([path("a")]).to_string(), "data.hasChildren(['a'])");
        assert_eq!(ctx().data().has_children_at(["a"]).to_string(), "data.hasChildren(['a'])");
        assert_eq!(ctx().data().has_children_at([path("a"), path("b")]).to_string(), "data.hasChildren(['a', 'b'])");
        assert_eq!(ctx().data().has_children_at(["a", "b"]).to_string(), "data.hasChildren(['a', 'b'])");
    }

    #[test]
    fn snapshot_checks() {
        assert_eq!(ctx().data().exists().to_string(), "data.exists()");
        assert_eq!(ctx().data().get_priority().to_string(), "data.getPriority()");
        assert_eq!(ctx().data().is_number().to_string(), "data.isNumber()");
        assert_eq!(ctx().data().is_string().to_string(), "data.isString()");
        assert_eq!(ctx().data().is_boolean().to_string(), "data.isBoolean()");
    }

    #[test]
    fn dynamic_child_paths() {
        let rule = ctx().root().child(path("users").resolve(ctx().auth().uid())).exists();
        assert_eq!(rule.to_string(), "root.child('users/' + auth.uid).exists()");
    }
}
