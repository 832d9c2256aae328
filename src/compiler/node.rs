use crate::{
    Auth, AuthToken, Chain, Check, Element, Expression, JsonValue, Kind, Null, Operation, Snapshot, Value,
};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered children of a rule location.
pub type RuleMap = IndexMap<String, RuleNode>;

/// One node of an uncompiled rule tree.
pub enum RuleNode {
    /// Nested location (or the tree root).
    Map(RuleMap),
    /// Literal scalar passed through unchanged (`true`, `42`, a hand-written
    /// expression string, ...).
    Value(JsonValue),
    /// Builder output, rendered to its rule-language text.
    Expression(Element),
    /// Literal list. Only valid under `.indexOn`.
    List(Vec<JsonValue>),
    /// Deferred node, invoked at compile time.
    Thunk(Box<dyn Fn() -> RuleNode>),
}

impl RuleNode {
    /// Wrap a closure that produces the node when the tree is compiled.
    pub fn thunk<F, N>(f: F) -> Self
    where
        F: Fn() -> N + 'static,
        N: Into<RuleNode>,
    {
        RuleNode::Thunk(Box::new(move || f().into()))
    }

    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<JsonValue>,
    {
        RuleNode::List(items.into_iter().map(Into::into).collect())
    }

    /// Wrap any builder output.
    pub fn expression(expression: impl Expression) -> Self {
        RuleNode::Expression(expression.into_element())
    }

    pub fn map() -> Self {
        RuleNode::Map(RuleMap::new())
    }

    pub fn as_map(&self) -> Option<&RuleMap> {
        match self {
            RuleNode::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short label used in logs and error reports.
    pub fn variant_name(&self) -> &'static str {
        match self {
            RuleNode::Map(_) => "map",
            RuleNode::Value(_) => "value",
            RuleNode::Expression(_) => "expression",
            RuleNode::List(_) => "list",
            RuleNode::Thunk(_) => "thunk",
        }
    }
}

impl fmt::Debug for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleNode::Map(map) => f.debug_map().entries(map.iter()).finish(),
            RuleNode::Value(value) => write!(f, "{value}"),
            RuleNode::Expression(element) => write!(f, "<{element}>"),
            RuleNode::List(items) => f.debug_list().entries(items.iter()).finish(),
            RuleNode::Thunk(_) => f.write_str("<function>"),
        }
    }
}

impl Default for RuleNode {
    fn default() -> Self {
        RuleNode::map()
    }
}

impl From<RuleMap> for RuleNode {
    fn from(map: RuleMap) -> Self {
        RuleNode::Map(map)
    }
}

/// Collect `(key, child)` pairs into a [`RuleNode::Map`], keeping their order.
impl<K, V> FromIterator<(K, V)> for RuleNode
where
    K: Into<String>,
    V: Into<RuleNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RuleNode::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<JsonValue> for RuleNode {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(object) => RuleNode::Map(object.into_iter().map(|(k, v)| (k, v.into())).collect()),
            JsonValue::Array(items) => RuleNode::List(items),
            other => RuleNode::Value(other),
        }
    }
}

impl From<Null> for RuleNode {
    fn from(_: Null) -> Self {
        RuleNode::Value(JsonValue::Null)
    }
}

macro_rules! scalar_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RuleNode {
                fn from(value: $ty) -> Self {
                    RuleNode::Value(JsonValue::from(value))
                }
            }
        )*
    };
}

scalar_node!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, &str, String);

macro_rules! expression_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RuleNode {
                fn from(expression: $ty) -> Self {
                    RuleNode::Expression(expression.into_element())
                }
            }
        )*
    };
}

expression_node!(Auth, AuthToken, Snapshot, Operation, Check, Chain, Element);

impl<K: Kind> From<Value<K>> for RuleNode {
    fn from(value: Value<K>) -> Self {
        RuleNode::Expression(value.into_element())
    }
}
