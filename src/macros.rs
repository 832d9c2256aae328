/// Lazily compiled, process-wide regex.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`RuleNode`](crate::RuleNode) tree with JSON-like syntax.
///
/// - `key => { ... }` nests a location,
/// - `key => [a, b]` is a literal list (for `.indexOn`),
/// - `key => expr` converts `expr` with `RuleNode::from`.
///
/// ```
/// use firerules::{RuleNode, auth, rules};
///
/// let tree = rules! {
///     "rules" => {
///         "users" => {
///             ".indexOn" => ["name"],
///             "$uid" => {
///                 ".read" => auth().uid().equal().evaluate("admin"),
///                 ".write" => false,
///             },
///         },
///     },
/// };
/// assert!(tree.as_map().is_some_and(|root| root.contains_key("rules")));
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        $crate::RuleNode::Map($crate::RuleMap::new())
    };

    (@entries $map:ident;) => {};

    (@entries $map:ident; $key:expr => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::rules!($($inner)*));
        $crate::rules!(@entries $map; $($($rest)*)?);
    };

    (@entries $map:ident; $key:expr => [ $($item:expr),* $(,)? ] $(, $($rest:tt)*)?) => {
        $map.insert(
            ::std::string::String::from($key),
            $crate::RuleNode::List(::std::vec![$(::std::convert::Into::<$crate::JsonValue>::into($item)),*]),
        );
        $crate::rules!(@entries $map; $($($rest)*)?);
    };

    (@entries $map:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), $crate::RuleNode::from($value));
        $crate::rules!(@entries $map; $($($rest)*)?);
    };

    ($($body:tt)+) => {{
        let mut map = $crate::RuleMap::new();
        $crate::rules!(@entries map; $($body)+);
        $crate::RuleNode::Map(map)
    }};
}
