//! Path composition for `child`/`hasChild`/`hasChildren` arguments.
//!
//! A [`PathBuilder`] collects two kinds of segments:
//!
//! - **Static** segments (`path("users")`) are literal path text.
//! - **Dynamic** segments (`resolve(auth().uid())`) are expressions evaluated by
//!   the rule engine at run time.
//!
//! Serialization keeps every run of static segments inside one quoted string
//! and joins dynamic segments with the string concatenation operator:
//!
//! ```text
//! path("permissions/").path("/users/").resolve("auth.uid").path("/status/").path("/lock")
//!   ──▶ 'permissions/users/' + auth.uid + '/status/lock'
//! ```
//!
//! Slashes are normalized at the seams: a static segment loses a leading `/`
//! unless it comes first and a trailing `/` unless it comes last, and the
//! joins re-insert exactly one `/`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub text: String,
    pub kind: SegmentKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

/// Start a path with a static segment. An empty string starts an empty path.
pub fn path(segment: &str) -> PathBuilder {
    let builder = PathBuilder::new();
    if segment.is_empty() { builder } else { builder.path(segment) }
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder { segments: Vec::new() }
    }

    /// Append a static segment.
    pub fn path(mut self, segment: &str) -> Self {
        self.segments.push(PathSegment { text: segment.to_string(), kind: SegmentKind::Static });
        self
    }

    /// Append a dynamic segment holding the rendered text of `expression`.
    ///
    /// Plain strings are taken as already-rendered expression text, so
    /// `resolve("$uid")` emits `$uid` unquoted.
    pub fn resolve(mut self, expression: impl fmt::Display) -> Self {
        self.segments.push(PathSegment { text: expression.to_string(), kind: SegmentKind::Dynamic });
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        let count = self.segments.len();

        for (index, segment) in self.segments.iter().enumerate() {
            let first = index == 0;
            let last = index + 1 == count;

            match segment.kind {
                SegmentKind::Static => {
                    let after_static = index > 0 && self.segments[index - 1].kind == SegmentKind::Static;

                    // Reopen the literal the previous static segment closed.
                    if after_static && out.ends_with("/'") {
                        out.truncate(out.len() - 2);
                    }

                    let mut text = segment.text.as_str();
                    if !first {
                        text = text.strip_prefix('/').unwrap_or(text);
                    }
                    if !last {
                        text = text.strip_suffix('/').unwrap_or(text);
                    }

                    if !after_static {
                        out.push('\'');
                    }
                    if !first {
                        out.push('/');
                    }
                    out.push_str(text);
                    if !last {
                        out.push('/');
                    }
                    out.push('\'');
                }
                SegmentKind::Dynamic => {
                    if !first {
                        out.push_str(" + ");
                    }
                    out.push_str(&segment.text);
                    if !last {
                        out.push_str(" + ");
                    }
                }
            }
        }

        f.write_str(&out)
    }
}

impl From<&str> for PathBuilder {
    fn from(segment: &str) -> Self {
        path(segment)
    }
}

impl From<String> for PathBuilder {
    fn from(segment: String) -> Self {
        path(&segment)
    }
}

impl From<&PathBuilder> for PathBuilder {
    fn from(builder: &PathBuilder) -> Self {
        builder.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_renders_nothing() {
        assert_eq!(path("").to_string(), "");
        assert!(path("").is_empty());
    }

    #[test]
    fn single_static_path_keeps_its_slashes() {
        assert_eq!(path("/a/b/c").to_string(), "'/a/b/c'");
    }

    #[test]
    fn static_paths_merge_into_one_literal() {
        assert_eq!(path("a").path("b").path("c").to_string(), "'a/b/c'");
    }

    #[test]
    fn dynamic_path_alone_is_unquoted() {
        assert_eq!(path("").resolve("x").to_string(), "x");
    }

    #[test]
    fn dynamic_path_at_the_start() {
        assert_eq!(path("").resolve("a").path("b").path("c").to_string(), "a + '/b/c'");
    }

    #[test]
    fn dynamic_path_at_the_end() {
        assert_eq!(path("a").path("b").resolve("c").to_string(), "'a/b/' + c");
    }

    #[test]
    fn dynamic_path_in_the_middle() {
        assert_eq!(path("a").resolve("x").path("b").to_string(), "'a/' + x + '/b'");
    }

    #[test]
    fn redundant_slashes_collapse_at_the_seams() {
        let built = path("permissions/").path("/users/").resolve("auth.uid").path("/status/").path("/lock");
        assert_eq!(built.to_string(), "'permissions/users/' + auth.uid + '/status/lock'");
    }

    #[test]
    fn segments_are_recorded_in_order() {
        let built = path("a").resolve("b");
        let kinds: Vec<SegmentKind> = built.segments().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::Static, SegmentKind::Dynamic]);
        assert_eq!(built.segments()[1].text, "b");
    }
}
