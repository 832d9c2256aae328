//! Compile run metrics.
//!
//! Collected on every run; [`crate::compile_verbose_with`] hands them to the
//! caller, the other entry points drop them.

use std::time::Duration;

/// Counts and timing for one compile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompileDetails {
    /// Total elapsed time.
    pub elapsed: Duration,
    /// Mappings visited, the `rules` root included.
    pub locations: usize,
    /// Builder leaves rendered to text.
    pub expressions: usize,
    /// Thunks invoked.
    pub thunks: usize,
    /// `.indexOn` lists passed through.
    pub index_hints: usize,
    /// Literal scalars passed through.
    pub scalars: usize,
    /// Deepest mapping level below `rules` (0 when `rules` has no nested mappings).
    pub max_depth: usize,
}

impl CompileDetails {
    /// Leaves written to the output, index hints included.
    pub fn leaves(&self) -> usize {
        self.expressions + self.index_hints + self.scalars
    }

    pub(crate) fn visit_location(&mut self, depth: usize) {
        self.locations += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}
