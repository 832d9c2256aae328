use crate::compiler::Compiler;
use crate::{Checks, CompileDetails, JsonValue, Result, RuleNode};

/// Options that affect compilation.
///
/// The default is permissive: only the missing `rules` root and malformed
/// `.indexOn` values are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Extra strictness checks applied to keys and permission values.
    pub checks: Checks,
}

impl Options {
    /// Every check enabled.
    pub fn strict() -> Self {
        Options { checks: Checks::all() }
    }
}

/// Result from [`compile_verbose`] and [`compile_verbose_with`].
#[derive(Debug, Clone)]
pub struct CompileResultVerbose {
    /// The compiled `{"rules": ...}` document.
    pub rules: JsonValue,
    pub details: CompileDetails,
}

/// Compile a rule tree with the default [`Options`].
///
/// # Example
/// ```
/// use firerules::{RuleNode, compile, rules};
///
/// let out = compile(&rules! { "rules" => { ".indexOn" => ["id"] } }).unwrap();
/// assert_eq!(out, serde_json::json!({ "rules": { ".indexOn": ["id"] } }));
///
/// assert!(compile(&rules! { "rules" => { ".indexOn" => "id" } }).is_err());
/// assert!(compile(&RuleNode::map()).is_err());
/// ```
pub fn compile(tree: &RuleNode) -> Result<JsonValue> {
    compile_with(tree, &Options::default())
}

pub fn compile_with(tree: &RuleNode, options: &Options) -> Result<JsonValue> {
    Compiler::new(options.checks).run(tree).map(|(rules, _)| rules)
}

pub fn compile_verbose(tree: &RuleNode) -> Result<CompileResultVerbose> {
    compile_verbose_with(tree, &Options::default())
}

/// Compile `tree` and also return counts and timing for the run.
pub fn compile_verbose_with(tree: &RuleNode, options: &Options) -> Result<CompileResultVerbose> {
    let (rules, details) = Compiler::new(options.checks).run(tree)?;
    Ok(CompileResultVerbose { rules, details })
}
