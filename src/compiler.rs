//! Rule tree compiler.
//!
//! Walks an uncompiled [`RuleNode`] tree depth first and produces the JSON
//! document the database expects:
//!
//! ```text
//! RuleNode::Map         ──▶ object (keys kept in insertion order)
//! RuleNode::Expression  ──▶ string with the rendered expression
//! RuleNode::Thunk       ──▶ invoked, then compiled like any other node
//! RuleNode::Value       ──▶ scalars copied unchanged, objects compiled as maps,
//!                           arrays rejected like lists
//! RuleNode::List        ──▶ copied unchanged, only under `.indexOn`
//! ```
//!
//! Only the top-level `rules` key is compiled and returned. The first error
//! aborts the run; nothing partial is handed back.
//!
//! ## Modules
//!
//! - `node.rs`: the [`RuleNode`] tree and its conversions.
//! - `keys.rs`: reserved key names, key classification, [`Checks`].
//! - `metrics.rs`: [`CompileDetails`] gathered during a run.

#[path = "compiler/keys.rs"]
pub mod keys;
#[path = "compiler/metrics.rs"]
mod metrics;
#[path = "compiler/node.rs"]
mod node;

pub use keys::Checks;
pub use metrics::CompileDetails;
pub use node::{RuleMap, RuleNode};

use crate::{CompileError, JsonValue, Result};
use keys::KeyKind;
use std::time::Instant;

/// Single-use compiler state for one run.
pub(crate) struct Compiler {
    checks: Checks,
    details: CompileDetails,
}

impl Compiler {
    pub(crate) fn new(checks: Checks) -> Self {
        Compiler { checks, details: CompileDetails::default() }
    }

    /// Compile `tree` into `{"rules": ...}` and return it with the run metrics.
    pub(crate) fn run(mut self, tree: &RuleNode) -> Result<(JsonValue, CompileDetails)> {
        let start = Instant::now();

        let rules = self.compile_root(tree)?;
        let mut output = serde_json::Map::new();
        output.insert(keys::RULES.to_string(), rules);

        self.details.elapsed = start.elapsed();
        log::debug!(
            "compiled {} locations, {} expressions, {} thunks in {:?}",
            self.details.locations,
            self.details.expressions,
            self.details.thunks,
            self.details.elapsed
        );
        Ok((JsonValue::Object(output), self.details))
    }

    fn compile_root(&mut self, tree: &RuleNode) -> Result<JsonValue> {
        match tree {
            RuleNode::Thunk(produce) => {
                self.details.thunks += 1;
                let produced = produce();
                self.compile_root(&produced)
            }
            RuleNode::Value(JsonValue::Object(object)) => {
                let nested = RuleNode::from(JsonValue::Object(object.clone()));
                self.compile_root(&nested)
            }
            RuleNode::Map(map) => {
                let rules = map.get(keys::RULES).ok_or(CompileError::MissingRules)?;
                self.compile_node(rules, &format!("/{}", keys::RULES), 0)
            }
            other => {
                log::debug!("rule tree root is a {}, not a map", other.variant_name());
                Err(CompileError::MissingRules)
            }
        }
    }

    fn compile_node(&mut self, node: &RuleNode, location: &str, depth: usize) -> Result<JsonValue> {
        match node {
            RuleNode::Map(map) => {
                log::trace!("visiting {location}");
                self.details.visit_location(depth);

                let mut object = serde_json::Map::with_capacity(map.len());
                for (key, child) in map {
                    let child_location = format!("{location}/{key}");
                    let value = match self.check_key(key, &child_location)? {
                        KeyKind::IndexOn => self.compile_index(child, &child_location)?,
                        KeyKind::Permission => self.compile_permission(key, child, &child_location, depth)?,
                        _ => self.compile_node(child, &child_location, depth + 1)?,
                    };
                    object.insert(key.clone(), value);
                }
                Ok(JsonValue::Object(object))
            }
            RuleNode::Expression(element) => {
                let text = element.to_string();
                log::debug!("{location}: {text}");
                self.details.expressions += 1;
                Ok(JsonValue::String(text))
            }
            RuleNode::Thunk(produce) => {
                log::debug!("{location}: invoking thunk");
                self.details.thunks += 1;
                let produced = produce();
                self.compile_node(&produced, location, depth)
            }
            RuleNode::Value(JsonValue::Array(_)) => {
                Err(CompileError::UnexpectedList { location: location.to_string() })
            }
            RuleNode::Value(JsonValue::Object(object)) => {
                let nested = RuleNode::from(JsonValue::Object(object.clone()));
                self.compile_node(&nested, location, depth)
            }
            RuleNode::Value(value) => {
                self.details.scalars += 1;
                Ok(value.clone())
            }
            RuleNode::List(_) => Err(CompileError::UnexpectedList { location: location.to_string() }),
        }
    }

    fn compile_index(&mut self, node: &RuleNode, location: &str) -> Result<JsonValue> {
        match node {
            RuleNode::List(items) => {
                self.details.index_hints += 1;
                Ok(JsonValue::Array(items.clone()))
            }
            RuleNode::Value(JsonValue::Array(items)) => {
                self.details.index_hints += 1;
                Ok(JsonValue::Array(items.clone()))
            }
            RuleNode::Thunk(produce) => {
                self.details.thunks += 1;
                let produced = produce();
                self.compile_index(&produced, location)
            }
            other => {
                log::debug!("{location} holds a {}", other.variant_name());
                Err(CompileError::IndexNotList { location: location.to_string() })
            }
        }
    }

    fn compile_permission(&mut self, key: &str, node: &RuleNode, location: &str, depth: usize) -> Result<JsonValue> {
        let value = self.compile_node(node, location, depth + 1)?;
        if self.checks.contains(Checks::PERMISSIONS) && !(value.is_boolean() || value.is_string()) {
            return Err(CompileError::InvalidPermission { key: key.to_string(), location: location.to_string() });
        }
        Ok(value)
    }

    fn check_key(&self, key: &str, location: &str) -> Result<KeyKind> {
        let kind = keys::classify(key);
        match kind {
            KeyKind::UnknownReserved if self.checks.contains(Checks::RESERVED_KEYS) => {
                Err(CompileError::UnknownReservedKey { key: key.to_string(), location: location.to_string() })
            }
            KeyKind::Wildcard if self.checks.contains(Checks::WILDCARDS) && !keys::is_valid_wildcard(key) => {
                Err(CompileError::InvalidWildcard { key: key.to_string(), location: location.to_string() })
            }
            _ => Ok(kind),
        }
    }
}
