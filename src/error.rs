use thiserror::Error;

/// Failures that abort a whole compile. No partial tree is ever returned.
///
/// `location` is the slash-joined key path from the tree root, for example
/// `/rules/users/$uid/.indexOn`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("rule tree has no top-level \"rules\" key")]
    MissingRules,

    #[error("value at {location} must be a list of child keys")]
    IndexNotList { location: String },

    #[error("unexpected list at {location}; lists are only allowed under .indexOn")]
    UnexpectedList { location: String },

    #[error("unknown reserved key {key:?} at {location}")]
    UnknownReservedKey { key: String, location: String },

    #[error("invalid wildcard key {key:?} at {location}")]
    InvalidWildcard { key: String, location: String },

    #[error("{key} at {location} must be a boolean or an expression")]
    InvalidPermission { key: String, location: String },
}

impl CompileError {
    /// Key path where the failure happened, `None` for [`CompileError::MissingRules`].
    pub fn location(&self) -> Option<&str> {
        match self {
            CompileError::MissingRules => None,
            CompileError::IndexNotList { location }
            | CompileError::UnexpectedList { location }
            | CompileError::UnknownReservedKey { location, .. }
            | CompileError::InvalidWildcard { location, .. }
            | CompileError::InvalidPermission { location, .. } => Some(location),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
