//! Reserved names of the rule tree.

/// Top-level key holding the rule tree.
pub const RULES: &str = "rules";

pub const READ: &str = ".read";
pub const WRITE: &str = ".write";
pub const VALIDATE: &str = ".validate";
/// Index hint. Its value must be a list of child keys.
pub const INDEX_ON: &str = ".indexOn";

/// Index-hint entry that indexes a location by its own value.
pub const VALUE: &str = ".value";

/// Conventional wildcard names. Any `$name` key is a wildcard.
pub const ID: &str = "$id";
pub const LOCATION: &str = "$location";
pub const OTHER: &str = "$other";

pub const PERMISSIONS: [&str; 3] = [READ, WRITE, VALIDATE];

bitflags::bitflags! {
    /// Optional strictness checks applied while compiling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Checks: u8 {
        /// Keys starting with `.` must be one of the reserved keys.
        const RESERVED_KEYS = 1 << 0;
        /// Keys starting with `$` must be `$` followed by an identifier.
        const WILDCARDS     = 1 << 1;
        /// `.read`, `.write` and `.validate` must hold a boolean or an expression.
        const PERMISSIONS   = 1 << 2;
    }
}

impl Default for Checks {
    fn default() -> Self {
        Checks::empty()
    }
}

/// How the compiler treats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Permission,
    IndexOn,
    /// Starts with `.` but is not reserved.
    UnknownReserved,
    Wildcard,
    Child,
}

pub fn classify(key: &str) -> KeyKind {
    match key {
        INDEX_ON => KeyKind::IndexOn,
        _ if PERMISSIONS.contains(&key) => KeyKind::Permission,
        _ if key.starts_with('.') => KeyKind::UnknownReserved,
        _ if key.starts_with('$') => KeyKind::Wildcard,
        _ => KeyKind::Child,
    }
}

pub fn is_valid_wildcard(key: &str) -> bool {
    regex!(r"^\$[A-Za-z_][A-Za-z0-9_]*$").is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_keys() {
        assert_eq!(classify(READ), KeyKind::Permission);
        assert_eq!(classify(".validate"), KeyKind::Permission);
        assert_eq!(classify(INDEX_ON), KeyKind::IndexOn);
        assert_eq!(classify(".priority"), KeyKind::UnknownReserved);
        assert_eq!(classify(ID), KeyKind::Wildcard);
        assert_eq!(classify("users"), KeyKind::Child);
    }

    #[test]
    fn wildcard_names() {
        assert!(is_valid_wildcard(ID));
        assert!(is_valid_wildcard(LOCATION));
        assert!(is_valid_wildcard(OTHER));
        assert!(is_valid_wildcard("$user_id2"));
        assert!(!is_valid_wildcard("$"));
        assert!(!is_valid_wildcard("$1st"));
        assert!(!is_valid_wildcard("$user-id"));
    }

    #[test]
    fn checks_default_to_none() {
        assert_eq!(Checks::default(), Checks::empty());
        assert!(Checks::all().contains(Checks::WILDCARDS | Checks::PERMISSIONS));
    }
}
