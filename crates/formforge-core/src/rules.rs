//! Static password complexity rule registry.
//!
//! Loaded once, immutable, process-wide. The schema generator emits one
//! regex constraint per selected rule; the preview validator compiles the
//! same patterns and applies them directly.

/// One password complexity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRule {
    /// Stable rule key referenced from `ValidationRules::patterns`.
    pub id: &'static str,
    /// Display label for the builder UI.
    pub label: &'static str,
    /// Character-class pattern the value must match.
    pub pattern: &'static str,
    /// User-facing message emitted when the constraint fails.
    pub message: &'static str,
}

/// The rule table, in display order.
pub const PASSWORD_RULES: [PasswordRule; 4] = [
    PasswordRule {
        id: "uppercase",
        label: "Require Uppercase (A-Z)",
        pattern: "[A-Z]",
        message: "Uppercase is required",
    },
    PasswordRule {
        id: "number",
        label: "Require Number (0-9)",
        pattern: r"\d",
        message: "Number is required",
    },
    PasswordRule {
        id: "special",
        label: "Require Special Char (@$!%*?&)",
        pattern: "[@$!%*?&]",
        message: "Special character is required",
    },
    PasswordRule {
        id: "lowercase",
        label: "Require Lowercase (a-z)",
        pattern: "[a-z]",
        message: "Lowercase is required",
    },
];

/// Look up a rule by key.
///
/// Unknown keys mean "rule absent": stored field data may reference a key
/// removed from a newer table, and such references are skipped silently
/// rather than failing the whole generation.
pub fn password_rule(key: &str) -> Option<&'static PasswordRule> {
    PASSWORD_RULES.iter().find(|rule| rule.id == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_rule() {
        let rule = password_rule("uppercase").unwrap();
        assert_eq!(rule.pattern, "[A-Z]");
        assert_eq!(rule.message, "Uppercase is required");
    }

    #[test]
    fn test_unknown_rule_is_absent_not_fatal() {
        assert!(password_rule("retired-rule").is_none());
    }
}
