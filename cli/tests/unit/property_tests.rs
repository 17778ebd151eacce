//! Property-based tests for CI variable value escaping.

use proptest::prelude::*;
use sfci_cli::domain::{CiPlatform, sanitize_value};

// Values without backslashes, so escapes in the output are unambiguous.
fn plain_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9&\" {}:,/._-]{0,64}"
}

proptest! {
    #[test]
    fn prop_gitlab_escapes_every_ampersand_and_nothing_else(value in plain_value()) {
        let sanitized = sanitize_value(CiPlatform::Gitlab, &value);
        prop_assert_eq!(sanitized.matches("\\&").count(), value.matches('&').count());
        prop_assert_eq!(sanitized.len(), value.len() + value.matches('&').count());
        prop_assert_eq!(sanitized.replace("\\&", "&"), value);
    }

    #[test]
    fn prop_github_escapes_ampersands_and_quotes(value in plain_value()) {
        let sanitized = sanitize_value(CiPlatform::Github, &value);
        let escapable = value.matches(['&', '"']).count();
        prop_assert_eq!(sanitized.len(), value.len() + escapable);
        prop_assert_eq!(sanitized.replace("\\\"", "\"").replace("\\&", "&"), value);
    }

    #[test]
    fn prop_github_leaves_no_bare_quote(value in plain_value()) {
        let sanitized = sanitize_value(CiPlatform::Github, &value);
        let chars: Vec<char> = sanitized.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if *c == '"' {
                prop_assert!(i > 0 && chars[i - 1] == '\\');
            }
        }
    }

    #[test]
    fn prop_values_without_specials_are_unchanged(value in "[a-zA-Z0-9 ._-]{0,64}") {
        prop_assert_eq!(sanitize_value(CiPlatform::Github, &value), value.clone());
        prop_assert_eq!(sanitize_value(CiPlatform::Gitlab, &value), value);
    }
}
