//! Property tests for filesystem-safe name sanitizing.

use proptest::prelude::*;

use iconsync::domain::services::{sanitize, UNSAFE_FILENAME_CHARS};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no unsafe character survives.
    #[test]
    fn property_no_unsafe_characters(name in "(?s).{0,128}") {
        let out = sanitize(&name);
        prop_assert!(!out.contains(UNSAFE_FILENAME_CHARS), "{:?}", out);
    }

    /// PROPERTY: output is trimmed and whitespace only appears as single spaces.
    #[test]
    fn property_whitespace_is_collapsed(name in "(?s).{0,128}") {
        let out = sanitize(&name);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "), "{:?}", out);
        prop_assert!(
            out.chars().all(|c| c == ' ' || !c.is_whitespace()),
            "{:?}",
            out
        );
    }

    /// PROPERTY: sanitizing is idempotent.
    #[test]
    fn property_sanitize_is_idempotent(name in "(?s).{0,128}") {
        let once = sanitize(&name);
        prop_assert_eq!(sanitize(&once), once);
    }

    /// PROPERTY: safe, already-trimmed names pass through unchanged.
    #[test]
    fn property_safe_names_are_untouched(name in "[A-Za-z0-9][A-Za-z0-9._-]{0,31}") {
        prop_assert_eq!(sanitize(&name), name);
    }
}
