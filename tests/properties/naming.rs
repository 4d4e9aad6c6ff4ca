//! Property tests for name transforms.

use proptest::prelude::*;

use iconsync::domain::services::{to_kebab_case, to_pascal_case, transform};
use iconsync::{NameTransform, NamingPolicy};

fn any_transform() -> impl Strategy<Value = NameTransform> {
    prop_oneof![
        Just(NameTransform::Preserve),
        Just(NameTransform::KebabCase),
        Just(NameTransform::CamelCase),
        Just(NameTransform::PascalCase),
    ]
}

fn ascii_words() -> impl Strategy<Value = Vec<String>> {
    let word = proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap();
    proptest::collection::vec(word, 1..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same name and policy always produce the same base name.
    #[test]
    fn property_transform_is_deterministic(
        name in "(?s).{0,64}",
        t in any_transform(),
        sanitize in any::<bool>(),
    ) {
        let policy = NamingPolicy::new(t).with_sanitize(sanitize);
        prop_assert_eq!(transform(&name, &policy), transform(&name, &policy));
    }

    /// PROPERTY: kebab output has no ASCII uppercase, whitespace or underscores.
    #[test]
    fn property_kebab_has_no_case_or_spacing(name in "(?s).{0,64}") {
        let out = to_kebab_case(&name);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()), "{:?}", out);
        prop_assert!(!out.chars().any(char::is_whitespace), "{:?}", out);
        prop_assert!(!out.contains('_'), "{:?}", out);
    }

    /// PROPERTY: kebab-casing ASCII input twice changes nothing.
    #[test]
    fn property_kebab_is_idempotent(name in "[ -~]{0,64}") {
        let once = to_kebab_case(&name);
        prop_assert_eq!(to_kebab_case(&once), once);
    }

    /// PROPERTY: PascalCase of separated words drops every separator.
    #[test]
    fn property_pascal_joins_words(words in ascii_words(), sep in "[-_ ]{1,3}") {
        let name = words.join(&sep);
        let out = to_pascal_case(&name);

        prop_assert!(!out.contains(['-', '_', ' ']), "{:?}", out);
        prop_assert_eq!(out.len(), words.iter().map(String::len).sum::<usize>());
        let first = out.chars().next().unwrap();
        prop_assert!(!first.is_ascii_lowercase(), "{:?}", out);
    }

    /// PROPERTY: a sanitized base name never contains a path separator.
    #[test]
    fn property_sanitized_name_has_no_separator(
        name in "(?s).{0,64}",
        t in any_transform(),
    ) {
        let out = transform(&name, &NamingPolicy::new(t));
        prop_assert!(!out.contains('/') && !out.contains('\\'), "{:?}", out);
    }
}
