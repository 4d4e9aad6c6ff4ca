//! Property tests for code component naming.

use proptest::prelude::*;

use iconsync::domain::services::component_identifier;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every base name yields a usable identifier.
    #[test]
    fn property_identifier_is_valid(
        base in "(?s).{0,48}",
        prefix in proptest::option::of("[A-Za-z0-9 -]{0,8}"),
    ) {
        let ident = component_identifier(prefix.as_deref(), &base);

        prop_assert!(!ident.is_empty());
        let first = ident.chars().next().unwrap();
        prop_assert!(!first.is_ascii_digit(), "{:?}", ident);
        prop_assert!(
            ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
            "{:?}",
            ident
        );
    }
}
