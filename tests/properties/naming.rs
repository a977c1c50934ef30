//! Property tests for configuration naming.

use proptest::prelude::*;

use capstan::model::names;
use capstan::{Binary, BucketKind, Component, ConfigError, Name};

fn qualifier_word() -> impl Strategy<Value = String> {
    // Capitalized tail the conventional binary names put after "main".
    proptest::string::string_regex("[A-Z][a-z0-9]{0,12}").unwrap()
}

fn lower_word() -> impl Strategy<Value = String> {
    // Short enough that it cannot contain the implementation token itself.
    proptest::string::string_regex("[a-z][a-z0-9]{0,9}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The qualifier of a conventionally named binary is the
    /// uncapitalized remainder after the "main" prefix.
    #[test]
    fn property_qualifier_is_the_uncapitalized_remainder(word in qualifier_word()) {
        let binary = Binary::executable(format!("main{word}"));
        let qualifier = names::qualifying_name(&binary).unwrap();

        let mut expected = word.clone();
        expected.replace_range(0..1, &word[0..1].to_lowercase());
        prop_assert_eq!(qualifier.as_str(), expected);
    }

    /// PROPERTY: Test suite binaries must carry the executable suffix, and
    /// stripping removes exactly that trailing suffix.
    #[test]
    fn property_test_binaries_require_the_suffix(word in qualifier_word()) {
        prop_assume!(!word.ends_with("Executable"));

        let malformed = Binary::test_executable(format!("main{word}"));
        prop_assert!(
            matches!(
                names::qualifying_name(&malformed),
                Err(ConfigError::MalformedBinaryName { .. })
            ),
            "expected Err(ConfigError::MalformedBinaryName)"
        );

        let suffixed = Binary::test_executable(format!("main{word}Executable"));
        let qualifier = names::qualifying_name(&suffixed).unwrap();

        let mut expected = word.clone();
        expected.replace_range(0..1, &word[0..1].to_lowercase());
        prop_assert_eq!(qualifier.as_str(), expected);
    }

    /// PROPERTY: Composing with an empty side returns the other side
    /// unchanged; otherwise the trailing part is capitalized onto the end.
    #[test]
    fn property_compose_identities(leading in lower_word(), trailing in lower_word()) {
        prop_assert_eq!(names::compose("", &trailing).as_str(), trailing.as_str());
        prop_assert_eq!(names::compose(&leading, "").as_str(), leading.as_str());

        let mut capitalized = trailing.clone();
        capitalized.replace_range(0..1, &trailing[0..1].to_uppercase());
        prop_assert_eq!(
            names::compose(&leading, &trailing).as_str(),
            format!("{leading}{capitalized}")
        );
    }

    /// PROPERTY: Bucket names substitute the scope token for the
    /// implementation token, whatever the component is called.
    #[test]
    fn property_bucket_names_substitute_the_token(name in lower_word()) {
        let component = Component::library(name.as_str());

        for kind in BucketKind::ALL {
            let bucket = kind.configuration_name(&component).unwrap();
            if name == "main" {
                prop_assert_eq!(bucket.as_str(), kind.token());
            } else {
                let mut capitalized = kind.token().to_string();
                capitalized.replace_range(0..1, &kind.token()[0..1].to_uppercase());
                prop_assert_eq!(bucket.to_string(), format!("{name}{capitalized}"));
            }
        }
    }

    /// PROPERTY: The case helpers are idempotent and preserve length for
    /// ASCII names.
    #[test]
    fn property_case_helpers_are_idempotent(word in "[A-Za-z][A-Za-z0-9]{0,12}") {
        let name = Name::new(word.as_str());

        let lower = name.uncapitalized();
        prop_assert_eq!(lower.uncapitalized(), lower);
        prop_assert_eq!(lower.len(), name.len());

        let upper = name.capitalized();
        prop_assert_eq!(upper.capitalized(), upper);
        prop_assert_eq!(upper.len(), name.len());
    }
}
