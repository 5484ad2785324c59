//! Property-based tests for prefix joining.
//!
//! Note: The normalize module already has property tests for the scanning
//! primitives. This module focuses on the public join operations and the
//! equality contract.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use crate::PathPrefix;

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// Strategy for separator-free, colon-free path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{1,12}"
}

// Strategy for base texts: bare, anchored, trailing, URL-style, empty
fn base_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        segment_strategy(),
        segment_strategy().prop_map(|s| format!("/{s}")),
        segment_strategy().prop_map(|s| format!("{s}/")),
        segment_strategy().prop_map(|s| format!("http://{s}")),
        Just(String::new()),
    ]
}

// Strategy for join tokens, including anchored and run-carrying ones
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        segment_strategy(),
        segment_strategy().prop_map(|s| format!("/{s}")),
        (segment_strategy(), segment_strategy()).prop_map(|(a, b)| format!("{a}//{b}")),
    ]
}

fn tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Absolute joins begin with exactly one separator
    #[test]
    fn join_always_absolute(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        let joined = prefix.join(&tokens);
        prop_assert!(joined.starts_with('/'));
        prop_assert!(!joined.starts_with("//"));
    }

    // Feeding a join result back in as a base changes nothing
    #[test]
    fn join_idempotent_as_base(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        let joined = prefix.join(&tokens);
        let rejoined = PathPrefix::new(joined.clone()).join(std::iter::empty::<&str>());
        prop_assert_eq!(rejoined, joined);
    }

    // Join output never contains a separator run unless a colon precedes it
    #[test]
    fn join_no_plain_separator_runs(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        let joined = prefix.join(&tokens);
        let bytes = joined.as_bytes();
        for i in 1..bytes.len() {
            if bytes[i] == b'/' && bytes[i - 1] == b'/' {
                prop_assert!(i >= 2 && bytes[i - 2] == b':');
            }
        }
    }

    // An absolute join is its relative join with one leading separator
    #[test]
    fn join_is_absolutized_relative_join(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        let absolute = prefix.join(&tokens);
        let relative = prefix.relative_join(&tokens);
        prop_assert_eq!(absolute, format!("/{relative}"));
    }

    // Relative joins never begin with the separator
    #[test]
    fn relative_join_never_leading(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        prop_assert!(!prefix.relative_join(&tokens).starts_with('/'));
    }

    // URL-style bases keep their authority marker through relative joins
    #[test]
    fn relative_join_preserves_scheme(host in segment_strategy(), tokens in tokens_strategy()) {
        let base = format!("http://{host}");
        let prefix = PathPrefix::new(base.clone());
        prop_assert!(prefix.relative_join(&tokens).starts_with(&base));
    }

    // An explicitly absent separator is always rejected
    #[test]
    fn missing_separator_is_rejected(base in base_strategy(), tokens in tokens_strategy()) {
        let prefix = PathPrefix::new(base);
        let result = prefix.relative_join_with(&tokens, None);
        prop_assert!(result.is_err());
        prop_assert!(result.unwrap_err().is_invalid_argument());
    }

    // Supplying the separator explicitly matches configuring it up front
    #[test]
    fn explicit_separator_matches_configured(base in base_strategy(), tokens in tokens_strategy()) {
        let stored = PathPrefix::new(base.clone()).with_separator("_");
        let explicit = PathPrefix::new(base)
            .relative_join_with(&tokens, Some("_"))
            .unwrap();
        prop_assert_eq!(stored.relative_join(&tokens), explicit);
    }

    // The separator never participates in equality
    #[test]
    fn equality_ignores_separator(base in base_strategy(), sep in "[_:.#]{1,2}") {
        let plain = PathPrefix::new(base.clone());
        let custom = PathPrefix::new(base).with_separator(sep);
        prop_assert_eq!(plain, custom);
    }

    // A prefix compares equal to its own base text
    #[test]
    fn prefix_equals_its_base_text(base in base_strategy()) {
        let prefix = PathPrefix::new(base.clone());
        prop_assert!(prefix == base.as_str());
        prop_assert!(prefix == base);
    }

    // Hashing agrees with the base text, whatever the separator
    #[test]
    fn hash_matches_base_text(base in base_strategy(), sep in "[_:.#]{1,2}") {
        let prefix = PathPrefix::new(base.clone()).with_separator(sep);
        prop_assert_eq!(hash_of(&prefix), hash_of(&base));
    }

    // Set membership is checkable with the plain base text
    #[test]
    fn set_lookup_by_base_text(base in base_strategy()) {
        let mut set = HashSet::new();
        set.insert(PathPrefix::new(base.clone()).with_separator("_"));
        prop_assert!(set.contains(base.as_str()));
    }
}
