//! Property tests for url and servlet-name matching.

use std::sync::Arc;

use filter_chain::matching::{name, path};
use filter_chain::{ChainBuilder, Dispatch, DispatcherType, FilterRegistration, MappingTable};
use proptest::prelude::*;

// Strategy: context-relative paths like "/a/b.c"
fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(/[a-z0-9.]{0,6}){1,4}").unwrap()
}

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,6}").unwrap()
}

fn url_matches(pattern: &str, request_path: &str) -> bool {
    path::matches(Some(pattern), Some(request_path))
}

proptest! {
    /// Property: every pattern matches itself
    #[test]
    fn proptest_exact_pattern_matches_itself(p in arb_path()) {
        prop_assert!(url_matches(&p, &p));
    }

    /// Property: "/*" matches every present path
    #[test]
    fn proptest_universal_pattern_matches_everything(p in arb_path()) {
        prop_assert!(url_matches("/*", &p));
    }

    /// Property: an absent path never matches
    #[test]
    fn proptest_absent_path_never_matches(p in arb_path()) {
        prop_assert!(!path::matches(Some(p.as_str()), None));
    }

    /// Property: a prefix pattern matches its base, anything under it,
    /// and nothing that merely shares a string prefix
    #[test]
    fn proptest_prefix_boundaries(
        base in arb_segment(),
        rest in arb_path(),
        suffix in arb_segment()
    ) {
        let pattern = format!("/{base}/*");
        let base_path = format!("/{base}");
        let nested = format!("/{base}{rest}");
        let sibling = format!("/{base}{suffix}");
        prop_assert!(url_matches(&pattern, &base_path));
        prop_assert!(url_matches(&pattern, &nested));
        prop_assert!(!url_matches(&pattern, &sibling));
    }

    /// Property: an extension pattern matches exactly the last-segment extension
    #[test]
    fn proptest_extension_match(
        dir in arb_path(),
        stem in arb_segment(),
        ext in arb_segment(),
        other in arb_segment()
    ) {
        let pattern = format!("*.{ext}");
        let file = format!("{dir}/{stem}.{ext}");
        prop_assert!(url_matches(&pattern, &file));
        let trailing_dot = format!("{file}.");
        prop_assert!(!url_matches(&pattern, &trailing_dot));
        let bare = format!("{stem}.{ext}");
        prop_assert!(!url_matches(&pattern, &bare));
        if other != ext {
            let mismatched = format!("{dir}/{stem}.{other}");
            prop_assert!(!url_matches(&pattern, &mismatched));
        }
    }

    /// Property: the wildcard servlet name matches any present name
    #[test]
    fn proptest_wildcard_servlet_name(servlet in "[A-Za-z]{0,10}") {
        prop_assert!(name::matches("*", Some(servlet.as_str())));
        prop_assert!(name::matches(&servlet, Some(servlet.as_str())));
        prop_assert!(!name::matches("*", None));
    }

    /// Property: url-matched filters always precede name-matched filters,
    /// and each pass keeps declaration order
    #[test]
    fn proptest_chain_order(kinds in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut builder = MappingTable::builder();
        for (i, is_url) in kinds.iter().enumerate() {
            let filter = format!("F{i}");
            builder = builder.filter(FilterRegistration::new(filter.as_str()));
            builder = if *is_url {
                builder.url_mapping(&filter, "/*", [DispatcherType::Request])
            } else {
                builder.servlet_mapping(&filter, "*", [DispatcherType::Request])
            };
        }
        let chains = ChainBuilder::new(Arc::new(builder.build()));
        let chain = chains
            .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
            .unwrap()
            .unwrap();

        let expected: Vec<String> = kinds.iter().enumerate()
            .filter(|(_, is_url)| **is_url)
            .chain(kinds.iter().enumerate().filter(|(_, is_url)| !**is_url))
            .map(|(i, _)| format!("F{i}"))
            .collect();
        let actual: Vec<String> = chain.filter_names().map(String::from).collect();
        prop_assert_eq!(actual, expected);
    }
}
