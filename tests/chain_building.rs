//! End-to-end chain construction from deployment descriptors.

use std::sync::Arc;
use std::thread;

use filter_chain::{ChainBuilder, ChainError, Dispatch, DispatcherType, MappingStore};

mod common;

#[test]
fn test_echo_request_chain() {
    let builder = ChainBuilder::new(Arc::new(common::table_from_toml(common::ECHO_DESCRIPTOR)));

    let chain = builder
        .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
        .unwrap()
        .expect("handler present, chain expected");

    assert_eq!(chain.filter_names().collect::<Vec<_>>(), vec!["Auth", "Logger"]);
    assert_eq!(**chain.handler(), "Echo");
    assert_eq!(chain.filters()[0].class, "com.example.AuthFilter");
}

#[test]
fn test_forward_dispatch_skips_request_only_filters() {
    let builder = ChainBuilder::new(Arc::new(common::table_from_toml(common::ECHO_DESCRIPTOR)));
    let dispatch = Dispatch::new(DispatcherType::Forward)
        .with_path("/echo")
        .with_servlet_name("Echo");

    let chain = builder.build(Some(Arc::new("Echo")), &dispatch).unwrap().unwrap();
    assert!(chain.is_empty());
}

#[test]
fn test_url_before_name_across_entries() {
    let table = common::table_from_toml(
        r#"
        [[filters]]
        name = "A"
        [[filters]]
        name = "B"
        [[filters]]
        name = "C"

        [[filter_mappings]]
        filter = "A"
        url_patterns = ["/*"]

        [[filter_mappings]]
        filter = "B"
        servlet_names = ["Echo"]

        [[filter_mappings]]
        filter = "C"
        url_patterns = ["/echo"]
        "#,
    );
    let builder = ChainBuilder::new(Arc::new(table));

    let chain = builder
        .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
        .unwrap()
        .unwrap();
    assert_eq!(chain.filter_names().collect::<Vec<_>>(), vec!["A", "C", "B"]);
}

#[test]
fn test_mixed_entry_contributes_to_both_passes() {
    let table = common::table_from_toml(
        r#"
        [[filters]]
        name = "Audit"
        [[filters]]
        name = "Gzip"

        [[filter_mappings]]
        filter = "Audit"
        url_patterns = ["/api/*"]
        servlet_names = ["Api"]
        dispatcher_types = ["REQUEST", "ASYNC"]

        [[filter_mappings]]
        filter = "Gzip"
        url_patterns = ["*.json"]
        dispatcher_types = ["REQUEST", "ASYNC"]
        "#,
    );
    let builder = ChainBuilder::new(Arc::new(table));

    let request = builder
        .build(Some(Arc::new("Api")), &Dispatch::request("/api/users.json", "Api"))
        .unwrap()
        .unwrap();
    assert_eq!(
        request.filter_names().collect::<Vec<_>>(),
        vec!["Audit", "Gzip", "Audit"]
    );

    let error = Dispatch::new(DispatcherType::Error)
        .with_path("/api/users.json")
        .with_servlet_name("Api");
    let error = builder.build(Some(Arc::new("Api")), &error).unwrap().unwrap();
    assert!(error.is_empty());
}

#[test]
fn test_no_handler_builds_nothing() {
    let builder = ChainBuilder::new(Arc::new(common::table_from_toml(common::ECHO_DESCRIPTOR)));
    let chain = builder
        .build::<String>(None, &Dispatch::request("/echo", "Echo"))
        .unwrap();
    assert!(chain.is_none());
}

#[test]
fn test_unregistered_filter_is_reported() {
    let table = filter_chain::MappingTable::builder()
        .filter(filter_chain::FilterRegistration::new("Auth"))
        .url_mapping("Auth", "/*", [DispatcherType::Request])
        .servlet_mapping("Csrf", "*", [DispatcherType::Request])
        .build();
    let builder = ChainBuilder::new(Arc::new(table));

    let err = builder
        .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
        .unwrap_err();
    assert_eq!(
        err,
        ChainError::MissingRegistration {
            filter_name: "Csrf".into(),
            mapping_index: 1,
        }
    );
}

#[test]
fn test_concurrent_builds_agree() {
    let builder = ChainBuilder::new(Arc::new(common::table_from_toml(common::ECHO_DESCRIPTOR)));
    let expected = builder
        .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let builder = builder.clone();
            thread::spawn(move || {
                (0..500)
                    .map(|_| {
                        builder
                            .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for chain in handle.join().unwrap() {
            assert_eq!(chain, expected);
        }
    }
}

#[test]
fn test_builds_during_redeploy_see_whole_snapshots() {
    let store = Arc::new(MappingStore::new(common::table_from_toml(common::ECHO_DESCRIPTOR)));
    let auth_only = r#"
        [[filters]]
        name = "Auth"

        [[filter_mappings]]
        filter = "Auth"
        url_patterns = ["/*"]
    "#;

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let chain = store
                        .builder()
                        .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
                        .unwrap()
                        .unwrap();
                    let names: Vec<_> = chain.filter_names().collect();
                    assert!(names == ["Auth", "Logger"] || names == ["Auth"], "torn chain: {names:?}");
                }
            })
        })
        .collect();

    for i in 0..50 {
        let content = if i % 2 == 0 { auth_only } else { common::ECHO_DESCRIPTOR };
        store.publish(common::table_from_toml(content));
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(store.generation(), 50);
}
