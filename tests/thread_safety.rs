//! Thread-safety integration tests for grant builders and executables.

use std::sync::Arc;

use sql_grants::prelude::*;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn builders_and_executables_are_send_sync() {
    assert_send_sync::<ObjectGrantBuilder>();
    assert_send_sync::<ObjectGrantExecutable>();
    assert_send_sync::<CollectionGrantBuilder>();
    assert_send_sync::<CollectionGrantExecutable>();
}

#[test]
fn builders_can_be_shared_across_threads() {
    let builder = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))
        .expect("tables support collection grants");
    let shared_builder = Arc::new(builder);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let builder = Arc::clone(&shared_builder);
        handles.push(std::thread::spawn(move || {
            assert_eq!(builder.show(), r#"SHOW ALL GRANTS IN SCHEMA "ACME"."SALES""#);

            let executable = builder.role("ANALYST");
            assert_eq!(
                executable.grant("SELECT", false),
                r#"GRANT SELECT ON ALL TABLES IN SCHEMA "ACME"."SALES" TO ROLE "ANALYST""#,
            );
            assert_eq!(executable.revoke("SELECT").len(), 1);
        }));
    }

    for handle in handles {
        handle.join().expect("Thread should complete without panic");
    }
}
