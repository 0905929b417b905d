//! Anti-regression tests for crashes discovered by fuzzing.
//!
//! This test automatically discovers crash files from the honggfuzz
//! workspace and verifies that they no longer cause panics.

use std::path::Path;

use arbitrary::{Arbitrary, Unstructured};
use sql_grants::prelude::*;

type Input<'a> = (u8, bool, &'a str, &'a str, &'a str, &'a str, &'a str);

/// Mirrors the fuzz target: renders every statement form the input can
/// reach and checks the rendering invariants.
fn exercise((kind_selector, future, database, schema, object, grantee, privilege): Input<'_>) {
    fn check_executable(executable: &impl GrantExecutableLike, privilege: &str) {
        let plain = executable.grant(privilege, false);
        assert!(plain.starts_with("GRANT "));
        assert_eq!(executable.grant(privilege, true), format!("{plain} WITH GRANT OPTION"));
        assert!(!executable.revoke(privilege).is_empty());
        assert!(executable.show().starts_with("SHOW "));
    }

    let kind = ObjectKind::ALL[kind_selector as usize % ObjectKind::ALL.len()];
    let container_schema = (!schema.is_empty()).then_some(schema);

    let collection = if future {
        CollectionGrantBuilder::future(kind, database, container_schema)
    } else {
        CollectionGrantBuilder::all(kind, database, container_schema)
    };
    if let Ok(builder) = collection {
        assert!(builder.share(grantee).is_err());
        check_executable(&builder.role(grantee), privilege);
    }

    if let Ok(builder) = ObjectGrantBuilder::account_object(kind, object) {
        check_executable(&builder.role(grantee), privilege);
    }
    if let Ok(builder) = ObjectGrantBuilder::schema_object(kind, database, schema, object) {
        check_executable(&builder.role(grantee), privilege);
        if let Ok(executable) = builder.share(grantee) {
            check_executable(&executable, privilege);
        }
    }
    check_executable(&ObjectGrantBuilder::schema(database, schema).role(grantee), privilege);
}

/// Test that rendering does not panic for the extracted input.
/// Provides context about which crash file caused the failure.
fn should_not_panic_with_context(input: Input<'_>, crash_file: &Path) {
    use std::panic;

    let result = panic::catch_unwind(|| exercise(input));

    if let Err(e) = result {
        panic!(
            "Crash file {} caused a panic!\nInput: {input:?}\nPanic: {e:?}",
            crash_file.display()
        );
    }
}

/// Copies the 'SIGABRT' crash files from the honggfuzz workspace
/// to the 'tests/fuzz_grants' directory for testing and collect
/// a regression tests suite over time.
fn copy_crash_files() {
    let toml_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let crash_dir = Path::new(&toml_dir).join("fuzz/hfuzz_workspace/fuzz_grants");
    let test_dir = Path::new(&toml_dir).join("tests/fuzz_grants");

    if !test_dir.exists() {
        std::fs::create_dir(&test_dir).unwrap();
    }

    let Ok(entries) = std::fs::read_dir(crash_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if path.is_file() && file_name.starts_with("SIGABRT") {
            let dest_path = test_dir.join(file_name);
            let _ = std::fs::copy(&path, &dest_path);
        }
    }
}

/// Discover and test all crash files from honggfuzz workspace.
#[test]
fn test_fuzz_crashes() {
    copy_crash_files();

    // We load the inputs from the 'tests/fuzz_grants' directory, which
    // should contain the crash files copied from the honggfuzz workspace.
    let toml_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let test_dir = Path::new(&toml_dir).join("tests/fuzz_grants");
    let Ok(entries) = std::fs::read_dir(test_dir) else {
        return;
    };

    let crash_files: Vec<_> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.is_file() {
                let bytes = std::fs::read(&path).ok()?;
                Some((path, bytes))
            } else {
                None
            }
        })
        .collect();

    if crash_files.is_empty() {
        return;
    }

    for (path, bytes) in crash_files {
        // Use arbitrary to extract the input exactly as honggfuzz does
        let mut unstructured = Unstructured::new(&bytes);
        let input: Input<'_> = match Arbitrary::arbitrary(&mut unstructured) {
            Ok(input) => input,
            Err(_) => {
                // If arbitrary can't extract a valid input, skip this file
                // (the crash was likely in the arbitrary extraction itself)
                continue;
            }
        };

        // This should NOT panic - if it does, the test fails
        should_not_panic_with_context(input, &path);
    }
}
