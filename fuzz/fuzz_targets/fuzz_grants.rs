use honggfuzz::fuzz;
use sql_grants::prelude::*;

fn check_executable(executable: &impl GrantExecutableLike, privilege: &str) {
    let plain = executable.grant(privilege, false);
    assert!(plain.starts_with("GRANT "));
    assert_eq!(executable.grant(privilege, true), format!("{plain} WITH GRANT OPTION"));

    let revokes = executable.revoke(privilege);
    assert!(!revokes.is_empty());
    for statement in &revokes {
        assert!(statement.starts_with("REVOKE "));
    }

    assert!(executable.show().starts_with("SHOW "));
}

fn exercise(
    kind_selector: u8,
    future: bool,
    database: &str,
    schema: &str,
    object: &str,
    grantee: &str,
    privilege: &str,
) {
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

fn main() {
    loop {
        fuzz!(|input: (u8, bool, &str, &str, &str, &str, &str)| {
            let (kind_selector, future, database, schema, object, grantee, privilege) = input;
            if database.len() > 1_000 || schema.len() > 1_000 || object.len() > 1_000 {
                // Skip excessively long inputs to avoid timeouts during fuzzing.
                return;
            }

            exercise(kind_selector, future, database, schema, object, grantee, privilege);
        });
    }
}
