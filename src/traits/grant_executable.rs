//! Submodule providing a trait for describing grant executables.

use std::{fmt::Debug, hash::Hash};

/// A trait for renderers of privilege-management SQL bound to one grantee.
///
/// An executable is produced by a grant builder and answers three
/// questions: the SQL granting a privilege, the SQL revoking it, and the
/// SQL listing the grants in effect. Every method is a pure string
/// renderer; executing the statements against the warehouse is the
/// caller's concern.
pub trait GrantExecutableLike: Debug + Clone + Hash + Ord + Eq {
    /// Returns the SQL granting a privilege to the bound grantee.
    ///
    /// The privilege token is passed through unvalidated; the caller
    /// guarantees it is legal for the addressed object kind. When
    /// `with_grant_option` is set, exactly one trailing
    /// `WITH GRANT OPTION` clause is appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let schemas = CollectionGrantBuilder::all(ObjectKind::Schema, "ACME", None)?;
    /// assert_eq!(
    ///     schemas.role("ADMIN").grant("USAGE", true),
    ///     r#"GRANT USAGE ON ALL SCHEMAS IN DATABASE "ACME" TO ROLE "ADMIN" WITH GRANT OPTION"#,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String;

    /// Returns the SQL statements revoking a privilege from the bound
    /// grantee.
    ///
    /// The sequence is never empty and every statement in it targets the
    /// same grantee and object as the corresponding [`grant`](Self::grant)
    /// call. Some scope combinations revoke in more than one statement;
    /// all returned statements must be issued for the revoke to be
    /// complete, in no significant order.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert_eq!(
    ///     tables.role("ANALYST").revoke("SELECT"),
    ///     vec![r#"REVOKE SELECT ON ALL TABLES IN SCHEMA "ACME"."SALES" FROM ROLE "ANALYST""#],
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn revoke(&self, privilege: &str) -> Vec<String>;

    /// Returns the SQL listing the grants in effect for the bound
    /// grantee's object or container.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert_eq!(
    ///     tables.role("ANALYST").show(),
    ///     r#"SHOW ALL GRANTS IN SCHEMA "ACME"."SALES""#,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn show(&self) -> String;
}

impl<T: GrantExecutableLike> GrantExecutableLike for &T {
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String {
        (*self).grant(privilege, with_grant_option)
    }

    fn revoke(&self, privilege: &str) -> Vec<String> {
        (*self).revoke(privilege)
    }

    fn show(&self) -> String {
        (*self).show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{structs::ObjectKind, traits::GrantBuilderLike};

    #[test]
    fn test_executable_ref_implementation() {
        let builder =
            crate::structs::CollectionGrantBuilder::future(ObjectKind::View, "ACME", Some("SALES"))
                .expect("views support future grants");
        let executable = builder.role("ANALYST");
        let executable_ref = &executable;

        assert_eq!(
            executable_ref.grant("SELECT", false),
            r#"GRANT SELECT ON FUTURE VIEWS IN SCHEMA "ACME"."SALES" TO ROLE "ANALYST""#,
        );
        assert_eq!(executable_ref.revoke("SELECT").len(), 2);
        assert_eq!(executable_ref.show(), r#"SHOW FUTURE GRANTS IN SCHEMA "ACME"."SALES""#);
    }
}
