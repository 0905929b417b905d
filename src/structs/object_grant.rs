//! Submodule providing the builder for grants on a specific named object.

use crate::{
    errors::Error,
    structs::{Grantee, ObjectKind},
    traits::{GrantBuilderLike, GrantExecutableLike},
    utils::{qualify, quote_ident},
};

/// A grant builder addressing one specific named object.
///
/// The object is addressed directly by its own qualified name rather than
/// through a containing schema or database, so the rendered SQL uses the
/// `ON <KIND> <name>` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectGrantBuilder {
    /// Display name of the addressed object.
    name: String,
    /// Fully qualified, quoted identifier of the addressed object.
    qualified_name: String,
    /// Kind of the addressed object.
    kind: ObjectKind,
}

impl ObjectGrantBuilder {
    /// Returns a grant builder for an account-level object such as a
    /// database, warehouse, integration or resource monitor.
    ///
    /// # Arguments
    ///
    /// * `kind` - Kind of the addressed object; must be an account-level
    ///   kind.
    /// * `name` - Name of the addressed object.
    ///
    /// # Errors
    ///
    /// * [`Error::NotAnAccountObject`] when `kind` lives inside a database
    ///   or schema and is therefore addressed by a qualified name instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let database = ObjectGrantBuilder::account_object(ObjectKind::Database, "ACME")?;
    /// assert_eq!(database.show(), r#"SHOW GRANTS ON DATABASE "ACME""#);
    ///
    /// assert!(ObjectGrantBuilder::account_object(ObjectKind::Table, "ORDERS").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn account_object(kind: ObjectKind, name: &str) -> Result<Self, Error> {
        if !kind.is_account_object() {
            return Err(Error::NotAnAccountObject { kind });
        }
        Ok(Self { name: name.to_owned(), qualified_name: quote_ident(name), kind })
    }

    /// Returns a grant builder for a schema within a database.
    ///
    /// # Arguments
    ///
    /// * `database` - Name of the database containing the schema.
    /// * `schema` - Name of the schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sql_grants::prelude::*;
    ///
    /// let schema = ObjectGrantBuilder::schema("ACME", "SALES");
    /// assert_eq!(schema.name(), "SALES");
    /// assert_eq!(schema.qualified_name(), r#""ACME"."SALES""#);
    /// ```
    #[must_use]
    pub fn schema(database: &str, schema: &str) -> Self {
        Self {
            name: schema.to_owned(),
            qualified_name: qualify(&[database, schema]),
            kind: ObjectKind::Schema,
        }
    }

    /// Returns a grant builder for an object contained in a schema, such
    /// as a table, view, stage or task.
    ///
    /// # Arguments
    ///
    /// * `kind` - Kind of the addressed object; must be a schema-contained
    ///   kind.
    /// * `database` - Name of the database containing the schema.
    /// * `schema` - Name of the schema containing the object.
    /// * `name` - Name of the addressed object.
    ///
    /// # Errors
    ///
    /// * [`Error::NotASchemaObject`] when `kind` is not addressed through
    ///   a containing schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let orders = ObjectGrantBuilder::schema_object(ObjectKind::Table, "ACME", "SALES", "ORDERS")?;
    /// assert_eq!(orders.qualified_name(), r#""ACME"."SALES"."ORDERS""#);
    ///
    /// assert!(
    ///     ObjectGrantBuilder::schema_object(ObjectKind::Database, "ACME", "SALES", "X").is_err()
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn schema_object(
        kind: ObjectKind,
        database: &str,
        schema: &str,
        name: &str,
    ) -> Result<Self, Error> {
        if !kind.is_schema_object() {
            return Err(Error::NotASchemaObject { kind });
        }
        Ok(Self {
            name: name.to_owned(),
            qualified_name: qualify(&[database, schema, name]),
            kind,
        })
    }

    /// Returns the fully qualified, quoted identifier of the addressed
    /// object.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn bind(&self, grantee: Grantee) -> ObjectGrantExecutable {
        ObjectGrantExecutable {
            qualified_name: self.qualified_name.clone(),
            kind: self.kind,
            grantee,
        }
    }
}

impl GrantBuilderLike for ObjectGrantBuilder {
    type Executable = ObjectGrantExecutable;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn show(&self) -> String {
        format!("SHOW GRANTS ON {} {}", self.kind, self.qualified_name)
    }

    fn role(&self, role_name: &str) -> Self::Executable {
        self.bind(Grantee::Role(role_name.to_owned()))
    }

    fn share(&self, share_name: &str) -> Result<Self::Executable, Error> {
        if !self.kind.is_sharable() {
            return Err(Error::ShareOnUnsharableKind {
                share_name: share_name.to_owned(),
                kind: self.kind,
            });
        }
        Ok(self.bind(Grantee::Share(share_name.to_owned())))
    }
}

/// A renderer of privilege-management SQL for one specific object, bound
/// to one grantee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectGrantExecutable {
    /// Fully qualified, quoted identifier of the object privileges apply
    /// to.
    qualified_name: String,
    /// Kind of the object privileges apply to.
    kind: ObjectKind,
    /// Recipient of the grant.
    grantee: Grantee,
}

impl ObjectGrantExecutable {
    /// Returns the grantee the executable is bound to.
    #[must_use]
    pub fn grantee(&self) -> &Grantee {
        &self.grantee
    }
}

impl GrantExecutableLike for ObjectGrantExecutable {
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String {
        let statement = format!(
            "GRANT {privilege} ON {} {} TO {}",
            self.kind, self.qualified_name, self.grantee
        );
        if with_grant_option { format!("{statement} WITH GRANT OPTION") } else { statement }
    }

    fn revoke(&self, privilege: &str) -> Vec<String> {
        vec![format!(
            "REVOKE {privilege} ON {} {} FROM {}",
            self.kind, self.qualified_name, self.grantee
        )]
    }

    fn show(&self) -> String {
        format!("SHOW GRANTS ON {} {}", self.kind, self.qualified_name)
    }
}
