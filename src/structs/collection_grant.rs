//! Submodule providing the builder for grants on every object of a kind
//! within a schema or database.

use crate::{
    errors::Error,
    structs::{CollectionScope, Container, Grantee, ObjectKind, TargetLevel},
    traits::{GrantBuilderLike, GrantExecutableLike},
};

/// A grant builder covering every object of one kind within a container.
///
/// Collections are addressed by the containing schema or database only,
/// never by individual object names, and come in two scopes: every object
/// currently in the container, or every object created in it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionGrantBuilder {
    /// Display name of the container.
    name: String,
    /// Fully qualified, quoted identifier of the container.
    qualified_name: String,
    /// Kind of the objects the grant covers.
    kind: ObjectKind,
    /// Scope of the collection.
    scope: CollectionScope,
    /// Level of the container.
    target: TargetLevel,
}

impl CollectionGrantBuilder {
    /// Returns a grant builder covering every existing object of `kind`
    /// in the container.
    ///
    /// # Arguments
    ///
    /// * `kind` - Kind of the covered objects.
    /// * `database` - Name of the database addressed or containing the
    ///   addressed schema.
    /// * `schema` - Optional name of the containing schema; absent or
    ///   empty addresses the whole database.
    ///
    /// # Errors
    ///
    /// * [`Error::NotCollectable`] when `kind` has no collection grant
    ///   form.
    /// * [`Error::SchemaCollectionInSchema`] when `kind` is
    ///   [`ObjectKind::Schema`] and a containing schema was supplied:
    ///   schema collections are addressed through their database.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert_eq!(
    ///     tables.role("ANALYST").grant("SELECT", false),
    ///     r#"GRANT SELECT ON ALL TABLES IN SCHEMA "ACME"."SALES" TO ROLE "ANALYST""#,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn all(kind: ObjectKind, database: &str, schema: Option<&str>) -> Result<Self, Error> {
        Self::new(kind, CollectionScope::All, database, schema)
    }

    /// Returns a grant builder covering every object of `kind` created in
    /// the container after the grant runs.
    ///
    /// # Arguments
    ///
    /// * `kind` - Kind of the covered objects.
    /// * `database` - Name of the database addressed or containing the
    ///   addressed schema.
    /// * `schema` - Optional name of the containing schema; absent or
    ///   empty addresses the whole database.
    ///
    /// # Errors
    ///
    /// * [`Error::NotCollectable`] when `kind` has no collection grant
    ///   form.
    /// * [`Error::SchemaCollectionInSchema`] when `kind` is
    ///   [`ObjectKind::Schema`] and a containing schema was supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let pipes = CollectionGrantBuilder::future(ObjectKind::Pipe, "ACME", None)?;
    /// assert_eq!(
    ///     pipes.role("LOADER").grant("OPERATE", false),
    ///     r#"GRANT OPERATE ON FUTURE PIPES IN DATABASE "ACME" TO ROLE "LOADER""#,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn future(kind: ObjectKind, database: &str, schema: Option<&str>) -> Result<Self, Error> {
        Self::new(kind, CollectionScope::Future, database, schema)
    }

    fn new(
        kind: ObjectKind,
        scope: CollectionScope,
        database: &str,
        schema: Option<&str>,
    ) -> Result<Self, Error> {
        if kind == ObjectKind::Schema {
            if schema.is_some_and(|schema| !schema.is_empty()) {
                return Err(Error::SchemaCollectionInSchema);
            }
        } else if !kind.is_schema_object() {
            return Err(Error::NotCollectable { kind });
        }
        let container = Container::resolve(database, schema);
        Ok(Self {
            name: container.name().to_owned(),
            qualified_name: container.qualified_name().to_owned(),
            kind,
            scope,
            target: container.level(),
        })
    }

    /// Returns the fully qualified, quoted identifier of the container.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Returns the scope of the collection.
    #[must_use]
    pub fn scope(&self) -> CollectionScope {
        self.scope
    }

    /// Returns the level of the container.
    #[must_use]
    pub fn target(&self) -> TargetLevel {
        self.target
    }
}

impl GrantBuilderLike for CollectionGrantBuilder {
    type Executable = CollectionGrantExecutable;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn show(&self) -> String {
        format!("SHOW {} GRANTS IN {} {}", self.scope, self.target, self.qualified_name)
    }

    fn role(&self, role_name: &str) -> Self::Executable {
        CollectionGrantExecutable {
            qualified_name: self.qualified_name.clone(),
            kind: self.kind,
            scope: self.scope,
            target: self.target,
            grantee: Grantee::Role(role_name.to_owned()),
        }
    }

    fn share(&self, share_name: &str) -> Result<Self::Executable, Error> {
        Err(Error::ShareOnCollectionGrant {
            share_name: share_name.to_owned(),
            kind: self.kind,
            scope: self.scope,
        })
    }
}

/// A renderer of privilege-management SQL for a collection of objects,
/// bound to one role grantee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionGrantExecutable {
    /// Fully qualified, quoted identifier of the container.
    qualified_name: String,
    /// Kind of the objects privileges apply to.
    kind: ObjectKind,
    /// Scope of the collection.
    scope: CollectionScope,
    /// Level of the container.
    target: TargetLevel,
    /// Recipient of the grant; collections only support roles.
    grantee: Grantee,
}

impl CollectionGrantExecutable {
    /// Returns the grantee the executable is bound to.
    #[must_use]
    pub fn grantee(&self) -> &Grantee {
        &self.grantee
    }

    fn revoke_statement(&self, privilege: &str, scope: CollectionScope) -> String {
        format!(
            "REVOKE {privilege} ON {scope} {} IN {} {} FROM {}",
            self.kind.plural_keyword(),
            self.target,
            self.qualified_name,
            self.grantee
        )
    }
}

impl GrantExecutableLike for CollectionGrantExecutable {
    fn grant(&self, privilege: &str, with_grant_option: bool) -> String {
        let statement = format!(
            "GRANT {privilege} ON {} {} IN {} {} TO {}",
            self.scope,
            self.kind.plural_keyword(),
            self.target,
            self.qualified_name,
            self.grantee
        );
        if with_grant_option { format!("{statement} WITH GRANT OPTION") } else { statement }
    }

    fn revoke(&self, privilege: &str) -> Vec<String> {
        match self.scope {
            CollectionScope::All => vec![self.revoke_statement(privilege, CollectionScope::All)],
            // Objects created while a future grant was in effect hold
            // individual grants that survive revoking the future grant
            // itself; the companion ALL statement clears those.
            CollectionScope::Future => vec![
                self.revoke_statement(privilege, CollectionScope::Future),
                self.revoke_statement(privilege, CollectionScope::All),
            ],
        }
    }

    fn show(&self) -> String {
        format!("SHOW {} GRANTS IN {} {}", self.scope, self.target, self.qualified_name)
    }
}
