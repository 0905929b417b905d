//! Error enumeration used in the `sql_grants` crate.

use crate::structs::{CollectionScope, ObjectKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Defines the `Error` enum representing capability mismatches.
///
/// All variants describe combinations that are statically known to be
/// unsupported by the warehouse; none of them represent runtime failures.
pub enum Error {
    #[error(
        "`{scope}` grants on `{kind}` objects cannot be bound to share `{share_name}`: collection grants only support role grantees."
    )]
    /// A share grantee was requested on a collection-scope builder. Objects
    /// covered by an ALL or FUTURE grant cannot be shared.
    ShareOnCollectionGrant {
        /// Name of the share that was requested as grantee.
        share_name: String,
        /// Kind of the objects the collection grant covers.
        kind: ObjectKind,
        /// Scope of the collection grant.
        scope: CollectionScope,
    },
    #[error("`{kind}` objects cannot be granted to share `{share_name}`.")]
    /// A share grantee was requested for an object kind the warehouse
    /// cannot include in a share.
    ShareOnUnsharableKind {
        /// Name of the share that was requested as grantee.
        share_name: String,
        /// Kind of the object that cannot be shared.
        kind: ObjectKind,
    },
    #[error("`{kind}` objects are not addressed at the account level.")]
    /// An account-level grant builder was requested for an object kind that
    /// lives inside a schema or database.
    NotAnAccountObject {
        /// Kind of the offending object.
        kind: ObjectKind,
    },
    #[error("`{kind}` objects are not contained in a schema.")]
    /// A schema-object grant builder was requested for an object kind that
    /// is not addressed through a containing schema.
    NotASchemaObject {
        /// Kind of the offending object.
        kind: ObjectKind,
    },
    #[error("`{kind}` objects cannot be granted collectively within a schema or database.")]
    /// A collection grant builder was requested for an object kind that has
    /// no ALL or FUTURE grant form.
    NotCollectable {
        /// Kind of the offending object.
        kind: ObjectKind,
    },
    #[error("Collections of schemas are addressed through a database, not through a schema.")]
    /// A schema collection grant was addressed through a containing schema.
    SchemaCollectionInSchema,
}
