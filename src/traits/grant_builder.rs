//! Submodule providing a trait for describing grant builders.

use std::{fmt::Debug, hash::Hash};

use crate::{errors::Error, structs::ObjectKind, traits::GrantExecutableLike};

/// A trait for immutable descriptors of "privileges on X".
///
/// A builder carries enough identity to answer what the addressed object
/// is called and what SQL enumerates the grants held on it, and it can
/// manufacture an executable bound to one grantee. Builders never perform
/// I/O; every method is a pure derivation from the builder's own fields.
pub trait GrantBuilderLike: Debug + Clone + Hash + Ord + Eq {
    /// The executable type produced when binding a grantee.
    type Executable: GrantExecutableLike;

    /// Returns the display name of the addressed object or container,
    /// used in diagnostics and state keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let tables = CollectionGrantBuilder::all(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert_eq!(tables.name(), "SALES");
    /// # Ok(())
    /// # }
    /// ```
    fn name(&self) -> &str;

    /// Returns the kind of the objects the builder addresses.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let stage = ObjectGrantBuilder::schema_object(ObjectKind::Stage, "ACME", "SALES", "LOAD")?;
    /// assert_eq!(stage.kind(), ObjectKind::Stage);
    /// # Ok(())
    /// # }
    /// ```
    fn kind(&self) -> ObjectKind;

    /// Returns the SQL enumerating the grants currently held on the
    /// addressed object or container.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let orders = ObjectGrantBuilder::schema_object(ObjectKind::Table, "ACME", "SALES", "ORDERS")?;
    /// assert_eq!(orders.show(), r#"SHOW GRANTS ON TABLE "ACME"."SALES"."ORDERS""#);
    ///
    /// let future = CollectionGrantBuilder::future(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert_eq!(future.show(), r#"SHOW FUTURE GRANTS IN SCHEMA "ACME"."SALES""#);
    /// # Ok(())
    /// # }
    /// ```
    fn show(&self) -> String;

    /// Binds a role grantee, returning the executable rendering its SQL.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let schema = ObjectGrantBuilder::schema("ACME", "SALES");
    /// let executable = schema.role("ANALYST");
    /// assert_eq!(
    ///     executable.grant("USAGE", false),
    ///     r#"GRANT USAGE ON SCHEMA "ACME"."SALES" TO ROLE "ANALYST""#,
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn role(&self, role_name: &str) -> Self::Executable;

    /// Binds a share grantee, returning the executable rendering its SQL.
    ///
    /// # Errors
    ///
    /// * [`Error::ShareOnCollectionGrant`] when the builder covers an ALL
    ///   or FUTURE collection: objects that do not exist yet cannot be
    ///   shared, so collection grants only support role grantees.
    /// * [`Error::ShareOnUnsharableKind`] when the addressed object kind
    ///   cannot be included in a share.
    ///
    /// # Example
    ///
    /// ```rust
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use sql_grants::prelude::*;
    ///
    /// let orders = ObjectGrantBuilder::schema_object(ObjectKind::Table, "ACME", "SALES", "ORDERS")?;
    /// let executable = orders.share("PARTNER")?;
    /// assert_eq!(
    ///     executable.grant("SELECT", false),
    ///     r#"GRANT SELECT ON TABLE "ACME"."SALES"."ORDERS" TO SHARE "PARTNER""#,
    /// );
    ///
    /// let future = CollectionGrantBuilder::future(ObjectKind::Table, "ACME", Some("SALES"))?;
    /// assert!(future.share("PARTNER").is_err());
    /// # Ok(())
    /// # }
    /// ```
    fn share(&self, share_name: &str) -> Result<Self::Executable, Error>;
}

impl<T: GrantBuilderLike> GrantBuilderLike for &T {
    type Executable = T::Executable;

    fn name(&self) -> &str {
        (*self).name()
    }

    fn kind(&self) -> ObjectKind {
        (*self).kind()
    }

    fn show(&self) -> String {
        (*self).show()
    }

    fn role(&self, role_name: &str) -> Self::Executable {
        (*self).role(role_name)
    }

    fn share(&self, share_name: &str) -> Result<Self::Executable, Error> {
        (*self).share(share_name)
    }
}
