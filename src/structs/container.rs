//! Resolution of the schema or database containing granted objects.

use std::fmt::{Display, Formatter};

use crate::utils::{qualify, quote_ident};

/// The level a collection grant is targeted at.
///
/// Derived purely from whether a schema name was supplied: a non-empty
/// schema addresses the schema level, its absence the database level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetLevel {
    /// The grant targets a schema within a database.
    Schema,
    /// The grant targets a database.
    Database,
}

impl TargetLevel {
    /// Returns the SQL keyword naming this target level.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            TargetLevel::Schema => "SCHEMA",
            TargetLevel::Database => "DATABASE",
        }
    }
}

impl Display for TargetLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The schema or database containing the objects a grant covers.
///
/// A container is resolved once per builder construction from
/// already-validated identifiers and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Container {
    /// Display name of the container.
    name: String,
    /// Fully qualified, quoted identifier of the container.
    qualified_name: String,
    /// Level the container addresses.
    level: TargetLevel,
}

impl Container {
    /// Resolves the container named by a database and an optional schema.
    ///
    /// An absent or empty schema addresses the database itself; otherwise
    /// the schema within the database is addressed. The resolution is a
    /// pure function of its inputs and is recomputed wherever needed.
    ///
    /// # Arguments
    ///
    /// * `database` - Name of the database; the caller guarantees it is
    ///   non-empty.
    /// * `schema` - Optional name of the schema within the database.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_grants::prelude::*;
    ///
    /// let schema = Container::resolve("ACME", Some("SALES"));
    /// assert_eq!(schema.name(), "SALES");
    /// assert_eq!(schema.qualified_name(), r#""ACME"."SALES""#);
    /// assert_eq!(schema.level(), TargetLevel::Schema);
    ///
    /// let database = Container::resolve("ACME", None);
    /// assert_eq!(database.name(), "ACME");
    /// assert_eq!(database.qualified_name(), r#""ACME""#);
    /// assert_eq!(database.level(), TargetLevel::Database);
    /// ```
    #[must_use]
    pub fn resolve(database: &str, schema: Option<&str>) -> Self {
        match schema.filter(|schema| !schema.is_empty()) {
            Some(schema) => Self {
                name: schema.to_owned(),
                qualified_name: qualify(&[database, schema]),
                level: TargetLevel::Schema,
            },
            None => Self {
                name: database.to_owned(),
                qualified_name: quote_ident(database),
                level: TargetLevel::Database,
            },
        }
    }

    /// Returns the display name of the container.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fully qualified, quoted identifier of the container.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Returns the level the container addresses.
    #[must_use]
    pub fn level(&self) -> TargetLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_addresses_the_database() {
        let container = Container::resolve("ACME", Some(""));
        assert_eq!(container.name(), "ACME");
        assert_eq!(container.qualified_name(), r#""ACME""#);
        assert_eq!(container.level(), TargetLevel::Database);
    }
}
