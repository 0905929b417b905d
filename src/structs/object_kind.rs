//! Enumeration of the object kinds privileges can be granted on.

use std::fmt::{Display, Formatter};

/// The kinds of warehouse objects privileges can be granted on.
///
/// Each kind owns the SQL token rendered in `ON <KIND> …` clauses, its
/// collection pluralization, and its capability flags (shareability and
/// containment class). Multi-word kinds pluralize the whole phrase, so the
/// rendered collection token is always well-formed SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    /// A database.
    Database,
    /// A schema within a database.
    Schema,
    /// A table.
    Table,
    /// A view.
    View,
    /// A materialized view.
    MaterializedView,
    /// A named stage.
    Stage,
    /// An external table.
    ExternalTable,
    /// A named file format.
    FileFormat,
    /// A user-defined function.
    Function,
    /// A stored procedure.
    Procedure,
    /// A sequence.
    Sequence,
    /// A table stream.
    Stream,
    /// A data-loading pipe.
    Pipe,
    /// A scheduled task.
    Task,
    /// A virtual warehouse.
    Warehouse,
    /// A storage, API or security integration.
    Integration,
    /// A resource monitor.
    ResourceMonitor,
}

impl ObjectKind {
    /// All object kinds, in declaration order.
    pub const ALL: [ObjectKind; 17] = [
        ObjectKind::Database,
        ObjectKind::Schema,
        ObjectKind::Table,
        ObjectKind::View,
        ObjectKind::MaterializedView,
        ObjectKind::Stage,
        ObjectKind::ExternalTable,
        ObjectKind::FileFormat,
        ObjectKind::Function,
        ObjectKind::Procedure,
        ObjectKind::Sequence,
        ObjectKind::Stream,
        ObjectKind::Pipe,
        ObjectKind::Task,
        ObjectKind::Warehouse,
        ObjectKind::Integration,
        ObjectKind::ResourceMonitor,
    ];

    /// Returns the SQL token naming a single object of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_grants::prelude::*;
    ///
    /// assert_eq!(ObjectKind::Table.keyword(), "TABLE");
    /// assert_eq!(ObjectKind::MaterializedView.keyword(), "MATERIALIZED VIEW");
    /// ```
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            ObjectKind::Database => "DATABASE",
            ObjectKind::Schema => "SCHEMA",
            ObjectKind::Table => "TABLE",
            ObjectKind::View => "VIEW",
            ObjectKind::MaterializedView => "MATERIALIZED VIEW",
            ObjectKind::Stage => "STAGE",
            ObjectKind::ExternalTable => "EXTERNAL TABLE",
            ObjectKind::FileFormat => "FILE FORMAT",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Procedure => "PROCEDURE",
            ObjectKind::Sequence => "SEQUENCE",
            ObjectKind::Stream => "STREAM",
            ObjectKind::Pipe => "PIPE",
            ObjectKind::Task => "TASK",
            ObjectKind::Warehouse => "WAREHOUSE",
            ObjectKind::Integration => "INTEGRATION",
            ObjectKind::ResourceMonitor => "RESOURCE MONITOR",
        }
    }

    /// Returns the SQL token naming a collection of objects of this kind.
    ///
    /// The whole phrase is pluralized, never the last word alone, so
    /// multi-word kinds render as e.g. `MATERIALIZED VIEWS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_grants::prelude::*;
    ///
    /// assert_eq!(ObjectKind::Table.plural_keyword(), "TABLES");
    /// assert_eq!(ObjectKind::MaterializedView.plural_keyword(), "MATERIALIZED VIEWS");
    /// assert_eq!(ObjectKind::FileFormat.plural_keyword(), "FILE FORMATS");
    /// ```
    #[must_use]
    pub fn plural_keyword(self) -> &'static str {
        match self {
            ObjectKind::Database => "DATABASES",
            ObjectKind::Schema => "SCHEMAS",
            ObjectKind::Table => "TABLES",
            ObjectKind::View => "VIEWS",
            ObjectKind::MaterializedView => "MATERIALIZED VIEWS",
            ObjectKind::Stage => "STAGES",
            ObjectKind::ExternalTable => "EXTERNAL TABLES",
            ObjectKind::FileFormat => "FILE FORMATS",
            ObjectKind::Function => "FUNCTIONS",
            ObjectKind::Procedure => "PROCEDURES",
            ObjectKind::Sequence => "SEQUENCES",
            ObjectKind::Stream => "STREAMS",
            ObjectKind::Pipe => "PIPES",
            ObjectKind::Task => "TASKS",
            ObjectKind::Warehouse => "WAREHOUSES",
            ObjectKind::Integration => "INTEGRATIONS",
            ObjectKind::ResourceMonitor => "RESOURCE MONITORS",
        }
    }

    /// Returns whether objects of this kind live inside a schema.
    ///
    /// Schema objects are addressed by a three-part qualified name and
    /// support ALL and FUTURE collection grants within their container.
    #[must_use]
    pub fn is_schema_object(self) -> bool {
        matches!(
            self,
            ObjectKind::Table
                | ObjectKind::View
                | ObjectKind::MaterializedView
                | ObjectKind::Stage
                | ObjectKind::ExternalTable
                | ObjectKind::FileFormat
                | ObjectKind::Function
                | ObjectKind::Procedure
                | ObjectKind::Sequence
                | ObjectKind::Stream
                | ObjectKind::Pipe
                | ObjectKind::Task
        )
    }

    /// Returns whether objects of this kind are addressed at the account
    /// level, outside any database.
    #[must_use]
    pub fn is_account_object(self) -> bool {
        matches!(
            self,
            ObjectKind::Database
                | ObjectKind::Warehouse
                | ObjectKind::Integration
                | ObjectKind::ResourceMonitor
        )
    }

    /// Returns whether a specific object of this kind can be granted to a
    /// share.
    ///
    /// Shares receive databases, schemas, tables, views, materialized
    /// views, external tables and secure functions; the remaining kinds
    /// only support role grantees.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_grants::prelude::*;
    ///
    /// assert!(ObjectKind::Table.is_sharable());
    /// assert!(!ObjectKind::Task.is_sharable());
    /// ```
    #[must_use]
    pub fn is_sharable(self) -> bool {
        matches!(
            self,
            ObjectKind::Database
                | ObjectKind::Schema
                | ObjectKind::Table
                | ObjectKind::View
                | ObjectKind::MaterializedView
                | ObjectKind::ExternalTable
                | ObjectKind::Function
        )
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_extends_the_whole_phrase() {
        for kind in ObjectKind::ALL {
            assert_eq!(kind.plural_keyword(), format!("{}S", kind.keyword()));
            assert!(!kind.plural_keyword().ends_with("SS"));
        }
    }

    #[test]
    fn containment_classes_are_disjoint() {
        for kind in ObjectKind::ALL {
            assert!(
                !(kind.is_schema_object() && kind.is_account_object()),
                "{kind} claims two containment classes"
            );
        }
        // The schema kind belongs to neither class: it is contained in a
        // database but is itself a container.
        assert!(!ObjectKind::Schema.is_schema_object());
        assert!(!ObjectKind::Schema.is_account_object());
    }
}
