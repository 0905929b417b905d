//! Enumeration of the collection scopes a grant can cover.

use std::fmt::{Display, Formatter};

/// The scope of a collection grant within its container.
///
/// Specific objects are addressed by their own builder type; collection
/// builders cover either every existing object of a kind (`All`) or every
/// object of a kind created after the statement runs (`Future`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectionScope {
    /// Every object of the kind currently in the container.
    All,
    /// Every object of the kind created in the container after the grant.
    Future,
}

impl CollectionScope {
    /// Returns the SQL keyword selecting this scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use sql_grants::prelude::*;
    ///
    /// assert_eq!(CollectionScope::All.keyword(), "ALL");
    /// assert_eq!(CollectionScope::Future.keyword(), "FUTURE");
    /// ```
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            CollectionScope::All => "ALL",
            CollectionScope::Future => "FUTURE",
        }
    }
}

impl Display for CollectionScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
