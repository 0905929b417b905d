//! Enumeration of the grantees a privilege can be assigned to.

use std::fmt::{Display, Formatter};

use crate::utils::quote_ident;

/// The recipient of a grant: a role, or a share for sharable objects.
///
/// Displays as the SQL clause naming the grantee, e.g. `ROLE "ANALYST"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grantee {
    /// A role within the account.
    Role(String),
    /// A share exposing objects to other accounts.
    Share(String),
}

impl Grantee {
    /// Returns the name of the grantee.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Grantee::Role(name) | Grantee::Share(name) => name,
        }
    }
}

impl Display for Grantee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Grantee::Role(name) => write!(f, "ROLE {}", quote_ident(name)),
            Grantee::Share(name) => write!(f, "SHARE {}", quote_ident(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grantees_render_their_sql_clause() {
        assert_eq!(Grantee::Role("ANALYST".to_owned()).to_string(), r#"ROLE "ANALYST""#);
        assert_eq!(Grantee::Share("PARTNER".to_owned()).to_string(), r#"SHARE "PARTNER""#);
    }
}
