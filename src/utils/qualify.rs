//! Joins identifiers into a dot-separated qualified name.

use crate::utils::quote_ident;

/// Joins identifiers into a dot-separated qualified name, quoting each part.
///
/// # Arguments
///
/// * `parts` - The identifier parts, outermost container first.
///
/// # Examples
///
/// ```
/// use sql_grants::utils::qualify;
///
/// assert_eq!(qualify(&["ACME", "SALES", "ORDERS"]), r#""ACME"."SALES"."ORDERS""#);
/// assert_eq!(qualify(&["ACME"]), r#""ACME""#);
/// ```
#[must_use]
pub fn qualify(parts: &[&str]) -> String {
    parts.iter().copied().map(quote_ident).collect::<Vec<String>>().join(".")
}
