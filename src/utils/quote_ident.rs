//! Wraps an identifier in double quotes.

/// Wraps an identifier in double quotes.
///
/// The caller guarantees the identifier is a legal, already-validated
/// warehouse identifier; no escaping is performed.
///
/// # Arguments
///
/// * `identifier` - The identifier to quote.
///
/// # Examples
///
/// ```
/// use sql_grants::utils::quote_ident;
///
/// assert_eq!(quote_ident("ACME"), "\"ACME\"");
/// ```
#[must_use]
pub fn quote_ident(identifier: &str) -> String {
    format!("\"{identifier}\"")
}
