//! Submodule providing utilities for rendering SQL identifiers.

mod qualify;
pub use qualify::qualify;
mod quote_ident;
pub use quote_ident::quote_ident;
