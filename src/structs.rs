//! Submodule providing the value types privilege-management SQL is
//! rendered from.

pub mod collection_grant;
pub use collection_grant::{CollectionGrantBuilder, CollectionGrantExecutable};
pub mod container;
pub use container::{Container, TargetLevel};
pub mod grantee;
pub use grantee::Grantee;
pub mod object_grant;
pub use object_grant::{ObjectGrantBuilder, ObjectGrantExecutable};
pub mod object_kind;
pub use object_kind::ObjectKind;
pub mod scope;
pub use scope::CollectionScope;
