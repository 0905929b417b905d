//! Submodule providing traits for describing grant builders and executables.

pub mod grant_builder;
pub use grant_builder::GrantBuilderLike;
pub mod grant_executable;
pub use grant_executable::GrantExecutableLike;
