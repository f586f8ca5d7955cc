//! Database implementations

pub mod analytics_repository;
pub mod experience_repository;
pub mod manager;
pub mod profile_repository;
pub mod section_repository;
pub mod user_repository;

pub use analytics_repository::*;
pub use experience_repository::*;
pub use manager::*;
pub use profile_repository::*;
pub use section_repository::*;
pub use user_repository::*;
