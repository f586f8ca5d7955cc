//! # Folio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The field resolver that flattens three schema generations into one
//!   effective view
//! - The section renderer and its degraded-rendering contract
//! - The user-state engine and feature permission gate
//! - The profile service (create / update / public view transactions)
//! - Port/adapter interfaces (traits) for the storage collaborator
//!
//! ## Architecture Principles
//! - Only depends on `folio-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod access;
pub mod profile;
pub mod render;
pub mod resolve;

// Re-export specific items to avoid ambiguity
pub use access::gate::{FeatureDecision, FeatureGate};
pub use access::state::derive_user_state;
pub use profile::ports::{
    AnalyticsRepository, ExperienceRepository, ProfileRepository, SectionRepository,
    UserRepository,
};
pub use profile::service::{ProfileBundle, ProfileService, ProfileView, ServiceConfig};
pub use render::{RenderedBlock, RenderedProfile};
pub use resolve::{ResolvedFields, ResolvedSeo};
