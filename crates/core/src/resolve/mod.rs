//! Cross-generation field resolution
//!
//! Three content schema generations coexist on every profile: the
//! generation-1 free-text document, generation-2 typed sections and
//! generation-3 profile-level fields. This module is the single place the
//! read-time priority between them is encoded; renderers never re-implement
//! fallback chains for identity fields.

pub mod fields;
pub mod frontmatter;

pub use fields::{resolve_fields, ResolvedFields, ResolvedSeo};
pub use frontmatter::Frontmatter;
