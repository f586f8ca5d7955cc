//! Viewer classification and feature gating

pub mod gate;
pub mod state;

pub use gate::{FeatureDecision, FeatureGate};
pub use state::derive_user_state;
