//! Shared test support utilities

pub mod repositories;
