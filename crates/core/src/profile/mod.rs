//! Profile read/write use cases and their storage ports

pub mod ports;
pub mod service;
pub mod validation;

pub use ports::{
    AnalyticsRepository, ExperienceRepository, ProfileRepository, SectionRepository,
    UserRepository,
};
pub use service::{ProfileBundle, ProfileService, ProfileView, ServiceConfig};
