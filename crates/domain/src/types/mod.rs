//! Domain types and models

pub mod analytics;
pub mod experience;
pub mod profile;
pub mod section;
pub mod user;

pub use analytics::{AnalyticsEvent, ViewMeta};
pub use experience::{Experience, ExperienceDraft};
pub use profile::{NewProfile, Profile, ProfileUpdate};
pub use section::{
    AboutContent, CertificationItem, CertificationsContent, EducationItem, EducationContent,
    ExperienceContent, ExperienceItem, HeroContent, LinkItem, LinksContent, MdxContent,
    ProjectItem, ProjectsContent, Section, SectionContent, SectionDraft, SectionKind,
    SkillCategory, SkillsContent,
};
pub use user::{PlanTier, Session, User, UserState};
