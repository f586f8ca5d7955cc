//! Typed profile sections (generation-2 content model)
//!
//! A section is an ordered, polymorphic content block. The `type` tag is an
//! open string on the wire and in storage; known tags parse into
//! [`SectionKind`] variants, anything else is carried as
//! [`SectionKind::Unknown`] so the renderer can degrade gracefully instead
//! of dropping or crashing on data written by a newer schema.
//!
//! Payload shapes are validated against the tag at the write boundary; the
//! renderer re-decodes at read time and renders a placeholder when the
//! payload does not match its tag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of known section types plus a carrier for unknown tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKind {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Links,
    Certifications,
    Mdx,
    /// A tag this build does not recognize. Preserved verbatim.
    Unknown(String),
}

impl SectionKind {
    /// The wire/storage tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Links => "links",
            Self::Certifications => "certifications",
            Self::Mdx => "mdx",
            Self::Unknown(tag) => tag,
        }
    }

    /// True for section types available only on the Pro plan.
    pub fn is_pro_only(&self) -> bool {
        matches!(self, Self::Mdx)
    }
}

impl From<&str> for SectionKind {
    fn from(tag: &str) -> Self {
        match tag {
            "hero" => Self::Hero,
            "about" => Self::About,
            "skills" => Self::Skills,
            "experience" => Self::Experience,
            "projects" => Self::Projects,
            "education" => Self::Education,
            "links" => Self::Links,
            "certifications" => Self::Certifications,
            "mdx" => Self::Mdx,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for SectionKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<SectionKind> for String {
    fn from(kind: SectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored section row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub profile_id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Raw JSON payload; shape implied by `kind`.
    pub content: Value,
    /// Ascending render order. Ties break by insertion order.
    pub order: i64,
}

impl Section {
    /// Decode the raw payload against this section's tag.
    ///
    /// Unknown tags decode to [`SectionContent::Unknown`]; a known tag whose
    /// payload does not match its shape returns the serde error so callers
    /// can decide (placeholder at render time, rejection at write time).
    pub fn decode(&self) -> Result<SectionContent, serde_json::Error> {
        SectionContent::decode(&self.kind, &self.content)
    }
}

/// Caller-supplied section in a replace-all update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: Value,
    pub order: i64,
}

// ---------------------------------------------------------------------------
// Typed payloads
// ---------------------------------------------------------------------------

/// Hero payload. Carries both the standardized fields and the legacy
/// `name`/`role` spellings the first schema revision used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub full_name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub location: Option<String>,
    /// Deprecated in favour of `Profile.profile_photo_url`.
    pub avatar: Option<String>,
    /// Deprecated in favour of the About section.
    pub bio: Option<String>,
    // Legacy spellings
    pub name: Option<String>,
    pub role: Option<String>,
}

impl HeroContent {
    /// `fullName` with fallback to the legacy `name` field.
    pub fn full_name_or_legacy(&self) -> &str {
        if !self.full_name.is_empty() {
            return &self.full_name;
        }
        self.name.as_deref().unwrap_or_default()
    }

    /// `title` with fallback to the legacy `role` field.
    pub fn title_or_legacy(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.role.as_deref().unwrap_or_default()
    }
}

/// About payload: `summary` with fallback to the legacy `bio` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub summary: Option<String>,
    pub bio: Option<String>,
}

impl AboutContent {
    /// Effective body text, preferring the current field name.
    pub fn body(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.bio.as_deref())
            .unwrap_or_default()
    }
}

/// One entry inside an experience *section* (distinct from the dedicated
/// [`super::Experience`] record).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub location: Option<String>,
}

/// Experience section payload: `items` with fallback to legacy `experiences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceContent {
    pub items: Option<Vec<ExperienceItem>>,
    pub experiences: Option<Vec<ExperienceItem>>,
}

impl ExperienceContent {
    /// Effective entry list, preferring the current field name.
    pub fn entries(&self) -> &[ExperienceItem] {
        self.items
            .as_deref()
            .or(self.experiences.as_deref())
            .unwrap_or_default()
    }
}

/// One named skill group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Skills section payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsContent {
    pub categories: Vec<SkillCategory>,
}

/// One external link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub label: Option<String>,
}

/// Links section payload: `items` with fallback to legacy `links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinksContent {
    pub items: Option<Vec<LinkItem>>,
    pub links: Option<Vec<LinkItem>>,
}

impl LinksContent {
    /// Effective entry list, preferring the current field name.
    pub fn entries(&self) -> &[LinkItem] {
        self.items.as_deref().or(self.links.as_deref()).unwrap_or_default()
    }
}

/// One portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub role: Option<String>,
    pub tech_stack: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image: Option<String>,
}

/// Projects section payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsContent {
    pub items: Vec<ProjectItem>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub field: Option<String>,
    pub description: Option<String>,
}

/// Education section payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationContent {
    pub items: Vec<EducationItem>,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: Option<String>,
    pub expiry_date: Option<String>,
}

/// Certifications section payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationsContent {
    pub items: Vec<CertificationItem>,
}

/// Raw MDX payload (Pro-only section type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MdxContent {
    pub mdx: String,
}

/// Decoded section payload, one variant per known tag.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Skills(SkillsContent),
    Experience(ExperienceContent),
    Projects(ProjectsContent),
    Education(EducationContent),
    Links(LinksContent),
    Certifications(CertificationsContent),
    Mdx(MdxContent),
    /// Payload for a tag this build does not recognize.
    Unknown(String),
}

impl SectionContent {
    /// Decode a raw payload against its tag.
    ///
    /// Errors only for a *known* tag whose payload cannot be deserialized
    /// into the shape the tag implies.
    pub fn decode(kind: &SectionKind, content: &Value) -> Result<Self, serde_json::Error> {
        let decoded = match kind {
            SectionKind::Hero => Self::Hero(serde_json::from_value(content.clone())?),
            SectionKind::About => Self::About(serde_json::from_value(content.clone())?),
            SectionKind::Skills => Self::Skills(serde_json::from_value(content.clone())?),
            SectionKind::Experience => Self::Experience(serde_json::from_value(content.clone())?),
            SectionKind::Projects => Self::Projects(serde_json::from_value(content.clone())?),
            SectionKind::Education => Self::Education(serde_json::from_value(content.clone())?),
            SectionKind::Links => Self::Links(serde_json::from_value(content.clone())?),
            SectionKind::Certifications => {
                Self::Certifications(serde_json::from_value(content.clone())?)
            }
            SectionKind::Mdx => Self::Mdx(serde_json::from_value(content.clone())?),
            SectionKind::Unknown(tag) => Self::Unknown(tag.clone()),
        };
        Ok(decoded)
    }
}
