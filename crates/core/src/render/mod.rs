//! Section renderer
//!
//! Maps each stored section to a typed rendered block, in strict ascending
//! `order` (ties keep insertion order). The contract for bad data is
//! degraded rendering, never failure: unknown tags and payloads that do not
//! decode produce a visible placeholder block instead of being dropped or
//! crashing the page.
//!
//! The dedicated experience table (generation 3) renders as an
//! always-appended block after section-driven content, independent of any
//! section's own order. The two experience representations are additive by
//! design and are deliberately not merged or deduplicated here.

use folio_domain::{
    CertificationItem, EducationItem, Experience, ExperienceItem, LinkItem, Profile, ProjectItem,
    Section, SectionContent, SectionKind, SiteConfig, SkillCategory, UserState,
};
use serde::{Deserialize, Serialize};

use crate::access::gate::FeatureGate;
use crate::resolve::{resolve_fields, ResolvedFields};

/// Feature id gating Pro-only section types.
const ADVANCED_SECTIONS_FEATURE: &str = "advanced-sections";

/// One social link surfaced in the hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub kind: String,
    pub url: String,
}

/// Branding attribution footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingFooter {
    pub site_name: String,
    pub site_url: String,
}

/// One rendered content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", rename_all = "camelCase")]
pub enum RenderedBlock {
    Hero {
        name: String,
        headline: String,
        location: String,
        tagline: String,
        photo_url: String,
        bio: String,
        accent_color: Option<String>,
        social_links: Vec<SocialLink>,
    },
    About {
        summary: String,
    },
    Skills {
        categories: Vec<SkillCategory>,
    },
    /// Entries from an `experience` *section* (generation 2).
    ExperienceSection {
        entries: Vec<ExperienceItem>,
    },
    Projects {
        items: Vec<ProjectItem>,
    },
    Education {
        items: Vec<EducationItem>,
    },
    Links {
        items: Vec<LinkItem>,
    },
    Certifications {
        items: Vec<CertificationItem>,
    },
    Mdx {
        source: String,
    },
    /// Visible, non-fatal stand-in for content that cannot be rendered.
    Placeholder {
        kind: String,
        message: String,
    },
}

/// The fully rendered public document for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedProfile {
    /// Section-driven blocks in render order.
    pub blocks: Vec<RenderedBlock>,
    /// Dedicated experience records, always appended after `blocks`.
    pub work_history: Vec<Experience>,
    /// Present unless the profile suppresses branding (Pro).
    pub branding: Option<BrandingFooter>,
    /// Resolved identity and SEO values.
    pub fields: ResolvedFields,
}

/// Render a profile's sections and experience records into a document.
///
/// `owner_state` is the derived state of the profile *owner*; Pro-only
/// section types render as placeholders when the owner's state is not
/// entitled to them.
pub fn render_profile(
    profile: &Profile,
    sections: &[Section],
    experiences: &[Experience],
    owner_state: UserState,
    gate: &FeatureGate,
    site: &SiteConfig,
) -> RenderedProfile {
    let fields = resolve_fields(profile, sections, site);

    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_key(|s| s.order);

    let mut blocks = Vec::new();
    for section in ordered {
        if let Some(block) = render_section(section, profile, &fields, owner_state, gate) {
            blocks.push(block);
        }
    }

    let mut work_history: Vec<Experience> = experiences.to_vec();
    work_history.sort_by_key(|e| e.order);

    let branding = if profile.remove_branding {
        None
    } else {
        Some(BrandingFooter { site_name: site.name.clone(), site_url: site.url.clone() })
    };

    RenderedProfile { blocks, work_history, branding, fields }
}

/// Render one section. Returns `None` for known-empty sections, which are
/// omitted; anything unrenderable becomes a placeholder instead.
fn render_section(
    section: &Section,
    profile: &Profile,
    fields: &ResolvedFields,
    owner_state: UserState,
    gate: &FeatureGate,
) -> Option<RenderedBlock> {
    if section.kind.is_pro_only() {
        let decision = gate.check(owner_state, ADVANCED_SECTIONS_FEATURE, false);
        if !decision.allowed {
            return Some(RenderedBlock::Placeholder {
                kind: section.kind.to_string(),
                message: decision
                    .reason
                    .unwrap_or_else(|| "This section requires a Pro plan".to_string()),
            });
        }
    }

    let content = match section.decode() {
        Ok(content) => content,
        Err(_) => {
            return Some(RenderedBlock::Placeholder {
                kind: section.kind.to_string(),
                message: format!("The \"{}\" section could not be displayed", section.kind),
            });
        }
    };

    match content {
        SectionContent::Hero(hero) => Some(RenderedBlock::Hero {
            name: fields.display_name.clone(),
            headline: fields.headline.clone(),
            location: fields.location.clone(),
            tagline: fields.tagline.clone(),
            photo_url: fields.photo_url.clone(),
            bio: hero.bio.unwrap_or_default(),
            accent_color: fields.accent_color.clone(),
            social_links: social_links(profile),
        }),
        SectionContent::About(about) => {
            let summary = about.body().to_string();
            if summary.is_empty() {
                None
            } else {
                Some(RenderedBlock::About { summary })
            }
        }
        SectionContent::Skills(skills) => {
            if skills.categories.is_empty() {
                None
            } else {
                Some(RenderedBlock::Skills { categories: skills.categories })
            }
        }
        SectionContent::Experience(experience) => {
            let entries = experience.entries().to_vec();
            if entries.is_empty() {
                None
            } else {
                Some(RenderedBlock::ExperienceSection { entries })
            }
        }
        SectionContent::Projects(projects) => {
            if projects.items.is_empty() {
                None
            } else {
                Some(RenderedBlock::Projects { items: projects.items })
            }
        }
        SectionContent::Education(education) => {
            if education.items.is_empty() {
                None
            } else {
                Some(RenderedBlock::Education { items: education.items })
            }
        }
        SectionContent::Links(links) => {
            let items = links.entries().to_vec();
            if items.is_empty() {
                None
            } else {
                Some(RenderedBlock::Links { items })
            }
        }
        SectionContent::Certifications(certs) => {
            if certs.items.is_empty() {
                None
            } else {
                Some(RenderedBlock::Certifications { items: certs.items })
            }
        }
        SectionContent::Mdx(mdx) => Some(RenderedBlock::Mdx { source: mdx.mdx }),
        SectionContent::Unknown(tag) => Some(RenderedBlock::Placeholder {
            kind: tag.clone(),
            message: format!("Section type \"{tag}\" is not supported yet"),
        }),
    }
}

/// Social links from the generation-3 profile URL fields, in a fixed order.
fn social_links(profile: &Profile) -> Vec<SocialLink> {
    let candidates = [
        ("github", profile.github_url.as_deref()),
        ("linkedin", profile.linkedin_url.as_deref()),
        ("website", profile.website_url.as_deref()),
        ("twitter", profile.twitter_url.as_deref()),
    ];
    candidates
        .into_iter()
        .filter_map(|(kind, url)| {
            url.filter(|u| !u.is_empty())
                .map(|u| SocialLink { kind: kind.to_string(), url: u.to_string() })
        })
        .collect()
}
