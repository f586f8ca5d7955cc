//! The field resolver
//!
//! Computes the single effective value for every rendered attribute that has
//! more than one potential source across schema generations. Priority is
//! fixed: generation-3 profile fields, then hero-section fields, then legacy
//! hero spellings, then the generation-1 document, then empty.
//!
//! Resolution is pure and total: every attribute resolves to a defined
//! (possibly empty) value for any well-formed input and never errors.

use folio_domain::{HeroContent, Profile, Section, SectionContent, SectionKind, SiteConfig};
use serde::{Deserialize, Serialize};

use super::frontmatter::Frontmatter;

/// Effective display values for a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFields {
    pub display_name: String,
    pub headline: String,
    pub location: String,
    pub photo_url: String,
    pub tagline: String,
    pub accent_color: Option<String>,
    pub seo: ResolvedSeo,
}

/// Effective SEO metadata for a profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSeo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image: String,
    pub canonical_url: String,
}

/// Resolve all multi-source attributes for one profile.
pub fn resolve_fields(profile: &Profile, sections: &[Section], site: &SiteConfig) -> ResolvedFields {
    let hero = first_hero(sections);
    let hero = hero.as_ref();
    let frontmatter = profile
        .content
        .as_deref()
        .map(Frontmatter::parse)
        .unwrap_or_default();

    let display_name = pick(&[
        profile.display_name.as_deref(),
        hero.map(HeroContent::full_name_or_legacy),
    ]);
    let headline = pick(&[
        profile.headline.as_deref(),
        hero.map(HeroContent::title_or_legacy),
    ]);
    let location = pick(&[
        profile.location.as_deref(),
        hero.and_then(|h| h.location.as_deref()),
        frontmatter.location.as_deref(),
    ]);
    let photo_url = pick(&[
        profile.profile_photo_url.as_deref(),
        hero.and_then(|h| h.avatar.as_deref()),
    ]);
    let tagline = pick(&[hero.and_then(|h| h.tagline.as_deref())]);

    let seo = resolve_seo(profile, &display_name, &headline, &photo_url, &frontmatter, site);

    ResolvedFields {
        display_name,
        headline,
        location,
        photo_url,
        tagline,
        accent_color: profile.accent_color.clone(),
        seo,
    }
}

/// SEO priority: explicit profile override, derived identity fields, hero
/// content, legacy frontmatter, then username / site defaults.
fn resolve_seo(
    profile: &Profile,
    display_name: &str,
    headline: &str,
    photo_url: &str,
    frontmatter: &Frontmatter,
    site: &SiteConfig,
) -> ResolvedSeo {
    let title = pick(&[
        profile.seo_title.as_deref(),
        non_empty(display_name),
        frontmatter.title.as_deref(),
        Some(&profile.username),
    ]);
    let description = pick(&[
        profile.seo_description.as_deref(),
        non_empty(headline),
        frontmatter.description.as_deref(),
        Some(&site.description),
    ]);
    let keywords = profile
        .seo_keywords
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| frontmatter.keywords.clone());
    let image = pick(&[
        non_empty(photo_url),
        frontmatter.image.as_deref(),
        Some(&site.og_image),
    ]);

    ResolvedSeo {
        title,
        description,
        keywords,
        image,
        canonical_url: format!("{}/u/{}", site.url, profile.username),
    }
}

/// First hero section in render order whose payload decodes.
fn first_hero(sections: &[Section]) -> Option<HeroContent> {
    let mut heroes: Vec<&Section> =
        sections.iter().filter(|s| s.kind == SectionKind::Hero).collect();
    heroes.sort_by_key(|s| s.order);
    heroes.into_iter().find_map(|section| match section.decode() {
        Ok(SectionContent::Hero(hero)) => Some(hero),
        _ => None,
    })
}

/// First non-empty candidate, or empty string.
fn pick(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map_or_else(String::new, |value| (*value).to_string())
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
