//! Immutable platform configuration
//!
//! Feature lists and the plan table are constructed once at startup and
//! passed explicitly into the state engine, the permission gate and the
//! profile service. Nothing in this crate reads them from ambient scope.

use serde::{Deserialize, Serialize};

use crate::types::PlanTier;

/// Site-wide identity used for SEO defaults and the branding footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
    pub description: String,
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Folio".into(),
            url: "https://folio.dev".into(),
            description: "Your professional identity, published.".into(),
            og_image: "/og-image.png".into(),
        }
    }
}

/// One entry in a plan's marketing feature list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFeature {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A subscription plan definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanTier,
    pub name: String,
    pub description: String,
    /// Monthly price in cents; `None` for the free tier.
    pub monthly_price_cents: Option<i64>,
    pub features: Vec<PlanFeature>,
}

/// The full plan table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCatalog {
    pub plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Look up a plan by tier.
    pub fn plan(&self, tier: PlanTier) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == tier)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        let feature = |id: &str, name: &str, description: &str| PlanFeature {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
        };

        Self {
            plans: vec![
                Plan {
                    id: PlanTier::Free,
                    name: "Free".into(),
                    description: "Perfect for getting started with your professional identity"
                        .into(),
                    monthly_price_cents: None,
                    features: vec![
                        feature(
                            "public-profile",
                            "Public Profile",
                            "Share your profile with a custom username",
                        ),
                        feature(
                            "basic-sections",
                            "Basic Sections",
                            "Hero, About, Experience, Education, Skills, Links",
                        ),
                        feature("basic-seo", "Basic SEO", "Standard SEO optimization"),
                        feature(
                            "limited-customization",
                            "Limited Customization",
                            "Basic theme options",
                        ),
                    ],
                },
                Plan {
                    id: PlanTier::Pro,
                    name: "Pro".into(),
                    description: "For professionals who want complete control".into(),
                    monthly_price_cents: Some(999),
                    features: vec![
                        feature("custom-domain", "Custom Domain", "Use your own domain"),
                        feature(
                            "advanced-sections",
                            "Advanced Sections",
                            "MDX sections, projects with case studies",
                        ),
                        feature(
                            "remove-branding",
                            "Remove Branding",
                            "Remove all platform branding from your profile",
                        ),
                        feature(
                            "advanced-seo",
                            "Advanced SEO",
                            "Custom SEO metadata and enhanced indexing",
                        ),
                        feature(
                            "analytics-dashboard",
                            "Analytics Dashboard",
                            "Track profile views, clicks and referrers",
                        ),
                        feature(
                            "recruiter-mode",
                            "Recruiter Mode",
                            "Clean view for recruiters with PDF export",
                        ),
                        feature("custom-cta", "Custom CTA", "Add custom call-to-action buttons"),
                    ],
                },
            ],
        }
    }
}

/// Feature-gating configuration consumed by the permission gate.
///
/// Feature ids outside both lists default to allowed for any signed-in
/// state. Tests pin that fail-open default; flipping it to fail-closed is a
/// policy change, not a refactor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Features allowed only when the viewer state is exactly `ProUser`.
    pub pro_features: Vec<String>,
    /// Features allowed for `FreeUser`, `ProUser` and `Registered`.
    pub free_features: Vec<String>,
}

impl AccessConfig {
    /// True when `feature_id` belongs to the Pro-only list.
    pub fn is_pro_feature(&self, feature_id: &str) -> bool {
        self.pro_features.iter().any(|f| f == feature_id)
    }

    /// True when `feature_id` belongs to the Free-tier list.
    pub fn is_free_feature(&self, feature_id: &str) -> bool {
        self.free_features.iter().any(|f| f == feature_id)
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            pro_features: vec![
                "custom-domain".into(),
                "advanced-seo".into(),
                "remove-branding".into(),
                "advanced-sections".into(),
                "analytics-dashboard".into(),
                "recruiter-mode".into(),
                "custom-cta".into(),
            ],
            free_features: vec![
                "public-profile".into(),
                "basic-sections".into(),
                "basic-seo".into(),
                "limited-customization".into(),
            ],
        }
    }
}
