//! Domain constants

/// Hard cap on dedicated experience records per profile.
///
/// Enforced at the service boundary before any mutation, not just in the UI.
pub const MAX_EXPERIENCES_PER_PROFILE: usize = 3;

/// Minimum username length.
pub const USERNAME_MIN_LEN: usize = 3;

/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 20;

/// Maximum length of a generation-1 document frontmatter title.
pub const FRONTMATTER_TITLE_MAX_LEN: usize = 100;

/// Maximum length of a generation-1 document frontmatter description.
pub const FRONTMATTER_DESCRIPTION_MAX_LEN: usize = 300;

/// Well-known analytics event type recorded on every public profile view.
pub const EVENT_TYPE_VIEW: &str = "view";

/// Well-known analytics event type recorded on outbound link clicks.
pub const EVENT_TYPE_CLICK: &str = "click";

/// Feature ids prefixed with this are owner-editable regardless of plan.
pub const OWNER_EDIT_PREFIX: &str = "edit:";
