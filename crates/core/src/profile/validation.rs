//! Write-path validation for the multi-generation profile schema
//!
//! Validation is all-or-nothing and runs before any mutation. URL fields are
//! normalized during validation: empty strings become null, everything else
//! must parse as an absolute URL (the photo field additionally accepts
//! site-relative paths starting with `/`).

use folio_domain::constants::{
    FRONTMATTER_DESCRIPTION_MAX_LEN, FRONTMATTER_TITLE_MAX_LEN, MAX_EXPERIENCES_PER_PROFILE,
    USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use folio_domain::{
    FolioError, ProfileUpdate, Result, SectionContent, SectionKind, ValidationErrors,
};
use url::Url;

use crate::resolve::Frontmatter;

/// Validate a username for profile creation.
///
/// Usernames are the immutable public URL key: lowercase alphanumerics with
/// `-`/`_`, 3 to 20 characters, leading character alphanumeric.
pub fn validate_username(username: &str) -> Result<()> {
    let mut errors = ValidationErrors::new();
    let len = username.chars().count();
    if len < USERNAME_MIN_LEN || len > USERNAME_MAX_LEN {
        errors.push(
            "username",
            format!("must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters"),
        );
    } else if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        errors.push("username", "only lowercase letters, digits, '-' and '_' are allowed");
    } else if !username.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        errors.push("username", "must start with a letter or digit");
    }
    errors.into_result()
}

/// Validate and normalize a partial update.
///
/// Returns the update with URL fields normalized, or a validation error
/// carrying every field-level issue found. Never applies anything.
pub fn validate_update(mut update: ProfileUpdate) -> Result<ProfileUpdate> {
    if !update.has_updates() {
        return Err(FolioError::invalid_field("body", "nothing to update"));
    }

    let mut errors = ValidationErrors::new();

    if let Some(content) = update.content.as_deref() {
        validate_legacy_document(content, &mut errors);
    }

    update.profile_photo_url =
        normalize_url_field(update.profile_photo_url, "profilePhotoUrl", true, &mut errors);
    update.github_url = normalize_url_field(update.github_url, "githubUrl", false, &mut errors);
    update.linkedin_url =
        normalize_url_field(update.linkedin_url, "linkedinUrl", false, &mut errors);
    update.website_url = normalize_url_field(update.website_url, "websiteUrl", false, &mut errors);
    update.twitter_url = normalize_url_field(update.twitter_url, "twitterUrl", false, &mut errors);

    if let Some(experiences) = update.experiences.as_deref() {
        if experiences.len() > MAX_EXPERIENCES_PER_PROFILE {
            errors.push(
                "experiences",
                format!("maximum {MAX_EXPERIENCES_PER_PROFILE} experiences allowed"),
            );
        }
        for (index, draft) in experiences.iter().enumerate() {
            if draft.company.trim().is_empty() {
                errors.push(format!("experiences[{index}].company"), "is required");
            }
            if draft.role.trim().is_empty() {
                errors.push(format!("experiences[{index}].role"), "is required");
            }
            if draft.start_date.trim().is_empty() {
                errors.push(format!("experiences[{index}].startDate"), "is required");
            }
        }
    }

    if let Some(sections) = update.sections.as_deref() {
        for (index, draft) in sections.iter().enumerate() {
            // Unknown tags pass through; a known tag whose payload does not
            // match its shape is a data-integrity error caught here, at the
            // write boundary, rather than papered over at read time.
            if !matches!(draft.kind, SectionKind::Unknown(_))
                && SectionContent::decode(&draft.kind, &draft.content).is_err()
            {
                errors.push(
                    format!("sections[{index}].content"),
                    format!("does not match the \"{}\" section schema", draft.kind),
                );
            }
        }
    }

    errors.into_result()?;
    Ok(update)
}

/// Frontmatter rules for the generation-1 document.
fn validate_legacy_document(content: &str, errors: &mut ValidationErrors) {
    let frontmatter = Frontmatter::parse(content);
    match frontmatter.title.as_deref() {
        None | Some("") => errors.push("content", "frontmatter title is required"),
        Some(title) if title.chars().count() > FRONTMATTER_TITLE_MAX_LEN => {
            errors.push(
                "content",
                format!("frontmatter title must be at most {FRONTMATTER_TITLE_MAX_LEN} characters"),
            );
        }
        Some(_) => {}
    }
    if let Some(description) = frontmatter.description.as_deref() {
        if description.chars().count() > FRONTMATTER_DESCRIPTION_MAX_LEN {
            errors.push(
                "content",
                format!(
                    "frontmatter description must be at most {FRONTMATTER_DESCRIPTION_MAX_LEN} characters"
                ),
            );
        }
    }
}

/// Normalize one tri-state URL field: empty string becomes null, anything
/// else must be a valid URL.
fn normalize_url_field(
    field: Option<Option<String>>,
    name: &str,
    allow_relative: bool,
    errors: &mut ValidationErrors,
) -> Option<Option<String>> {
    match field {
        None => None,
        Some(None) => Some(None),
        Some(Some(value)) if value.is_empty() => Some(None),
        Some(Some(value)) => {
            let valid = if allow_relative && value.starts_with('/') {
                true
            } else {
                Url::parse(&value).is_ok()
            };
            if !valid {
                errors.push(name, "must be an absolute URL or empty");
            }
            Some(Some(value))
        }
    }
}
