//! Field splitting rules shared by the résumé and cover-letter renderers.

use careerdocs_shared::{ApplicantProfile, FieldKey};

/// Contact fields shown under the résumé heading, in display order.
pub const CONTACT_FIELDS: [FieldKey; 6] = [
    FieldKey::Email,
    FieldKey::Phone,
    FieldKey::Address,
    FieldKey::Linkedin,
    FieldKey::Github,
    FieldKey::Portfolio,
];

/// Separator between contact values.
pub const CONTACT_SEPARATOR: &str = " | ";

/// Split on commas, trim each entry and drop the empty ones.
pub fn comma_items(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on newlines, trim each line and drop the blank ones.
pub fn line_items(value: &str) -> Vec<&str> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Non-empty contact values joined with [`CONTACT_SEPARATOR`], or `None` if all are empty.
pub fn contact_line(profile: &ApplicantProfile) -> Option<String> {
    let parts: Vec<&str> = CONTACT_FIELDS
        .iter()
        .map(|key| profile.get(*key).trim())
        .filter(|v| !v.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(CONTACT_SEPARATOR))
    }
}

/// Trimmed value, or `default` when it is empty.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { default } else { trimmed }
}
