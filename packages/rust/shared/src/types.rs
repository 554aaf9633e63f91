//! Applicant profile and the form field table.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CareerDocsError, Result};

// ---------------------------------------------------------------------------
// FieldKey
// ---------------------------------------------------------------------------

/// Identifies one field of an [`ApplicantProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Name,
    Email,
    Phone,
    Address,
    Linkedin,
    Github,
    Portfolio,
    Summary,
    Skills,
    Education,
    Experience,
    Projects,
    Certifications,
    TargetRole,
    Company,
    HiringManager,
}

impl FieldKey {
    /// Every field, in form order.
    pub const ALL: [FieldKey; 16] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Linkedin,
        Self::Github,
        Self::Portfolio,
        Self::Summary,
        Self::Skills,
        Self::Education,
        Self::Experience,
        Self::Projects,
        Self::Certifications,
        Self::TargetRole,
        Self::Company,
        Self::HiringManager,
    ];

    /// The key as it appears in profile files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Portfolio => "portfolio",
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::TargetRole => "target_role",
            Self::Company => "company",
            Self::HiringManager => "hiring_manager",
        }
    }

    /// Form metadata for this field.
    pub fn spec(self) -> &'static FieldSpec {
        // FIELDS is declared in `ALL` order.
        &FIELDS[self as usize]
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = CareerDocsError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| CareerDocsError::profile(format!("unknown field '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Whether the input accepts several lines.
    pub multiline: bool,
}

const fn field(key: FieldKey, label: &'static str, multiline: bool) -> FieldSpec {
    FieldSpec {
        key,
        label,
        multiline,
    }
}

/// The input form, top to bottom.
pub static FIELDS: [FieldSpec; 16] = [
    field(FieldKey::Name, "Full Name*", false),
    field(FieldKey::Email, "Email", false),
    field(FieldKey::Phone, "Phone", false),
    field(FieldKey::Address, "Address", false),
    field(FieldKey::Linkedin, "LinkedIn URL", false),
    field(FieldKey::Github, "GitHub URL", false),
    field(FieldKey::Portfolio, "Portfolio URL", false),
    field(FieldKey::Summary, "Summary", true),
    field(FieldKey::Skills, "Skills (comma-separated)", false),
    field(FieldKey::Education, "Education (one per line)", true),
    field(FieldKey::Experience, "Experience (one per line)", true),
    field(FieldKey::Projects, "Projects (one per line)", true),
    field(FieldKey::Certifications, "Certifications (one per line)", true),
    field(FieldKey::TargetRole, "Target Role", false),
    field(FieldKey::Company, "Company", false),
    field(FieldKey::HiringManager, "Hiring Manager", false),
];

// ---------------------------------------------------------------------------
// ApplicantProfile
// ---------------------------------------------------------------------------

/// Everything the user entered for one generation request.
///
/// Every field may be empty except `name`, which [`validate`](Self::validate)
/// requires before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicantProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub summary: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub certifications: String,
    pub target_role: String,
    pub company: String,
    pub hiring_manager: String,
}

impl ApplicantProfile {
    /// Value of one field.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Phone => &self.phone,
            FieldKey::Address => &self.address,
            FieldKey::Linkedin => &self.linkedin,
            FieldKey::Github => &self.github,
            FieldKey::Portfolio => &self.portfolio,
            FieldKey::Summary => &self.summary,
            FieldKey::Skills => &self.skills,
            FieldKey::Education => &self.education,
            FieldKey::Experience => &self.experience,
            FieldKey::Projects => &self.projects,
            FieldKey::Certifications => &self.certifications,
            FieldKey::TargetRole => &self.target_role,
            FieldKey::Company => &self.company,
            FieldKey::HiringManager => &self.hiring_manager,
        }
    }

    /// Mutable access to one field, used by the interactive form.
    pub fn field_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Phone => &mut self.phone,
            FieldKey::Address => &mut self.address,
            FieldKey::Linkedin => &mut self.linkedin,
            FieldKey::Github => &mut self.github,
            FieldKey::Portfolio => &mut self.portfolio,
            FieldKey::Summary => &mut self.summary,
            FieldKey::Skills => &mut self.skills,
            FieldKey::Education => &mut self.education,
            FieldKey::Experience => &mut self.experience,
            FieldKey::Projects => &mut self.projects,
            FieldKey::Certifications => &mut self.certifications,
            FieldKey::TargetRole => &mut self.target_role,
            FieldKey::Company => &mut self.company,
            FieldKey::HiringManager => &mut self.hiring_manager,
        }
    }

    /// Replace one field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        *self.field_mut(key) = value.into();
    }

    /// Trim surrounding whitespace from every field.
    ///
    /// Inner newlines in multi-line fields are kept.
    pub fn trimmed(mut self) -> Self {
        for key in FieldKey::ALL {
            let value = self.field_mut(key);
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }
        self
    }

    /// Check that the profile can be turned into documents.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            let key = FieldKey::Name;
            return Err(CareerDocsError::missing_field(
                key.as_str(),
                key.spec().label.trim_end_matches('*'),
            ));
        }
        Ok(())
    }
}

/// Load a profile from a `.json` or `.toml` file (TOML unless the extension is `json`).
pub fn load_profile_from(path: &Path) -> Result<ApplicantProfile> {
    let content = std::fs::read_to_string(path).map_err(|e| CareerDocsError::io(path, e))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| CareerDocsError::profile(format!("failed to parse {}: {e}", path.display())))
}
