//! End-to-end `generate` pipeline: profile → validate → run folder → résumé + cover letter.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{info, instrument};

use careerdocs_shared::{ApplicantProfile, CareerDocsError, Result};

use crate::{cover_letter, resume};

/// Prefix of every per-run output folder.
pub const RUN_DIR_PREFIX: &str = "Resume_Cover";

/// Timestamp suffix of the run folder, local time to the second.
pub const RUN_DIR_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name of the résumé inside the run folder.
pub const RESUME_FILE_NAME: &str = "Resume.docx";

/// File name of the cover letter inside the run folder.
pub const COVER_LETTER_FILE_NAME: &str = "Cover_Letter.docx";

/// Configuration for one generation request.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Base directory; created if missing.
    pub output_dir: PathBuf,
}

/// Paths written by a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// The timestamped folder holding both documents.
    pub run_dir: PathBuf,
    pub resume_path: PathBuf,
    pub cover_letter_path: PathBuf,
}

/// Generate both documents using the local clock.
pub fn generate(profile: &ApplicantProfile, config: &GenerateConfig) -> Result<GenerateResult> {
    generate_at(profile, config, Local::now().naive_local())
}

/// Generate both documents as if the local time were `now`.
///
/// Nothing is created on disk when the profile fails validation. The two
/// documents are written one after the other; if the cover letter fails the
/// résumé is left in place.
///
/// A second request within the same second reuses the run folder and
/// overwrites its files.
#[instrument(skip(profile, config), fields(output_dir = %config.output_dir.display()))]
pub fn generate_at(
    profile: &ApplicantProfile,
    config: &GenerateConfig,
    now: NaiveDateTime,
) -> Result<GenerateResult> {
    profile.validate()?;

    let run_dir = run_dir_path(&config.output_dir, now);
    std::fs::create_dir_all(&run_dir).map_err(|e| CareerDocsError::io(&run_dir, e))?;
    info!(path = %run_dir.display(), "created run folder");

    let resume_path = run_dir.join(RESUME_FILE_NAME);
    let cover_letter_path = run_dir.join(COVER_LETTER_FILE_NAME);

    resume::write_resume(profile, &resume_path)?;
    cover_letter::write_cover_letter(profile, now.date(), &cover_letter_path)?;

    info!(
        resume = %resume_path.display(),
        cover_letter = %cover_letter_path.display(),
        "generation complete"
    );

    Ok(GenerateResult {
        run_dir,
        resume_path,
        cover_letter_path,
    })
}

/// `<output_dir>/Resume_Cover_<YYYYMMDD>_<HHMMSS>`.
pub fn run_dir_path(output_dir: &Path, now: NaiveDateTime) -> PathBuf {
    output_dir.join(format!(
        "{RUN_DIR_PREFIX}_{}",
        now.format(RUN_DIR_TIMESTAMP_FORMAT)
    ))
}
