//! Cover-letter renderer.
//!
//! Unlike the résumé, every paragraph is always present: empty fields fall
//! back to placeholder text, and the signature lines are emitted even when blank.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, instrument};

use careerdocs_document::{Block, Document, write_docx};
use careerdocs_shared::{ApplicantProfile, Result};

use crate::sections::{line_items, or_default};

pub const DEFAULT_HIRING_MANAGER: &str = "Hiring Manager";
pub const DEFAULT_COMPANY_LINE: &str = "Company Name";
pub const DEFAULT_COMPANY_PROSE: &str = "your company";
pub const DEFAULT_ROLE: &str = "[Role]";

/// Date format for the letter heading, e.g. `October 07, 2026`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

const PROJECTS_INTRO: &str = "I have worked on several projects, including:";

const CLOSING: &str = "I look forward to the opportunity to discuss how I can contribute to your team.\n\
                       Thank you for considering my application.";

/// Build the cover letter for `profile`, dated `today`.
pub fn render_cover_letter(profile: &ApplicantProfile, today: NaiveDate) -> Document {
    let hiring_manager = or_default(&profile.hiring_manager, DEFAULT_HIRING_MANAGER);
    let role = or_default(&profile.target_role, DEFAULT_ROLE);
    let company_line = or_default(&profile.company, DEFAULT_COMPANY_LINE);
    let company_prose = or_default(&profile.company, DEFAULT_COMPANY_PROSE);

    let mut doc = Document::new();

    doc.push(Block::Text(format!("{}\n", today.format(DATE_FORMAT))));
    doc.push(Block::Text(hiring_manager.to_string()));
    doc.push(Block::Text(format!("{company_line}\n")));
    doc.push(Block::Text(format!("Dear {hiring_manager},\n")));

    // Skills go in verbatim here; only the résumé splits them into items.
    doc.push(Block::Text(format!(
        "I am excited to apply for the {role} position at {company_prose}. \
         With my skills in {} and experience in software development, \
         I am confident in my ability to contribute effectively.",
        profile.skills
    )));

    let projects: Vec<String> = line_items(&profile.projects)
        .into_iter()
        .map(|p| format!("- {p}"))
        .collect();
    doc.push(Block::Text(format!("{PROJECTS_INTRO}\n{}", projects.join("\n"))));

    doc.push(Block::Text(CLOSING.to_string()));

    doc.push(Block::Text("\nSincerely,".to_string()));
    doc.push(Block::Text(profile.name.trim().to_string()));
    doc.push(Block::Text(profile.email.trim().to_string()));
    doc.push(Block::Text(profile.phone.trim().to_string()));

    doc
}

/// Render the cover letter dated `today` and write it to `path` as `.docx`.
#[instrument(skip(profile, path), fields(path = %path.display()))]
pub fn write_cover_letter(profile: &ApplicantProfile, today: NaiveDate, path: &Path) -> Result<()> {
    let doc = render_cover_letter(profile, today);
    write_docx(&doc, path)?;
    info!(paragraphs = doc.blocks.len(), "cover letter written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    fn texts(doc: &Document) -> Vec<&str> {
        doc.blocks.iter().map(Block::text).collect()
    }

    #[test]
    fn name_only_profile_gets_full_skeleton_with_defaults() {
        let profile = ApplicantProfile {
            name: "Ada Lovelace".into(),
            ..Default::default()
        };
        let doc = render_cover_letter(&profile, today());

        assert_eq!(
            texts(&doc),
            [
                "March 07, 2026\n",
                "Hiring Manager",
                "Company Name\n",
                "Dear Hiring Manager,\n",
                "I am excited to apply for the [Role] position at your company. \
                 With my skills in  and experience in software development, \
                 I am confident in my ability to contribute effectively.",
                "I have worked on several projects, including:\n",
                "I look forward to the opportunity to discuss how I can contribute to your team.\n\
                 Thank you for considering my application.",
                "\nSincerely,",
                "Ada Lovelace",
                "",
                "",
            ]
        );
        assert!(doc.blocks.iter().all(|b| matches!(b, Block::Text(_))));
    }

    #[test]
    fn fields_are_interpolated() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            skills: "Python, SQL,  ,Go".into(),
            target_role: "Analyst".into(),
            company: "Engines Ltd".into(),
            hiring_manager: "Mr. Babbage".into(),
            ..Default::default()
        };
        let doc = render_cover_letter(&profile, today());
        let texts = texts(&doc);

        assert_eq!(texts[1], "Mr. Babbage");
        assert_eq!(texts[2], "Engines Ltd\n");
        assert_eq!(texts[3], "Dear Mr. Babbage,\n");
        assert!(texts[4].starts_with("I am excited to apply for the Analyst position at Engines Ltd."));
        // Raw skills text, not the cleaned list.
        assert!(texts[4].contains("With my skills in Python, SQL,  ,Go and experience"));
        assert_eq!(&texts[8..], ["Ada", "ada@example.com", "555-0100"]);
    }

    #[test]
    fn projects_are_dash_prefixed_lines() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            projects: "  Note G \n\nDifference engine tables\n".into(),
            ..Default::default()
        };
        let doc = render_cover_letter(&profile, today());
        assert_eq!(
            doc.blocks[5].text(),
            "I have worked on several projects, including:\n- Note G\n- Difference engine tables"
        );
    }

    #[test]
    fn date_uses_full_month_name() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let doc = render_cover_letter(&profile, date);
        assert_eq!(doc.blocks[0].text(), "October 17, 2026\n");
    }
}
