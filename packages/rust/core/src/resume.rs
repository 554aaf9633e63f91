//! Résumé renderer.
//!
//! Section order is fixed; a section is emitted only when its field yields at
//! least one item after trimming and splitting.

use std::path::Path;

use tracing::{debug, info, instrument};

use careerdocs_document::{Block, Document, write_docx};
use careerdocs_shared::{ApplicantProfile, Result};

use crate::sections::{comma_items, contact_line, line_items};

pub const SUMMARY_HEADING: &str = "Professional Summary";
pub const SKILLS_HEADING: &str = "Skills";
pub const EDUCATION_HEADING: &str = "Education";
pub const EXPERIENCE_HEADING: &str = "Experience";
pub const PROJECTS_HEADING: &str = "Projects";
pub const CERTIFICATIONS_HEADING: &str = "Certifications";

/// Build the résumé for `profile`.
pub fn render_resume(profile: &ApplicantProfile) -> Document {
    let mut doc = Document::new();

    doc.push(Block::Title(profile.name.trim().to_string()));

    if let Some(contact) = contact_line(profile) {
        doc.push(Block::Centered(contact));
    }

    let summary = profile.summary.trim();
    if !summary.is_empty() {
        doc.push(Block::Subheading(SUMMARY_HEADING.to_string()));
        doc.push(Block::Text(summary.to_string()));
    }

    push_list(&mut doc, SKILLS_HEADING, comma_items(&profile.skills));

    let line_sections = [
        (EDUCATION_HEADING, &profile.education),
        (EXPERIENCE_HEADING, &profile.experience),
        (PROJECTS_HEADING, &profile.projects),
        (CERTIFICATIONS_HEADING, &profile.certifications),
    ];
    for (heading, value) in line_sections {
        push_list(&mut doc, heading, line_items(value));
    }

    doc
}

/// Render the résumé and write it to `path` as `.docx`.
#[instrument(skip(profile, path), fields(path = %path.display()))]
pub fn write_resume(profile: &ApplicantProfile, path: &Path) -> Result<()> {
    let doc = render_resume(profile);
    write_docx(&doc, path)?;
    info!(sections = doc.subheadings().len(), "résumé written");
    Ok(())
}

fn push_list(doc: &mut Document, heading: &str, items: Vec<&str>) {
    if items.is_empty() {
        debug!(section = heading, "section omitted, no items");
        return;
    }
    doc.push_bullets(heading, items);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> ApplicantProfile {
        ApplicantProfile {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            address: "London".into(),
            linkedin: "linkedin.com/in/ada".into(),
            github: "github.com/ada".into(),
            portfolio: "ada.dev".into(),
            summary: "Mathematician and first programmer.".into(),
            skills: "Mathematics, Analysis".into(),
            education: "Private tutoring".into(),
            experience: "Translator, Menabrea memoir\nCorrespondent, Babbage".into(),
            projects: "Note G".into(),
            certifications: "Royal Society reader's ticket".into(),
            target_role: "Analyst".into(),
            company: "Analytical Engines Ltd".into(),
            hiring_manager: "Mr. Babbage".into(),
        }
    }

    #[test]
    fn name_only_profile_renders_only_heading() {
        let profile = ApplicantProfile {
            name: "Ada Lovelace".into(),
            ..Default::default()
        };
        let doc = render_resume(&profile);
        assert_eq!(doc.blocks, [Block::Title("Ada Lovelace".into())]);
    }

    #[test]
    fn sections_follow_fixed_order() {
        let doc = render_resume(&full_profile());
        assert_eq!(
            doc.subheadings(),
            [
                SUMMARY_HEADING,
                SKILLS_HEADING,
                EDUCATION_HEADING,
                EXPERIENCE_HEADING,
                PROJECTS_HEADING,
                CERTIFICATIONS_HEADING,
            ]
        );
        assert_eq!(doc.blocks[0], Block::Title("Ada Lovelace".into()));
        assert_eq!(
            doc.blocks[1],
            Block::Centered(
                "ada@example.com | 555-0100 | London | linkedin.com/in/ada | github.com/ada | ada.dev"
                    .into()
            )
        );
        assert_eq!(doc.blocks[2], Block::Subheading(SUMMARY_HEADING.into()));
        assert_eq!(
            doc.blocks[3],
            Block::Text("Mathematician and first programmer.".into())
        );
    }

    #[test]
    fn skills_split_on_commas() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            skills: "Python, SQL,  ,Go".into(),
            ..Default::default()
        };
        let doc = render_resume(&profile);
        assert_eq!(doc.bullets_under(SKILLS_HEADING), ["Python", "SQL", "Go"]);
    }

    #[test]
    fn education_drops_blank_lines() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            education: "MIT\n\nStanford".into(),
            ..Default::default()
        };
        let doc = render_resume(&profile);
        assert_eq!(doc.bullets_under(EDUCATION_HEADING), ["MIT", "Stanford"]);
    }

    #[test]
    fn whitespace_only_fields_are_omitted() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            summary: "  \n ".into(),
            skills: " , , ".into(),
            experience: "\n\n".into(),
            ..Default::default()
        };
        let doc = render_resume(&profile);
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn contact_line_uses_only_filled_values() {
        let profile = ApplicantProfile {
            name: "Ada".into(),
            email: "a@b.com".into(),
            linkedin: "x.com/y".into(),
            ..Default::default()
        };
        let doc = render_resume(&profile);
        assert_eq!(doc.blocks[1], Block::Centered("a@b.com | x.com/y".into()));
    }

    #[test]
    fn experience_lines_become_bullets() {
        let doc = render_resume(&full_profile());
        assert_eq!(
            doc.bullets_under(EXPERIENCE_HEADING),
            ["Translator, Menabrea memoir", "Correspondent, Babbage"]
        );
    }
}
