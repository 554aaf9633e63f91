//! `.docx` serialization via `docx-rs`.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start,
};
use tracing::{debug, instrument};

use careerdocs_shared::{CareerDocsError, Result};

use crate::{Block, Document};

/// Point size of [`Block::Title`] runs.
pub const TITLE_SIZE_PT: usize = 20;

/// Point size of [`Block::Subheading`] runs.
pub const SUBHEADING_SIZE_PT: usize = 12;

/// Numbering definition shared by every bullet paragraph.
const BULLET_NUMBERING_ID: usize = 1;

/// Serialize `doc` and write it to `path`, replacing any existing file.
#[instrument(skip(doc, path), fields(path = %path.display(), blocks = doc.blocks.len()))]
pub fn write_docx(doc: &Document, path: &Path) -> Result<()> {
    let bytes = to_docx_bytes(doc).map_err(|e| match e {
        CareerDocsError::Document { message, .. } => CareerDocsError::document(path, message),
        other => other,
    })?;

    std::fs::write(path, &bytes).map_err(|e| CareerDocsError::io(path, e))?;
    debug!(size = bytes.len(), "wrote docx");
    Ok(())
}

/// Serialize `doc` to the bytes of a `.docx` package.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    check_xml_chars(doc)?;

    let mut docx = Docx::new();

    if doc.blocks.iter().any(|b| matches!(b, Block::Bullet(_))) {
        docx = docx
            .add_abstract_numbering(bullet_definition())
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));
    }

    for block in &doc.blocks {
        docx = docx.add_paragraph(paragraph(block));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| CareerDocsError::document("<memory>", format!("docx packaging failed: {e}")))?;

    Ok(buf.into_inner())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject text that cannot appear in an XML 1.0 document. Nothing is stripped.
fn check_xml_chars(doc: &Document) -> Result<()> {
    for block in &doc.blocks {
        if let Some(c) = block.text().chars().find(|&c| !is_xml_char(c)) {
            return Err(CareerDocsError::document(
                "<memory>",
                format!(
                    "text is not XML compatible: contains U+{:04X} in {:?}",
                    u32::from(c),
                    block.text()
                ),
            ));
        }
    }
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Title(text) => Paragraph::new()
            .add_run(text_run(text).bold().size(TITLE_SIZE_PT * 2))
            .align(AlignmentType::Center),
        Block::Centered(text) => Paragraph::new()
            .add_run(text_run(text))
            .align(AlignmentType::Center),
        Block::Subheading(text) => {
            Paragraph::new().add_run(text_run(text).bold().size(SUBHEADING_SIZE_PT * 2))
        }
        Block::Text(text) => Paragraph::new().add_run(text_run(text)),
        Block::Bullet(text) => Paragraph::new()
            .add_run(text_run(text))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0)),
    }
}

/// Build a run, turning embedded newlines into line breaks.
fn text_run(text: &str) -> Run {
    let mut run = Run::new();
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

fn bullet_definition() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}
