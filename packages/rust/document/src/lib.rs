//! Word-processor document model and writers.
//!
//! Renderers build a [`Document`] out of a handful of block kinds; this crate
//! turns it into a `.docx` file (via `docx-rs`) or a plain-text preview.

mod docx;
mod text;

pub use docx::{SUBHEADING_SIZE_PT, TITLE_SIZE_PT, to_docx_bytes, write_docx};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One paragraph-level element of a document.
///
/// Text may contain `\n`, which writers render as a line break inside the
/// same paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Large, bold, centered heading.
    Title(String),
    /// Plain centered paragraph.
    Centered(String),
    /// Bold section label.
    Subheading(String),
    /// Plain left-aligned paragraph.
    Text(String),
    /// Bulleted list item.
    Bullet(String),
}

impl Block {
    /// The text carried by the block.
    pub fn text(&self) -> &str {
        match self {
            Self::Title(t)
            | Self::Centered(t)
            | Self::Subheading(t)
            | Self::Text(t)
            | Self::Bullet(t) => t,
        }
    }
}

/// An ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a subheading followed by one bullet per item.
    pub fn push_bullets<I, S>(&mut self, heading: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::Subheading(heading.to_string()));
        self.blocks.extend(items.into_iter().map(|s| Block::Bullet(s.into())));
    }

    /// Labels of every subheading, in order.
    pub fn subheadings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Subheading(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Bullet items that follow the subheading `heading`, up to the next subheading.
    pub fn bullets_under(&self, heading: &str) -> Vec<&str> {
        self.blocks
            .iter()
            .skip_while(|b| !matches!(b, Block::Subheading(t) if t == heading))
            .skip(1)
            .take_while(|b| !matches!(b, Block::Subheading(_)))
            .filter_map(|b| match b {
                Block::Bullet(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render the document as plain text for terminal previews.
    pub fn to_plain_text(&self) -> String {
        text::render(self)
    }
}
