//! Plain-text rendering used for terminal previews.

use crate::{Block, Document};

/// Width used to center titles and centered lines.
const PREVIEW_WIDTH: usize = 72;

pub(crate) fn render(doc: &Document) -> String {
    let mut out = String::new();
    let mut prev: Option<&Block> = None;

    for block in &doc.blocks {
        // Bullets of one list stay together; everything else is spaced out.
        let continues_list = matches!((prev, block), (Some(Block::Bullet(_)), Block::Bullet(_)));
        if prev.is_some() && !continues_list {
            out.push('\n');
        }

        match block {
            Block::Title(text) => {
                let line = center(text);
                out.push_str(&line);
                out.push('\n');
                out.push_str(&center(&"=".repeat(text.chars().count())));
                out.push('\n');
            }
            Block::Centered(text) => {
                for line in text.split('\n') {
                    out.push_str(&center(line));
                    out.push('\n');
                }
            }
            Block::Subheading(text) => {
                out.push_str(text);
                out.push('\n');
                out.push_str(&"-".repeat(text.chars().count()));
                out.push('\n');
            }
            Block::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Bullet(text) => {
                out.push_str("  • ");
                out.push_str(text);
                out.push('\n');
            }
        }

        prev = Some(block);
    }

    out
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= PREVIEW_WIDTH {
        return text.to_string();
    }
    let pad = (PREVIEW_WIDTH - len) / 2;
    format!("{}{text}", " ".repeat(pad))
}
