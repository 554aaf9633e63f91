//! Profile form — one row per field in [`FIELDS`], then the output folder.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use careerdocs_shared::{ApplicantProfile, FIELDS, FieldKey, FieldSpec};

/// Row index of the output-folder input (after all profile fields).
const OUTPUT_ROW: usize = FieldKey::ALL.len();

/// Something the app must do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormAction {
    Generate,
}

pub(crate) struct FormScreen {
    profile: ApplicantProfile,
    output_dir: String,
    focused: usize,
    editing: bool,
}

impl FormScreen {
    pub(crate) fn new(output_dir: String) -> Self {
        Self {
            profile: ApplicantProfile::default(),
            output_dir,
            focused: 0,
            editing: false,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    /// The trimmed profile as it should be handed to the generator.
    pub(crate) fn profile(&self) -> ApplicantProfile {
        self.profile.clone().trimmed()
    }

    pub(crate) fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn focused_spec(&self) -> Option<&'static FieldSpec> {
        FIELDS.get(self.focused)
    }

    fn focused_label(&self) -> &'static str {
        self.focused_spec().map_or("Output Folder", |f| f.label)
    }

    fn focused_value(&self) -> &str {
        match self.focused_spec() {
            Some(spec) => self.profile.get(spec.key),
            None => &self.output_dir,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_spec() {
            Some(spec) => self.profile.field_mut(spec.key),
            None => &mut self.output_dir,
        }
    }

    fn focused_is_multiline(&self) -> bool {
        self.focused_spec().is_some_and(|f| f.multiline)
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),    // Fields + editor
                Constraint::Length(1), // Action hint
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[0]);

        // Field list
        let items: Vec<ListItem> = FIELDS
            .iter()
            .map(|spec| (spec.label, self.profile.get(spec.key)))
            .chain(std::iter::once(("Output Folder", self.output_dir.as_str())))
            .map(|(label, value)| ListItem::new(format!("{label}: {}", preview(value))))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Profile "))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");
        let mut state = ListState::default().with_selected(Some(self.focused));
        f.render_stateful_widget(list, columns[0], &mut state);

        // Editor for the focused field
        let editor_style = if self.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut text = self.focused_value().to_string();
        if self.editing {
            text.push('▏');
        }
        let kind = if self.focused_is_multiline() {
            "multi-line"
        } else {
            "single-line"
        };
        let editor = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ({kind}) ", self.focused_label()))
                    .border_style(editor_style),
            );
        f.render_widget(editor, columns[1]);

        let hint = if self.editing && self.focused_is_multiline() {
            "Type to edit · Enter for new line · Esc to stop editing · Tab to next field"
        } else if self.editing {
            "Type to edit · Enter/Esc to stop editing · Tab to next field"
        } else {
            "Enter to edit · ↑/↓ to move · Ctrl-G to generate"
        };
        let hint_p = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint_p, rows[1]);
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<FormAction> {
        if code == KeyCode::Char('g') && modifiers.contains(KeyModifiers::CONTROL) {
            self.editing = false;
            return Some(FormAction::Generate);
        }

        if self.editing {
            match code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Tab => {
                    self.editing = false;
                    self.next_field();
                }
                KeyCode::Enter if self.focused_is_multiline() => {
                    self.focused_value_mut().push('\n');
                }
                KeyCode::Enter => self.editing = false,
                KeyCode::Backspace => {
                    self.focused_value_mut().pop();
                }
                KeyCode::Char(c)
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.focused_value_mut().push(c)
                }
                _ => {}
            }
        } else {
            match code {
                KeyCode::Enter => self.editing = true,
                KeyCode::Tab | KeyCode::Down => self.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.prev_field(),
                _ => {}
            }
        }
        None
    }

    fn next_field(&mut self) {
        self.focused = (self.focused + 1) % (OUTPUT_ROW + 1);
    }

    fn prev_field(&mut self) {
        self.focused = if self.focused == 0 {
            OUTPUT_ROW
        } else {
            self.focused - 1
        };
    }
}

/// First line of a value, marked when more lines follow.
fn preview(value: &str) -> String {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    if lines.next().is_some() {
        format!("{first} …")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut FormScreen, text: &str) {
        for c in text.chars() {
            form.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn focus(form: &mut FormScreen, key: FieldKey) {
        while form.focused_spec().map(|f| f.key) != Some(key) {
            form.handle_key(KeyCode::Down, KeyModifiers::NONE);
        }
    }

    #[test]
    fn editing_single_line_field() {
        let mut form = FormScreen::new("out".into());
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(form.is_editing());
        type_text(&mut form, " Ada ");
        form.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!form.is_editing());
        assert_eq!(form.profile().name, "Ada");
    }

    #[test]
    fn enter_adds_newline_in_multiline_field() {
        let mut form = FormScreen::new("out".into());
        focus(&mut form, FieldKey::Education);
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_text(&mut form, "MIT");
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_text(&mut form, "Stanford");
        form.handle_key(KeyCode::Esc, KeyModifiers::NONE);

        assert!(!form.is_editing());
        assert_eq!(form.profile().education, "MIT\nStanford");
    }

    #[test]
    fn navigation_wraps_through_output_row() {
        let mut form = FormScreen::new("out".into());
        form.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(form.focused, OUTPUT_ROW);
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_text(&mut form, "2");
        assert_eq!(form.output_dir(), "out2");
        form.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn ctrl_g_requests_generation_even_while_editing() {
        let mut form = FormScreen::new("out".into());
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        let action = form.handle_key(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert_eq!(action, Some(FormAction::Generate));
        assert!(!form.is_editing());
        assert_eq!(form.profile().name, "");
    }

    #[test]
    fn control_and_alt_chords_are_not_typed() {
        let mut form = FormScreen::new("out".into());
        form.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        form.handle_key(KeyCode::Char('a'), KeyModifiers::CONTROL);
        form.handle_key(KeyCode::Char('b'), KeyModifiers::ALT);
        form.handle_key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        type_text(&mut form, "da");

        assert!(form.is_editing());
        assert_eq!(form.profile().name, "Ada");
    }

    #[test]
    fn preview_marks_extra_lines() {
        assert_eq!(preview("one\ntwo"), "one …");
        assert_eq!(preview("one"), "one");
        assert_eq!(preview(""), "");
    }
}
