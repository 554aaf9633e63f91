//! Core TUI application state and event loop.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use careerdocs_core::pipeline::{GenerateConfig, generate};
use careerdocs_shared::{AppConfig, load_config};

use crate::screens::{FormAction, FormScreen};
use crate::widgets::status_bar;

/// Application state.
pub(crate) struct App {
    /// The profile form.
    pub form: FormScreen,
    /// Loaded configuration (output folder default).
    pub config: AppConfig,
    /// Directory relative output folders resolve against.
    pub cwd: PathBuf,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Status message shown in bottom bar.
    pub status: String,
    /// Whether the status message reports a failure.
    pub status_is_error: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
}

impl App {
    pub(crate) fn new(config: AppConfig, cwd: PathBuf) -> Self {
        let output_dir = config.defaults.output_dir.clone();
        Self {
            form: FormScreen::new(output_dir),
            config,
            cwd,
            should_quit: false,
            status: "Ready. Press ? for help".to_string(),
            status_is_error: false,
            show_help: false,
        }
    }

    /// Hand the finished profile to the generator and report the outcome.
    fn submit(&mut self) {
        let profile = self.form.profile();
        let output_dir = self
            .config
            .resolve_output_dir(Some(self.form.output_dir()), &self.cwd);

        match generate(&profile, &GenerateConfig { output_dir }) {
            Ok(result) => {
                self.status = format!(
                    "Files generated: {} and {}",
                    result.resume_path.display(),
                    result.cover_letter_path.display()
                );
                self.status_is_error = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                self.status = format!("Error: {e}");
                self.status_is_error = true;
            }
        }
    }
}

/// Entry point — sets up terminal, runs event loop, restores terminal.
pub(crate) fn run() -> Result<()> {
    let config = load_config()?;
    let cwd = std::env::current_dir()?;

    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(config, cwd));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Global keybindings (always active)
    match code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if !app.form.is_editing() => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') if !app.form.is_editing() => {
            app.show_help = !app.show_help;
            return;
        }
        _ => {}
    }

    // If help is showing, consume any key to dismiss
    if app.show_help {
        app.show_help = false;
        return;
    }

    if let Some(FormAction::Generate) = app.form.handle_key(code, modifiers) {
        app.submit();
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(1),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new("Résumé & Cover Letter Generator")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" CareerDocs "));
    f.render_widget(title, chunks[0]);

    app.form.draw(f, chunks[1]);

    let bar = status_bar(&app.status, app.status_is_error);
    f.render_widget(bar, chunks[2]);

    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  ↑/↓, Tab     Move between fields"),
        Line::from("  Enter        Edit field / new line in multi-line fields"),
        Line::from("  Esc          Stop editing"),
        Line::from("  Ctrl-G       Generate résumé and cover letter"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
        Line::from(""),
        Line::from("Full Name is required; every other field is optional."),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(help, area);
}

/// Create a centered rectangle with percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cd-tui-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, code, KeyModifiers::NONE);
    }

    #[test]
    fn submit_without_name_reports_error() {
        let base = temp_dir();
        let tmp = base.join("missing-name");
        let mut app = App::new(AppConfig::default(), tmp.clone());

        handle_key(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);

        assert!(app.status_is_error);
        assert!(app.status.contains("Full Name is required"));
        assert!(!tmp.exists());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn submit_with_name_writes_files() {
        let base = temp_dir();
        let tmp = base.join("with-name");
        let mut app = App::new(AppConfig::default(), tmp.clone());

        press(&mut app, KeyCode::Enter);
        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        handle_key(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);

        assert!(!app.status_is_error, "{}", app.status);
        assert!(app.status.contains("Resume.docx"));
        assert!(app.status.contains("Cover_Letter.docx"));
        assert!(tmp.join("CareerDocs_Output").is_dir());

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn q_types_into_field_while_editing() {
        let mut app = App::new(AppConfig::default(), PathBuf::from("/unused"));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.profile().name, "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
