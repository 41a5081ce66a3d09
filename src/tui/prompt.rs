use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::Position,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::Stdout;

use super::view::centered_rect;
use crate::input::PromptSource;

/// Blocking modal dialogs, drawn directly on the terminal. Run handlers
/// executing inside the event loop get one of these as their
/// [`PromptSource`]; each prompt runs its own small read loop until the
/// user confirms or dismisses.
pub struct TuiPrompt<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<Stdout>>,
}

impl<'a> TuiPrompt<'a> {
    pub fn new(terminal: &'a mut Terminal<CrosstermBackend<Stdout>>) -> Self {
        Self { terminal }
    }

    /// Returns `None` when dismissed with Esc.
    fn modal(&mut self, text: &str, editable: bool) -> Option<String> {
        let mut buf = String::new();
        loop {
            let drawn = self
                .terminal
                .draw(|f| draw_dialog(f, text, editable.then_some(buf.as_str())));
            if drawn.is_err() {
                return None;
            }
            match event::read() {
                Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => match k.code {
                    KeyCode::Enter => return Some(buf),
                    KeyCode::Esc => return None,
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return None;
                    }
                    KeyCode::Char(c) if editable => buf.push(c),
                    KeyCode::Backspace if editable => {
                        buf.pop();
                    }
                    _ => {}
                },
                Ok(_) => {}
                Err(_) => return None,
            }
        }
    }
}

impl PromptSource for TuiPrompt<'_> {
    fn prompt_text(&mut self, prompt: &str) -> String {
        self.modal(prompt, true).unwrap_or_default()
    }

    fn show_message(&mut self, message: &str) {
        let _ = self.modal(message, false);
    }
}

fn draw_dialog(f: &mut Frame, text: &str, entry: Option<&str>) {
    let area = f.area();
    let width = (text.chars().count() as u16 + 6).clamp(30, area.width.max(30));
    let height = if entry.is_some() { 7 } else { 5 };
    let rect = centered_rect(width, height, area);
    f.render_widget(Clear, rect);

    let gray = Style::default().fg(Color::Gray);
    let mut lines = vec![Line::from(format!(" {text}"))];
    if let Some(buf) = entry {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" > ", gray),
            Span::raw(buf.to_string()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Enter to confirm, Esc to cancel",
            gray,
        )));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Enter to dismiss", gray)));
    }
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Dialog"));
    f.render_widget(p, rect);

    if let Some(buf) = entry {
        let x = rect.x + 4 + buf.chars().count() as u16;
        let y = rect.y + 3;
        if x < rect.right().saturating_sub(1) {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
