use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::view::centered_rect;

fn bind(key: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(what),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let rect = centered_rect(52, 18, area);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        bind("Ctrl-R", "       Run"),
        bind("Ctrl-L", "       Clear output"),
        bind("Ctrl-P", "       Print (export + clipboard)"),
        bind("Ctrl-O", "       Open a file into the console"),
        bind("Ctrl-S", "       Save the console to a file"),
        Line::from(""),
        bind("Tab / \u{2191}\u{2193}", "   Move focus"),
        bind("Enter", "        Press button / next field"),
        bind("PgUp/PgDn", "    Scroll output"),
        Line::from(""),
        bind("F1", "           This help"),
        bind("Esc / Ctrl-C", " Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, rect);
}
