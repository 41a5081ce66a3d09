use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::help;
use super::picker;
use super::state::{Focus, Overlay, UiState, BUTTONS};
use crate::harness::SelectableOptions;

pub fn draw(area: Rect, f: &mut Frame, state: &mut UiState) {
    let rows = state.harness.form.rows() as u16;
    let form_height = rows + 4; // borders + instruction banner + button row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(form_height),
                Constraint::Min(3),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    draw_form(chunks[0], f, state);
    draw_console(chunks[1], f, state);
    draw_status(chunks[2], f, state);

    match &state.overlay {
        Overlay::None => {}
        Overlay::Help => help::draw_help(area, f),
        Overlay::Select { highlighted } => {
            draw_select_popup(area, f, &state.harness.options, *highlighted)
        }
        Overlay::Picker(p) => picker::draw(area, f, p),
    }
}

fn draw_form(area: Rect, f: &mut Frame, state: &UiState) {
    let form = &state.harness.form;
    let no_overlay = matches!(state.overlay, Overlay::None);
    let label_w = form
        .fields()
        .iter()
        .map(|fl| fl.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::with_capacity(form.rows() + 2);
    lines.push(Line::from(Span::styled(
        format!(" {}", form.instructions()),
        Style::default().fg(Color::Gray),
    )));

    for (i, field) in form.fields().iter().enumerate() {
        let shown = if field.secret {
            "\u{2022}".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let focused = no_overlay && state.focus == Focus::Field(i);
        let value_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>w$} ", field.label, w = label_w),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(shown, value_style),
        ]));
    }

    let mut spans = vec![Span::raw(" ")];
    for (b, name) in BUTTONS.iter().enumerate() {
        let focused = no_overlay && state.focus == Focus::Button(b);
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[ {name} ]"), style));
        spans.push(Span::raw(" "));
    }
    if !state.harness.options.is_empty() {
        let focused = no_overlay && state.focus == Focus::Select;
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let selected = state.harness.options.selected().unwrap_or("");
        spans.push(Span::styled(format!("[{selected} \u{25be}]"), style));
    }
    lines.push(Line::from(spans));

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(state.harness.title.clone()),
    );
    f.render_widget(p, area);

    // hardware cursor inside the focused input
    if let (Focus::Field(i), true) = (state.focus, no_overlay) {
        let len = form.field(i).chars().count();
        let cursor = state.cursors.get(i).copied().unwrap_or(0).min(len);
        let x = area.x + label_w as u16 + 3 + cursor as u16;
        let y = area.y + 2 + i as u16;
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}

fn draw_console(area: Rect, f: &mut Frame, state: &mut UiState) {
    let viewport = area.height.saturating_sub(2) as usize;
    state.console_height = area.height.saturating_sub(2);

    let total = state.harness.console.text().lines().count();
    let max_scroll = total.saturating_sub(viewport);
    if state.harness.console.revision() != state.seen_revision {
        // fresh output re-tails the view
        state.seen_revision = state.harness.console.revision();
        state.follow_tail = true;
    }
    if state.follow_tail {
        state.console_scroll = max_scroll;
    } else {
        state.console_scroll = state.console_scroll.min(max_scroll);
        if state.console_scroll == max_scroll {
            state.follow_tail = true;
        }
    }

    let scroll = state.console_scroll.min(u16::MAX as usize) as u16;
    let p = Paragraph::new(state.harness.console.text())
        .block(Block::default().borders(Borders::ALL).title("Output"))
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

fn draw_status(area: Rect, f: &mut Frame, state: &UiState) {
    let line = Line::from(vec![
        Span::raw(state.harness.status.clone()),
        Span::styled("   (F1 help)", Style::default().fg(Color::Gray)),
    ]);
    let p = Paragraph::new(vec![line])
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(p, area);
}

fn draw_select_popup(
    area: Rect,
    f: &mut Frame,
    options: &SelectableOptions,
    highlighted: usize,
) {
    let inner_w = options
        .items()
        .iter()
        .map(|o| o.chars().count())
        .max()
        .unwrap_or(0)
        .max(8) as u16;
    let rect = centered_rect(inner_w + 4, options.len() as u16 + 2, area);
    f.render_widget(Clear, rect);

    let lines: Vec<Line> = options
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == highlighted {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {item}"), style))
        })
        .collect();
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Select"));
    f.render_widget(p, rect);
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
