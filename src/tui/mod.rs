mod export;
mod help;
mod picker;
mod prompt;
mod state;
mod view;

use crate::fileio;
use crate::harness::{Action, Handlers, Harness};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    path::Path,
    time::Duration,
};

use picker::{PickerMode, PickerOutcome, PickerState};
use state::{Focus, Overlay, UiState};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(harness: Harness, handlers: Handlers) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle(harness.title.clone())
    )
    .ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut ui = UiState::new(harness, handlers);
    let res = event_loop(&mut terminal, &mut ui);

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn event_loop(terminal: &mut Term, ui: &mut UiState) -> Result<()> {
    loop {
        terminal
            .draw(|f| view::draw(f.area(), f, ui))
            .context("draw frame")?;
        if ui.should_quit {
            return Ok(());
        }
        // Short poll keeps the loop responsive to output from dispatched
        // actions without busy-spinning.
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(terminal, ui, key);
            }
        }
    }
}

fn handle_key(terminal: &mut Term, ui: &mut UiState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        ui.should_quit = true;
        return;
    }
    if matches!(ui.overlay, Overlay::Help) {
        ui.overlay = Overlay::None;
        return;
    }
    if matches!(ui.overlay, Overlay::Select { .. }) {
        handle_select_key(terminal, ui, key);
        return;
    }
    if matches!(ui.overlay, Overlay::Picker(_)) {
        handle_picker_key(terminal, ui, key);
        return;
    }
    handle_main_key(terminal, ui, key);
}

fn handle_main_key(terminal: &mut Term, ui: &mut UiState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('r') => return run_action(terminal, ui, Action::Run),
            KeyCode::Char('l') => return run_action(terminal, ui, Action::Clear),
            KeyCode::Char('p') => return run_action(terminal, ui, Action::Print),
            KeyCode::Char('o') => return open_picker(ui, PickerMode::Open),
            KeyCode::Char('s') => return open_picker(ui, PickerMode::Save),
            _ => {}
        }
    }
    let rows = ui.harness.form.rows();
    match key.code {
        KeyCode::Esc => ui.should_quit = true,
        KeyCode::F(1) => ui.overlay = Overlay::Help,
        KeyCode::Tab | KeyCode::Down => ui.focus = ui.focus.next(rows),
        KeyCode::BackTab | KeyCode::Up => ui.focus = ui.focus.prev(rows),
        KeyCode::PageUp => {
            let page = (ui.console_height.max(2) - 1) as usize;
            ui.follow_tail = false;
            ui.console_scroll = ui.console_scroll.saturating_sub(page);
        }
        KeyCode::PageDown => {
            let page = (ui.console_height.max(2) - 1) as usize;
            // clamped (and possibly re-tailed) at draw time
            ui.console_scroll = ui.console_scroll.saturating_add(page);
        }
        KeyCode::Enter => activate(terminal, ui),
        _ => field_edit(ui, key),
    }
}

fn activate(terminal: &mut Term, ui: &mut UiState) {
    let rows = ui.harness.form.rows();
    match ui.focus {
        // Enter advances through the form like a data-entry screen
        Focus::Field(_) => ui.focus = ui.focus.next(rows),
        Focus::Button(0) => run_action(terminal, ui, Action::Run),
        Focus::Button(1) => run_action(terminal, ui, Action::Clear),
        Focus::Button(2) => run_action(terminal, ui, Action::Print),
        Focus::Button(3) => open_picker(ui, PickerMode::Open),
        Focus::Button(4) => open_picker(ui, PickerMode::Save),
        Focus::Button(_) => {}
        Focus::Select => {
            if !ui.harness.options.is_empty() {
                let highlighted = ui.harness.options.selected_index().unwrap_or(0);
                ui.overlay = Overlay::Select { highlighted };
            }
        }
    }
}

fn handle_select_key(terminal: &mut Term, ui: &mut UiState, key: KeyEvent) {
    let len = ui.harness.options.len();
    match key.code {
        KeyCode::Esc => ui.overlay = Overlay::None,
        KeyCode::Up | KeyCode::Char('k') => {
            if let Overlay::Select { highlighted } = &mut ui.overlay {
                *highlighted = highlighted.saturating_sub(1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Overlay::Select { highlighted } = &mut ui.overlay {
                *highlighted = (*highlighted + 1).min(len.saturating_sub(1));
            }
        }
        KeyCode::Enter => {
            let highlighted = match &ui.overlay {
                Overlay::Select { highlighted } => *highlighted,
                _ => 0,
            };
            ui.overlay = Overlay::None;
            if let Some(value) = ui.harness.options.items().get(highlighted).cloned() {
                ui.harness.options.select(highlighted);
                run_action(terminal, ui, Action::SelectChanged(value));
            }
        }
        _ => {}
    }
}

fn handle_picker_key(terminal: &mut Term, ui: &mut UiState, key: KeyEvent) {
    let outcome = match &mut ui.overlay {
        Overlay::Picker(p) => picker::handle_key(p, key).map(|o| (p.mode, o)),
        _ => return,
    };
    if let Some((mode, outcome)) = outcome {
        ui.overlay = Overlay::None;
        if let PickerOutcome::Chosen(path) = outcome {
            let action = match mode {
                PickerMode::Open => Action::OpenFile(path),
                PickerMode::Save => Action::SaveFile(path),
            };
            run_action(terminal, ui, action);
        }
    }
}

fn field_edit(ui: &mut UiState, key: KeyEvent) {
    let Focus::Field(i) = ui.focus else { return };
    let Some(value) = ui.harness.form.value_mut(i) else {
        return;
    };
    let Some(cursor) = ui.cursors.get_mut(i) else {
        return;
    };
    let len = value.chars().count();
    *cursor = (*cursor).min(len);
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            value.insert(byte_index(value, *cursor), c);
            *cursor += 1;
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
        }
        KeyCode::Delete => {
            if *cursor < len {
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(len),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = len,
        _ => {}
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Dispatch through the harness, with modal prompts drawn on this
/// terminal; all display mutation stays on this thread.
fn run_action(terminal: &mut Term, ui: &mut UiState, action: Action) {
    let mut prompts = prompt::TuiPrompt::new(terminal);
    let done = ui
        .harness
        .dispatch(action, &mut prompts, &mut ui.handlers);
    if let Some(path) = done.exported {
        finish_export(ui, &path);
    }
}

/// Second half of Print: clipboard copy plus a best-effort reveal via the
/// host opener.
fn finish_export(ui: &mut UiState, path: &Path) {
    match export::copy_to_clipboard(ui.harness.console.text()) {
        Ok(()) => {
            ui.harness.status =
                format!("Exported: {} (copied to clipboard)", path.display());
        }
        Err(e) => {
            ui.harness.status =
                format!("Exported: {} (clipboard copy failed: {e:#})", path.display());
        }
    }
    let _ = fileio::reveal(path);
}

fn open_picker(ui: &mut UiState, mode: PickerMode) {
    let filter = ui.harness.extension_filter.clone();
    let default_name = format!("{}{}", ui.harness.title, filter);
    ui.overlay = Overlay::Picker(PickerState::new(mode, filter, default_name));
}
