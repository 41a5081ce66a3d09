use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};

use super::view::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Open,
    Save,
}

#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// In-terminal stand-in for a native file chooser: a directory listing
/// filtered to one extension, plus a filename entry line in save mode.
#[derive(Debug)]
pub struct PickerState {
    pub mode: PickerMode,
    pub dir: PathBuf,
    pub entries: Vec<DirEntry>,
    pub highlighted: usize,
    pub filename: String,
    pub editing_name: bool,
    pub filter: String,
    pub error: Option<String>,
}

pub enum PickerOutcome {
    Chosen(PathBuf),
    Cancelled,
}

impl PickerState {
    pub fn new(mode: PickerMode, filter: String, default_name: String) -> Self {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut picker = Self {
            mode,
            dir,
            entries: Vec::new(),
            highlighted: 0,
            filename: if mode == PickerMode::Save {
                default_name
            } else {
                String::new()
            },
            editing_name: mode == PickerMode::Save,
            filter,
            error: None,
        };
        picker.refresh();
        picker
    }

    pub fn refresh(&mut self) {
        match read_directory(&self.dir, &self.filter) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
        self.highlighted = 0;
    }

    fn enter_dir(&mut self, path: PathBuf) {
        self.dir = path;
        self.refresh();
    }

    fn parent_dir(&mut self) {
        if let Some(parent) = self.dir.parent() {
            self.dir = parent.to_path_buf();
            self.refresh();
        }
    }
}

/// Directories always show; files only when they match the extension
/// filter. Hidden entries are skipped.
fn read_directory(path: &Path, filter: &str) -> std::io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir && !filter.is_empty() && !name.ends_with(filter) {
            continue;
        }
        entries.push(DirEntry {
            path: entry.path(),
            name,
            is_dir,
        });
    }
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(entries)
}

/// Route a key to the picker. `Some` means the picker is finished.
pub fn handle_key(picker: &mut PickerState, key: KeyEvent) -> Option<PickerOutcome> {
    if key.code == KeyCode::Esc {
        return Some(PickerOutcome::Cancelled);
    }
    if picker.mode == PickerMode::Save && key.code == KeyCode::Tab {
        picker.editing_name = !picker.editing_name;
        return None;
    }
    if picker.editing_name {
        match key.code {
            KeyCode::Enter => {
                let trimmed = picker.filename.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let mut name = trimmed.to_string();
                if !picker.filter.is_empty() && !name.ends_with(&picker.filter) {
                    name.push_str(&picker.filter);
                }
                return Some(PickerOutcome::Chosen(picker.dir.join(name)));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                picker.filename.push(c);
            }
            KeyCode::Backspace => {
                picker.filename.pop();
            }
            _ => {}
        }
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            picker.highlighted = picker.highlighted.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if picker.highlighted + 1 < picker.entries.len() {
                picker.highlighted += 1;
            }
        }
        KeyCode::Left | KeyCode::Backspace => picker.parent_dir(),
        KeyCode::Enter | KeyCode::Right => {
            if let Some(entry) = picker.entries.get(picker.highlighted).cloned() {
                if entry.is_dir {
                    picker.enter_dir(entry.path);
                } else {
                    match picker.mode {
                        PickerMode::Open => return Some(PickerOutcome::Chosen(entry.path)),
                        PickerMode::Save => {
                            // adopt the highlighted file's name for overwrite
                            picker.filename = entry.name;
                            picker.editing_name = true;
                        }
                    }
                }
            }
        }
        _ => {}
    }
    None
}

pub fn draw(area: Rect, f: &mut Frame, picker: &PickerState) {
    let width = area.width.saturating_sub(8).clamp(24, 70);
    let height = area.height.saturating_sub(4).clamp(8, 22);
    let rect = centered_rect(width, height, area);
    f.render_widget(Clear, rect);

    let title = match picker.mode {
        PickerMode::Open => format!("Open File (*{})", picker.filter),
        PickerMode::Save => format!("Save As (*{})", picker.filter),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", picker.dir.display()),
        Style::default().fg(Color::Gray),
    ))];
    if let Some(err) = &picker.error {
        lines.push(Line::from(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let fixed = 2 // borders
        + 1 // directory line
        + picker.error.is_some() as u16
        + 1 // hint line
        + (picker.mode == PickerMode::Save) as u16;
    let list_height = height.saturating_sub(fixed).max(1) as usize;
    let start = picker
        .highlighted
        .saturating_sub(list_height.saturating_sub(1));
    for (i, entry) in picker
        .entries
        .iter()
        .enumerate()
        .skip(start)
        .take(list_height)
    {
        let marker = if entry.is_dir { "/" } else { "" };
        let style = if i == picker.highlighted && !picker.editing_name {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {}{}", entry.name, marker),
            style,
        )));
    }
    while picker.mode == PickerMode::Save
        && lines.len() < (height as usize).saturating_sub(4)
    {
        // pad so the filename line sits at the bottom
        lines.push(Line::from(""));
    }

    if picker.mode == PickerMode::Save {
        let style = if picker.editing_name {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(" Name: ", Style::default().fg(Color::Gray)),
            Span::styled(picker.filename.clone(), style),
        ]));
    }
    let hint = match picker.mode {
        PickerMode::Open => " Enter open  Backspace up  Esc cancel",
        PickerMode::Save => " Enter save  Tab list/name  Backspace up  Esc cancel",
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::Gray),
    )));

    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(p, rect);
}
