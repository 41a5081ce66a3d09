use crate::app::AppDef;
use crate::console::OutputBuffer;
use crate::fileio;
use crate::form::FormModel;
use crate::input::{self, PromptSource};
use anyhow::Result;
use std::path::PathBuf;

/// Ordered options backing the single-choice dropdown.
#[derive(Debug, Clone, Default)]
pub struct SelectableOptions {
    items: Vec<String>,
    selected: Option<usize>,
}

impl SelectableOptions {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(_) if self.items.is_empty() => None,
            Some(s) if s > index => Some(s - 1),
            Some(s) if s == index => Some(s.min(self.items.len() - 1)),
            other => other,
        };
        Some(removed)
    }

    pub fn select_first(&mut self) {
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }
}

/// User-triggered actions the harness understands. Open/Save carry the
/// path already chosen by the picker; a cancelled picker dispatches
/// nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run,
    Clear,
    Print,
    OpenFile(PathBuf),
    SaveFile(PathBuf),
    SelectChanged(String),
}

/// Follow-up work a dispatch leaves to the view layer.
#[derive(Debug, Default)]
pub struct Dispatched {
    /// Path written by Print, still to be copied to the clipboard and
    /// revealed via the host opener.
    pub exported: Option<PathBuf>,
}

/// Everything a run handler may touch: the form, the console, the status
/// line and the modal prompt source.
pub struct AppCtx<'a> {
    pub form: &'a mut FormModel,
    pub console: &'a mut OutputBuffer,
    pub status: &'a mut String,
    input: &'a mut dyn PromptSource,
}

impl AppCtx<'_> {
    /// Blocking text prompt; empty string when dismissed.
    pub fn input(&mut self, prompt: &str) -> String {
        self.input.prompt_text(prompt)
    }

    /// Integer prompt; `-1` when dismissed or unparsable.
    pub fn input_int(&mut self, prompt: &str) -> i32 {
        input::prompt_int(self.input, prompt)
    }

    /// Float prompt; `-1` when dismissed or unparsable.
    pub fn input_double(&mut self, prompt: &str) -> f64 {
        input::prompt_double(self.input, prompt)
    }

    /// Character prompt; `'.'` when dismissed.
    pub fn input_char(&mut self, prompt: &str) -> char {
        input::prompt_char(self.input, prompt)
    }

    pub fn show_message(&mut self, message: &str) {
        self.input.show_message(message);
    }

    /// Read a file into lines. Failures are shown as a message and yield
    /// an empty list instead of an error.
    pub fn lines_from_file(&mut self, path: impl AsRef<std::path::Path>) -> Vec<String> {
        match fileio::read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                self.input.show_message(&format!("{e:#}"));
                Vec::new()
            }
        }
    }

    /// Write `text` to `path`, one line per line. Failures are shown as a
    /// message, not returned.
    pub fn write_file(&mut self, text: &str, path: impl AsRef<std::path::Path>) {
        if let Err(e) = fileio::write_lines(text, path) {
            self.input.show_message(&format!("{e:#}"));
        }
    }
}

type RunFn = dyn FnMut(&mut AppCtx<'_>) -> Result<()>;
type SelectFn = dyn FnMut(&mut AppCtx<'_>, &str) -> Result<()>;

/// Callbacks supplied by the embedding application. The defaults match the
/// stock template: Run does nothing, a dropdown selection echoes to the
/// console.
pub struct Handlers {
    run: Box<RunFn>,
    select_changed: Box<SelectFn>,
}

impl Handlers {
    pub fn new() -> Self {
        Self {
            run: Box::new(|_| Ok(())),
            select_changed: Box::new(|ctx, value| {
                ctx.console.append_line(value);
                Ok(())
            }),
        }
    }

    pub fn on_run(
        mut self,
        f: impl FnMut(&mut AppCtx<'_>) -> Result<()> + 'static,
    ) -> Self {
        self.run = Box::new(f);
        self
    }

    pub fn on_select(
        mut self,
        f: impl FnMut(&mut AppCtx<'_>, &str) -> Result<()> + 'static,
    ) -> Self {
        self.select_changed = Box::new(f);
        self
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::new()
    }
}

/// The harness instance: owns the form, the console, the dropdown options
/// and the status line. The view layer renders from it and feeds actions
/// back through [`dispatch`](Harness::dispatch).
pub struct Harness {
    pub title: String,
    pub form: FormModel,
    pub console: OutputBuffer,
    pub options: SelectableOptions,
    pub status: String,
    pub extension_filter: String,
    pub last_opened: Option<PathBuf>,
}

impl Harness {
    pub fn new(def: &AppDef) -> Self {
        let mut form = FormModel::new(def.prompts.iter().cloned());
        if let Some(instructions) = &def.instructions {
            form.set_instructions(instructions.clone());
        }
        let mut options = SelectableOptions::new(def.options.clone());
        if def.select_first {
            options.select_first();
        }
        Self {
            title: def.title.clone(),
            form,
            console: OutputBuffer::new(),
            options,
            status: "Status".to_string(),
            extension_filter: def.extension_filter.clone(),
            last_opened: None,
        }
    }

    /// Dispatch a user action. No action is allowed to take the harness
    /// down: handler failures land in the console, file failures in the
    /// status line or a message dialog.
    pub fn dispatch(
        &mut self,
        action: Action,
        input: &mut dyn PromptSource,
        handlers: &mut Handlers,
    ) -> Dispatched {
        match action {
            Action::Run => {
                let mut ctx = AppCtx {
                    form: &mut self.form,
                    console: &mut self.console,
                    status: &mut self.status,
                    input,
                };
                if let Err(e) = (handlers.run)(&mut ctx) {
                    self.console.append_line(format!("{e:#}"));
                }
            }
            Action::Clear => self.console.clear(),
            Action::Print => {
                match fileio::export_text(&self.title, self.console.text()) {
                    Ok(path) => {
                        self.status = format!("Exported: {}", path.display());
                        return Dispatched {
                            exported: Some(path),
                        };
                    }
                    Err(e) => self.status = format!("Export failed: {e:#}"),
                }
            }
            Action::OpenFile(path) => match fileio::read_lines(&path) {
                Ok(lines) => {
                    let n = lines.len();
                    for line in &lines {
                        self.console.append_line(line);
                    }
                    let abs = std::fs::canonicalize(&path).unwrap_or(path);
                    self.status = format!("{} ({} lines read)", abs.display(), n);
                    self.last_opened = Some(abs);
                }
                Err(e) => input.show_message(&format!("{e:#}")),
            },
            Action::SaveFile(path) => {
                match fileio::write_lines(self.console.text(), &path) {
                    Ok(()) => self.status = format!("Saved: {}", path.display()),
                    Err(e) => self.status = format!("Save failed: {e:#}"),
                }
            }
            Action::SelectChanged(value) => {
                // blank selections are ignored
                if !value.trim().is_empty() {
                    let mut ctx = AppCtx {
                        form: &mut self.form,
                        console: &mut self.console,
                        status: &mut self.status,
                        input,
                    };
                    if let Err(e) = (handlers.select_changed)(&mut ctx, &value) {
                        self.console.append_line(format!("{e:#}"));
                    }
                }
            }
        }
        Dispatched::default()
    }
}
