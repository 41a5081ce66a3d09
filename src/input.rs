use std::collections::VecDeque;

/// Source of modal user input.
///
/// The TUI implements this with a blocking dialog; tests and text mode use
/// [`ScriptedInput`].
pub trait PromptSource {
    /// Prompt for a line of text. Returns an empty string when the dialog
    /// is dismissed without input.
    fn prompt_text(&mut self, prompt: &str) -> String;

    /// Show an informational message and wait for acknowledgement.
    fn show_message(&mut self, _message: &str) {}
}

/// Canned prompt responses, consumed front to back. Once exhausted every
/// prompt reads as dismissed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    responses: VecDeque<String>,
    pub messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            messages: Vec::new(),
        }
    }
}

impl PromptSource for ScriptedInput {
    fn prompt_text(&mut self, _prompt: &str) -> String {
        self.responses.pop_front().unwrap_or_default()
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Integer prompt. Dismissal and unparsable input both collapse to `-1`;
/// callers that need to tell them apart should use `prompt_text` directly.
pub fn prompt_int(input: &mut dyn PromptSource, prompt: &str) -> i32 {
    input.prompt_text(prompt).parse().unwrap_or(-1)
}

/// Floating-point prompt with the same `-1` sentinel policy.
pub fn prompt_double(input: &mut dyn PromptSource, prompt: &str) -> f64 {
    input.prompt_text(prompt).parse().unwrap_or(-1.0)
}

/// Character prompt: the first character entered, or `'.'` when empty.
pub fn prompt_char(input: &mut dyn PromptSource, prompt: &str) -> char {
    input.prompt_text(prompt).chars().next().unwrap_or('.')
}
