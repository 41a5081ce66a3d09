/// Prompts starting with this marker produce a secret-entry field; the
/// marker is stripped from the displayed label.
pub const SECRET_PREFIX: &str = "p-";

/// A single labeled entry in the data-entry form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub prompt: String,
    pub secret: bool,
    pub label: String,
    pub value: String,
}

/// The data-entry form: an ordered list of fields built once from a prompt
/// list, plus the instruction banner shown above them.
///
/// Fields are addressed by their 0-based row index. An out-of-range index
/// reads as an empty string and writes are dropped, so embedding code can
/// probe fields without guarding every call.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    fields: Vec<FormField>,
    instructions: String,
}

impl FormModel {
    pub fn new<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<FormField> = prompts
            .into_iter()
            .map(|p| {
                let prompt = p.into();
                let secret = prompt.starts_with(SECRET_PREFIX);
                let shown = if secret {
                    &prompt[SECRET_PREFIX.len()..]
                } else {
                    prompt.as_str()
                };
                FormField {
                    label: format!("{shown}:"),
                    secret,
                    prompt,
                    value: String::new(),
                }
            })
            .collect();
        let instructions = if fields.is_empty() {
            String::new()
        } else {
            "Enter the following information".to_string()
        };
        Self {
            fields,
            instructions,
        }
    }

    pub fn rows(&self) -> usize {
        self.fields.len()
    }

    /// Layout row for the button strip; row 0 is the instruction banner and
    /// rows 1..=rows() hold the fields.
    pub fn button_row(&self) -> usize {
        self.rows() + 1
    }

    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.fields.len()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value entered in the given field, or `""` for an invalid index.
    pub fn field(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn set_field(&mut self, index: usize, value: impl Into<String>) {
        if let Some(f) = self.fields.get_mut(index) {
            f.value = value.into();
        }
    }

    /// Mutable access to a field's value, for in-place editing by the view.
    pub fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index).map(|f| &mut f.value)
    }

    pub fn clear_field(&mut self, index: usize) {
        if let Some(f) = self.fields.get_mut(index) {
            f.value.clear();
        }
    }

    /// Clear every field's value.
    pub fn clear_all(&mut self) {
        for f in &mut self.fields {
            f.value.clear();
        }
    }

    pub fn label(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.label.clone())
            .unwrap_or_default()
    }

    pub fn set_label(&mut self, index: usize, value: impl Into<String>) {
        if let Some(f) = self.fields.get_mut(index) {
            f.label = value.into();
        }
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, value: impl Into<String>) {
        self.instructions = value.into();
    }
}
