use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Construction parameters supplied by the embedding application: the form
/// prompts, the window/export title, the dropdown contents and the file
/// extension filter used by the Open/Save pickers.
///
/// Deserializable so a definition can be loaded from a JSON file with
/// `--app`; fields not present fall back to the template defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppDef {
    /// Window title; also drives the Print export filename (`<title>.txt`).
    pub title: String,
    /// Instruction banner above the form. `None` derives the stock banner
    /// when the form has fields and an empty one otherwise.
    pub instructions: Option<String>,
    /// One field per prompt, in order. A `"p-"` prefix marks secret entry.
    pub prompts: Vec<String>,
    /// Initial dropdown options.
    pub options: Vec<String>,
    /// Select the first dropdown option at startup.
    pub select_first: bool,
    /// Extension filter for the Open/Save pickers.
    pub extension_filter: String,
}

impl Default for AppDef {
    fn default() -> Self {
        Self {
            title: "App".to_string(),
            instructions: None,
            prompts: Vec::new(),
            options: Vec::new(),
            select_first: true,
            extension_filter: ".txt".to_string(),
        }
    }
}

impl AppDef {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read app definition {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse app definition {}", path.display()))
    }
}
