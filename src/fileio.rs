use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEP: &str = "\n";

/// Read a whole UTF-8 file split into lines (line terminators stripped).
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Write `text` one line at a time, each terminated by the platform line
/// separator. Existing content is overwritten.
pub fn write_lines(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push_str(LINE_SEP);
    }
    std::fs::write(path, out).with_context(|| format!("write {}", path.display()))
}

/// Export `text` to `<title>.txt` in the current working directory and
/// return the full path.
pub fn export_text(title: &str, text: &str) -> Result<PathBuf> {
    let dir = std::env::current_dir().context("get current directory")?;
    export_text_in(&dir, title, text)
}

pub fn export_text_in(dir: &Path, title: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{title}.txt"));
    write_lines(text, &path)?;
    Ok(path)
}

/// Ask the host environment to open a file with its default handler.
/// Best effort; callers normally ignore the result.
pub fn reveal(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = std::process::Command::new("open");
        c.arg(path);
        c
    };
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(path);
        c
    };
    cmd.stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .with_context(|| format!("open {} with host handler", path.display()))?;
    Ok(())
}

/// Break `text` into segments of at least `max` characters: starting at
/// each previous break plus `max`, scan forward to the next space and turn
/// it into a newline. Words are never split; a stretch with no space to
/// the right ends the pass.
pub fn insert_line_breaks(text: &str, max: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut i = 0usize;
    loop {
        let from = match i.checked_add(max) {
            Some(f) if f < chars.len() => f,
            _ => break,
        };
        match chars[from..].iter().position(|&c| c == ' ') {
            Some(off) => {
                let at = from + off;
                chars[at] = '\n';
                i = at;
            }
            None => break,
        }
    }
    chars.into_iter().collect()
}
