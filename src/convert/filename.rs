use crate::app_error::{AppResult, ServerError};

pub const DEFAULT_FILENAME: &str = "output.mp3";

const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// A trimmed filename that is safe both as a download name and as a single
/// path component below the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeFilename(String);

impl SafeFilename {
    pub fn new(raw: Option<&str>) -> AppResult<Self> {
        let trimmed = raw.map(trim_filename).unwrap_or_default();
        if trimmed.is_empty() {
            return Ok(SafeFilename::default());
        }
        if !is_single_component(trimmed) || is_reserved_name(trimmed) {
            return Err(ServerError::InvalidFilename {
                filename: String::from(trimmed),
            });
        }
        Ok(SafeFilename(String::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn content_disposition(&self) -> String {
        let mut quoted = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        format!("attachment; filename=\"{}\"", quoted)
    }
}

impl Default for SafeFilename {
    fn default() -> Self {
        SafeFilename(String::from(DEFAULT_FILENAME))
    }
}

// U+FEFF counts as whitespace for clients that send JS-trimmed names.
fn trim_filename(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn is_single_component(name: &str) -> bool {
    name != "."
        && name != ".."
        && !name.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

fn is_reserved_name(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name).trim_end();
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
}
