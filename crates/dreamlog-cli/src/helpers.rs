//! Input and parsing helper functions for the CLI.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};

use crate::errors::CliError;

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validate a `YYYY-MM-DD` date and return it in canonical form.
pub fn parse_date(value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value))
    })?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// Trim a required text field, rejecting empty values.
pub fn require_text(field: &str, value: &str) -> anyhow::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input(format!("{} cannot be empty", field)).into());
    }
    Ok(trimmed.to_string())
}

/// Read dream content from --content flag, stdin, or $EDITOR.
pub fn read_content(
    no_input: bool,
    content: Option<String>,
    editor_override: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = content {
        return require_text("--content", &value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        if buffer.trim().is_empty() {
            if no_input || editor_override.is_none() {
                return Err(CliError::invalid_input("No content provided on stdin").into());
            }
            return read_content_from_editor(editor_override);
        }
        return require_text("Content", &buffer);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires content from stdin").into());
    }

    read_content_from_editor(editor_override)
}

/// Open $EDITOR to compose dream content.
fn read_content_from_editor(editor_override: Option<&str>) -> anyhow::Result<String> {
    let editor = editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("EDITOR").ok())
        .ok_or_else(|| {
            CliError::invalid_input(
                "$EDITOR is not set; use --content or pipe content via stdin",
            )
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("dreamlog_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, "").map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    require_text("Content", &contents)
}
