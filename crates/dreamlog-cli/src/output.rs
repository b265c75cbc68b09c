//! Output formatting helpers for the CLI.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{ContentArrangement, Table};

use dreamlog_core::Dream;

use crate::errors::CliError;

const TITLE_MAX: usize = 60;

/// Output format for the list command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<OutputFormat> {
    match value {
        None | Some("table") => Ok(OutputFormat::Table),
        Some("plain") => Ok(OutputFormat::Plain),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y").ok())
}

/// Sort dreams newest first.
///
/// Dates that parse are compared as dates and come before dates that do
/// not; unparseable dates are compared as raw strings in reverse.
pub fn sort_newest_first(dreams: &mut [Dream]) {
    dreams.sort_by(|a, b| {
        let by_date = match (parse_display_date(&a.date), parse_display_date(&b.date)) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.date.cmp(&a.date),
        };
        by_date.then_with(|| a.title.cmp(&b.title))
    });
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Render a dream list as a bordered table.
pub fn dream_table(dreams: &[Dream]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Title", "ID"]);
    for dream in dreams {
        table.add_row(vec![
            dream.date.clone(),
            truncate(&dream.title, TITLE_MAX),
            dream.id.clone(),
        ]);
    }
    table.to_string()
}

/// Render a dream list as tab-separated lines (id, date, title).
pub fn dream_lines(dreams: &[Dream]) -> String {
    dreams
        .iter()
        .map(|dream| format!("{}\t{}\t{}", dream.id, dream.date, dream.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a single dream in human-readable format.
pub fn print_dream(dream: &Dream, quiet: bool) {
    if !quiet {
        println!("{}", dream.title);
        println!("Date: {}", dream.date);
        println!("ID: {}", dream.id);
        println!();
    }
    println!("{}", dream.content);
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(id: &str, date: &str) -> Dream {
        Dream {
            id: id.to_string(),
            date: date.to_string(),
            title: format!("Dream {}", id),
            content: String::new(),
        }
    }

    fn ids(dreams: &[Dream]) -> Vec<&str> {
        dreams.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_sort_newest_first_by_parsed_date() {
        let mut dreams = vec![
            dream("a", "2024-01-05"),
            dream("b", "2024-03-01"),
            dream("c", "1/20/2024"),
        ];
        sort_newest_first(&mut dreams);
        assert_eq!(ids(&dreams), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_falls_back_to_reverse_string_order() {
        let mut dreams = vec![dream("a", "last spring"), dream("b", "yesterday")];
        sort_newest_first(&mut dreams);
        assert_eq!(ids(&dreams), vec!["b", "a"]);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), OutputFormat::Table);
        assert_eq!(parse_output_format(Some("plain")).unwrap(), OutputFormat::Plain);
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_truncate_long_titles() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_dream_lines_are_tab_separated() {
        let lines = dream_lines(&[dream("a", "2024-01-05")]);
        assert_eq!(lines, "a\t2024-01-05\tDream a");
    }
}
