//! Report rendering for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::commands::{Report, Section};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Render `report` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report_json(report)),
        OutputFormat::Table => Ok(render_text(report)),
    }
}

/// A single-section report is its data; sections of a larger one are keyed
/// by title.
fn report_json(report: &Report) -> Value {
    match report.sections.as_slice() {
        [only] => only.data.clone(),
        sections => sections
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let key = s.title.clone().unwrap_or_else(|| format!("section_{i}"));
                (key, s.data.clone())
            })
            .collect::<Map<String, Value>>()
            .into(),
    }
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for note in &report.notes {
        let _ = writeln!(out, "{note}");
    }
    if !report.notes.is_empty() {
        out.push('\n');
    }

    let blocks: Vec<String> = report.sections.iter().map(render_section).collect();
    out.push_str(&blocks.join("\n\n"));
    out
}

fn render_section(section: &Section) -> String {
    let body = match &section.data {
        Value::Array(items) if items.is_empty() => section.empty.clone(),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            object_table(items, &section.labels)
        }
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join("\n"),
        Value::Object(fields) => field_table(fields, &section.labels),
        other => cell_text(other),
    };

    match &section.title {
        Some(title) => format!("{title}\n{}\n{body}", "=".repeat(title.chars().count())),
        None => body,
    }
}

fn header_for(key: &str, labels: &[(String, String)]) -> String {
    labels
        .iter()
        .find(|(k, _)| k == key)
        .map_or_else(|| key.to_string(), |(_, label)| label.clone())
}

/// One row per object, with columns taken from the first row.
fn object_table(items: &[Value], labels: &[(String, String)]) -> String {
    let keys: Vec<&String> = items
        .first()
        .and_then(Value::as_object)
        .map(|first| first.keys().collect())
        .unwrap_or_default();

    let headers: Vec<String> = keys.iter().map(|k| header_for(k, labels)).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .filter_map(Value::as_object)
        .map(|row| {
            keys.iter()
                .map(|k| row.get(k.as_str()).map_or_else(String::new, cell_text))
                .collect()
        })
        .collect();

    grid(&headers, &rows)
}

/// Two columns: field name and value.
fn field_table(fields: &Map<String, Value>, labels: &[(String, String)]) -> String {
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|(k, v)| vec![header_for(k, labels), cell_text(v)])
        .collect();
    grid(&["Field".to_string(), "Value".to_string()], &rows)
}

fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![line(headers), line(&separator)];
    lines.extend(rows.iter().map(|row| line(row)));
    lines.join("\n")
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
