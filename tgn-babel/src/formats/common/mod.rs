//! Common utilities for the typesetting backends
//!
//! Option parsing for the flat `key → value` option maps the registry hands to backend
//! factories, and table-driven character escaping.

use crate::error::{Result, TgnError};
use crate::registry::BackendOptions;

/// Replace every character found in `table` by its substitute.
pub fn escape_with(text: &str, table: &[(char, &str)]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => escaped.push_str(replacement),
            None => escaped.push(c),
        }
    }
    escaped
}

fn invalid(typesetter: &str, key: &str, value: &str) -> TgnError {
    TgnError::InvalidOption {
        typesetter: typesetter.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Read a positive integer option.
pub fn usize_option(
    options: &BackendOptions,
    typesetter: &str,
    key: &str,
) -> Result<Option<usize>> {
    options
        .get(key)
        .map(|value| match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(invalid(typesetter, key, value)),
        })
        .transpose()
}

/// Read a boolean option (`true`/`false`, `yes`/`no`, `1`/`0`).
pub fn bool_option(options: &BackendOptions, typesetter: &str, key: &str) -> Result<Option<bool>> {
    options
        .get(key)
        .map(|value| match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(invalid(typesetter, key, value)),
        })
        .transpose()
}

/// Read a free-form string option; empty values count as absent.
pub fn string_option<'o>(options: &'o BackendOptions, key: &str) -> Option<&'o str> {
    options
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Write `text` line by line with trailing whitespace removed.
pub fn write_lines(out: &mut dyn std::io::Write, text: &str) -> std::io::Result<()> {
    for line in text.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
