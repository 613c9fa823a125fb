use crate::utils::error::{NumlinesError, Result};
use crate::utils::validation;
use std::fs;

/// Reads the file at `path` and returns every line that parses as a signed
/// 32-bit integer, in file order.
///
/// Blank lines and lines that fail to parse are skipped. A file that yields
/// zero integers is an error, never an empty vector. An I/O failure on an
/// existing file is logged and reported the same way as an empty file, so the
/// caller cannot tell "unreadable" from "empty".
pub fn read_integers(path: Option<&str>) -> Result<Vec<i32>> {
    let path = validation::require_path(path)?;
    validation::validate_input_file(path)?;

    let values = match fs::read_to_string(path) {
        Ok(contents) => parse_lines(&contents),
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path, e);
            Vec::new()
        }
    };

    if values.is_empty() {
        return Err(NumlinesError::EmptyFile);
    }

    tracing::debug!("parsed {} integers from {}", values.len(), path);
    Ok(values)
}

fn parse_lines(contents: &str) -> Vec<i32> {
    contents
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<i32>().ok()
            }
        })
        .collect()
}
