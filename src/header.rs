// src/header.rs - locating the name and start columns from the header row

use crate::config::ConverterConfig;
use crate::error::ConvertError;

/// Positions of the two columns every data line is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub start: usize,
}

/// Field separator for both the header and data lines
pub const DELIMITER: u8 = b'\t';

/// Split a raw line on every tab.
///
/// No quoting rules apply. An empty line yields a single empty field.
pub fn split_fields(line: &[u8]) -> Vec<&[u8]> {
    line.split(|&b| b == DELIMITER).collect()
}

/// Index of the first field whose text contains `needle` (case-sensitive).
pub fn find_column(fields: &[&[u8]], needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    fields
        .iter()
        .position(|field| contains_subslice(field, needle))
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

/// Resolve both columns from the header line, failing if either is missing.
pub fn locate_columns(header: &[u8], config: &ConverterConfig) -> Result<ColumnIndices, ConvertError> {
    let fields = split_fields(header);
    let name = find_column(&fields, &config.name_column);
    let start = find_column(&fields, &config.start_column);

    match (name, start) {
        (Some(name), Some(start)) => Ok(ColumnIndices { name, start }),
        _ => Err(ConvertError::ColumnNotFound { name, start }),
    }
}
