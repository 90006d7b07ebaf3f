// src/transform.rs - turning one data line into an output line

use crate::error::ConvertError;
use crate::header::{split_fields, ColumnIndices, DELIMITER};

/// Truncate a start timestamp at its first `.`, dropping fractional seconds.
///
/// A field without a `.` is returned whole.
pub fn truncate_at_dot(field: &[u8]) -> &[u8] {
    match field.iter().position(|&b| b == b'.') {
        Some(pos) => &field[..pos],
        None => field,
    }
}

/// Build `<truncated start><TAB><name>` for one data line into `out`.
///
/// `out` is cleared first and never gets a trailing newline; the stream
/// driver writes the separator itself. `line_number` is only used for error
/// reporting.
pub fn transform_line(
    line: &[u8],
    line_number: usize,
    columns: ColumnIndices,
    out: &mut Vec<u8>,
) -> Result<(), ConvertError> {
    let fields = split_fields(line);

    let field_at = |index: usize| {
        fields
            .get(index)
            .copied()
            .ok_or_else(|| ConvertError::FieldIndexOutOfRange {
                line: line_number,
                index,
                fields: fields.len(),
            })
    };

    let name = field_at(columns.name)?;
    let start = field_at(columns.start)?;

    out.clear();
    out.extend_from_slice(truncate_at_dot(start));
    out.push(DELIMITER);
    out.extend_from_slice(name);
    Ok(())
}
