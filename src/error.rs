use std::path::PathBuf;

/// Renders a column lookup result, using -1 for a column that was not found.
fn index_or_sentinel(index: &Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to open input file '{}'", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Required columns not found in header: name={}, start={}",
        index_or_sentinel(.name),
        index_or_sentinel(.start)
    )]
    ColumnNotFound {
        name: Option<usize>,
        start: Option<usize>,
    },

    #[error("Failed to create output file '{}'", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {attempted} bytes")]
    WriteError {
        attempted: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: field index {index} out of range, line has {fields} fields")]
    FieldIndexOutOfRange {
        line: usize,
        index: usize,
        fields: usize,
    },

    #[error("Failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} too long: {length} > {max_length}")]
    LineTooLong {
        line: usize,
        length: usize,
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_shows_sentinel() {
        let err = ConvertError::ColumnNotFound {
            name: None,
            start: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Required columns not found in header: name=-1, start=1"
        );
    }

    #[test]
    fn test_write_error_reports_attempted_bytes() {
        let err = ConvertError::WriteError {
            attempted: 17,
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.to_string(), "Failed to write 17 bytes");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }
}
