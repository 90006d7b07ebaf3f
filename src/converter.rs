// src/converter.rs - file-to-file conversion
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::stream::{ConversionStats, LineConverter};

/// Outcome of a successful file conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ConversionStats,
}

/// Convert `input` into `output`.
///
/// The output file is only created once the header has resolved both
/// columns. A failure while streaming leaves whatever was already written
/// on disk.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConverterConfig,
) -> Result<ConversionReport, ConvertError> {
    let file = File::open(input).map_err(|source| ConvertError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::with_capacity(config.buffer_size, file);

    if config.debug {
        eprintln!("episode-list: reading from {}", input.display());
    }

    let mut converter = LineConverter::new(config.clone());
    let columns = converter.read_header(&mut reader)?;

    let file = File::create(output).map_err(|source| ConvertError::OutputOpen {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::with_capacity(config.buffer_size, file);

    let stats = converter.process_records(&mut reader, &mut writer, columns)?;

    // Buffered bytes that fail to reach the file count as a failed write
    let pending = writer.buffer().len();
    writer
        .flush()
        .map_err(|source| ConvertError::WriteError {
            attempted: pending,
            source,
        })?;

    if config.debug {
        eprintln!("episode-list: wrote {}", output.display());
    }

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("episodes.tsv");
        let output = dir.path().join("episodes.txt");
        fs::write(&input, "Id\tName\tStart\n1\tPilot\t00:00:10.250\n2\tFinale\t01:02:03\n").unwrap();

        let report = convert_file(&input, &output, &ConverterConfig::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "00:00:10\tPilot\n01:02:03\tFinale\n"
        );
        assert_eq!(report.stats.lines_read, 3);
        assert_eq!(report.stats.lines_written, 2);
        assert_eq!(report.output, output);
    }

    #[test]
    fn test_missing_columns_create_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("episodes.tsv");
        let output = dir.path().join("episodes.txt");
        fs::write(&input, "Title\tBegin\nPilot\t00:00:10\n").unwrap();

        let err = convert_file(&input, &output, &ConverterConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::ColumnNotFound { name: None, start: None }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.tsv");
        let output = dir.path().join("out.txt");

        let err = convert_file(&input, &output, &ConverterConfig::default()).unwrap_err();

        assert!(matches!(err, ConvertError::InputOpen { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("episodes.tsv");
        let output = dir.path().join("no_such_dir").join("out.txt");
        fs::write(&input, "Name\tStart\nA\t1.0\n").unwrap();

        let err = convert_file(&input, &output, &ConverterConfig::default()).unwrap_err();

        assert!(matches!(err, ConvertError::OutputOpen { .. }));
    }
}
