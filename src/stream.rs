// src/stream.rs
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::header::{locate_columns, ColumnIndices};
use crate::transform::transform_line;

/// Runtime statistics
#[derive(Debug, Default, Clone)]
pub struct ConversionStats {
    pub lines_read: usize, // Including the header
    pub lines_written: usize,
    pub bytes_written: usize,
    pub processing_time: Duration,
}

/// Streams a tab-delimited export through the header lookup and line transform
pub struct LineConverter {
    config: ConverterConfig,
    line_number: usize,
    line_buf: Vec<u8>,
    out_buf: Vec<u8>,
}

impl LineConverter {
    pub fn new(config: ConverterConfig) -> Self {
        LineConverter {
            config,
            line_number: 0,
            line_buf: Vec::new(),
            out_buf: Vec::new(),
        }
    }

    /// Read the header line and resolve the two columns.
    ///
    /// An empty input has an empty header, so both columns come back missing.
    pub fn read_header<R: BufRead>(&mut self, input: &mut R) -> Result<ColumnIndices, ConvertError> {
        self.line_number = 0;
        self.next_line(input)?;
        let columns = locate_columns(&self.line_buf, &self.config)?;

        if self.config.debug {
            eprintln!(
                "episode-list: columns name={}, start={}",
                columns.name, columns.start
            );
        }

        Ok(columns)
    }

    /// Convert every remaining line of `input`, writing each result as soon as
    /// it is produced.
    pub fn process_records<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        columns: ColumnIndices,
    ) -> Result<ConversionStats, ConvertError> {
        let start_time = Instant::now();
        let mut stats = ConversionStats {
            lines_read: self.line_number,
            ..Default::default()
        };

        while self.next_line(input)? {
            stats.lines_read += 1;

            transform_line(
                &self.line_buf,
                self.line_number,
                columns,
                &mut self.out_buf,
            )?;

            output
                .write_all(&self.out_buf)
                .map_err(|source| ConvertError::WriteError {
                    attempted: self.out_buf.len(),
                    source,
                })?;
            output
                .write_all(b"\n")
                .map_err(|source| ConvertError::WriteError {
                    attempted: 1,
                    source,
                })?;

            stats.lines_written += 1;
            stats.bytes_written += self.out_buf.len() + 1;
        }

        stats.processing_time = start_time.elapsed();
        Ok(stats)
    }

    /// Header lookup followed by the record loop, for in-memory or piped input.
    pub fn process_stream<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<ConversionStats, ConvertError> {
        let columns = self.read_header(&mut input)?;
        self.process_records(&mut input, output, columns)
    }

    /// Load the next line into `line_buf` without its terminator.
    ///
    /// Returns false at end of input.
    fn next_line<R: BufRead>(&mut self, input: &mut R) -> Result<bool, ConvertError> {
        self.line_buf.clear();
        let line = self.line_number + 1;

        let read = input
            .read_until(b'\n', &mut self.line_buf)
            .map_err(|source| ConvertError::Read { line, source })?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number = line;

        if self.line_buf.last() == Some(&b'\n') {
            self.line_buf.pop();
        }
        // CRLF exports, including a last line with no newline after its \r
        if self.line_buf.last() == Some(&b'\r') {
            self.line_buf.pop();
        }

        if self.line_buf.len() > self.config.max_line_length {
            return Err(ConvertError::LineTooLong {
                line,
                length: self.line_buf.len(),
                max_length: self.config.max_line_length,
            });
        }

        Ok(true)
    }
}
