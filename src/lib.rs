// src/lib.rs
pub mod config;
pub mod converter;
pub mod error;
pub mod header;
pub mod output_path;
pub mod stream;
pub mod transform;

pub use error::*;

pub use config::ConverterConfig;
pub use converter::{convert_file, ConversionReport};
pub use header::{find_column, locate_columns, split_fields, ColumnIndices, DELIMITER};
pub use output_path::{default_output_path, resolve_output_path};
pub use stream::{ConversionStats, LineConverter};
pub use transform::{transform_line, truncate_at_dot};
