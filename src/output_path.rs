// src/output_path.rs - naming the output file when none is given

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const OUTPUT_SUFFIX: &str = "_converted-";
pub const OUTPUT_EXTENSION: &str = "txt";

/// Output path next to `input`, stamped with `now`.
///
/// The base name is the input file name up to its first `.`, so
/// `show.2024.tsv` becomes `show_converted-<timestamp>.txt`.
pub fn default_output_path<Tz: TimeZone>(input: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut output_name = base_name(input);
    output_name.push(format!("{}{}.{}", OUTPUT_SUFFIX, timestamp, OUTPUT_EXTENSION));

    match input.parent() {
        Some(dir) => dir.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// File name of `input` up to its first `.`, keeping non-UTF-8 bytes as-is.
#[cfg(unix)]
fn base_name(input: &Path) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let file_name = input.file_name().unwrap_or_else(|| OsStr::new("")).as_bytes();
    let end = file_name
        .iter()
        .position(|&b| b == b'.')
        .unwrap_or(file_name.len());
    OsStr::from_bytes(&file_name[..end]).to_os_string()
}

#[cfg(not(unix))]
fn base_name(input: &Path) -> OsString {
    let file_name = input.file_name().unwrap_or_else(|| OsStr::new(""));
    OsString::from(file_name.to_string_lossy().split('.').next().unwrap_or_default())
}

/// The explicit output path if there is one, otherwise a timestamped name
/// built from the local clock.
pub fn resolve_output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, &Local::now()),
    }
}
