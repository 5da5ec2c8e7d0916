use super::error::{FileError, FileResult};
use super::logged::logged;
use super::value::{Value, sum_numeric_fields};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const DELIMITER: char = ',';

const NOT_READABLE: &str = "File is not readable";
const READ_DENIED: &str = "Permission denied while reading file";
const READ_FAILED: &str = "File is corrupted or unavailable";
const WRITE_DENIED: &str = "Permission denied while writing file";
const WRITE_FAILED: &str = "Failed to write file";
const APPEND_DENIED: &str = "Permission denied while appending to file";
const APPEND_FAILED: &str = "Failed to append to file";
const ONLY_ONE_NUMBER: &str = "Only one number may be appended";

/// Reads, writes and appends comma-separated rows of a single file
///
/// The file must exist when the manager is created. It is not checked
/// again afterwards, and no handle is held between calls.
#[derive(Debug, Clone)]
pub struct FileManager {
    path: PathBuf,
}

impl FileManager {
    /// Create a manager for an existing, readable file
    ///
    /// # Errors
    ///
    /// - [`FileError::NotFound`] if nothing exists at `path`
    /// - [`FileError::Corrupted`] if the file exists but reading it is not permitted
    pub fn new(path: impl Into<PathBuf>) -> FileResult<Self> {
        let path = path.into();
        let _span = operation_span(&path).entered();

        logged("new", || {
            if !path.exists() {
                return Err(FileError::NotFound(path.clone()));
            }
            match File::open(&path) {
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    Err(FileError::from_io(&path, e, NOT_READABLE, NOT_READABLE))
                }
                _ => Ok(Self { path: path.clone() }),
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line as a row of fields
    ///
    /// Lines are trimmed before splitting, so an empty line becomes `[""]`
    /// and an empty file yields no rows at all.
    pub fn read(&self) -> FileResult<Vec<Vec<String>>> {
        let _span = self.span().entered();
        logged("read", || self.load_rows())
    }

    /// Replace the file contents with `rows`, one line per row
    pub fn write(&self, rows: &[Vec<Value>]) -> FileResult<()> {
        let _span = self.span().entered();
        logged("write", || {
            let to_err = |e: io::Error| FileError::from_io(&self.path, e, WRITE_DENIED, WRITE_FAILED);

            let mut writer = BufWriter::new(File::create(&self.path).map_err(to_err)?);
            for row in rows {
                writeln!(writer, "{}", join_row(row)).map_err(to_err)?;
            }
            writer.flush().map_err(to_err)?;

            tracing::debug!("Wrote {} row(s) to {}", rows.len(), self.path.display());
            Ok(())
        })
    }

    /// Append the running total of the file plus the single number in `row`
    ///
    /// Every numeric field already in the file is summed and `row[0]` is
    /// added to it; that total, not `row[0]`, becomes the new last line.
    /// When the file holds no numeric field the value is appended as given.
    pub fn append(&self, row: &[Value]) -> FileResult<()> {
        let _span = self.span().entered();
        logged("append", || {
            let amount = match row {
                [value] => value.as_f64(),
                _ => None,
            }
            .ok_or_else(|| FileError::corrupted(self.path.clone(), ONLY_ONE_NUMBER))?;

            let rows = self.load_rows()?;
            let value = match sum_numeric_fields(&rows) {
                Some(total) => Value::Float(total + amount),
                None => row[0].clone(),
            };

            let to_err = |e: io::Error| FileError::from_io(&self.path, e, APPEND_DENIED, APPEND_FAILED);
            let mut file = OpenOptions::new()
                .append(true)
                .open(&self.path)
                .map_err(to_err)?;
            writeln!(file, "{}", value).map_err(to_err)?;

            tracing::debug!("Appended {} to {}", value, self.path.display());
            Ok(())
        })
    }

    /// Unlogged read, shared by `read` and `append`
    fn load_rows(&self) -> FileResult<Vec<Vec<String>>> {
        let to_err = |e: io::Error| FileError::from_io(&self.path, e, READ_DENIED, READ_FAILED);

        let file = File::open(&self.path).map_err(to_err)?;
        let text = io::read_to_string(file).map_err(to_err)?;
        Ok(split_lines(&text).into_iter().map(split_row).collect())
    }

    fn span(&self) -> tracing::Span {
        operation_span(&self.path)
    }
}

// Error level so the span still reaches sinks that only keep errors
fn operation_span(path: &Path) -> tracing::Span {
    tracing::error_span!("file_manager", path = %path.display())
}

/// Split on `\r\n`, `\r` or `\n`; a trailing terminator adds no empty line
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

fn split_row(line: &str) -> Vec<String> {
    line.trim().split(DELIMITER).map(str::to_string).collect()
}

fn join_row(row: &[Value]) -> String {
    row.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
