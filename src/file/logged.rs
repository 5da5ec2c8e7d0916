//! Error logging around file operations
//!
//! Every failing operation goes through [`logged`] exactly once, so each
//! error the caller sees has exactly one error record behind it.

use super::error::{FileError, FileResult};

/// Run `op` and log its error (if any) under the given operation name
pub fn logged<T>(operation: &'static str, op: impl FnOnce() -> FileResult<T>) -> FileResult<T> {
    op().inspect_err(|e| {
        tracing::error!(operation, kind = kind_of(e), "{}", error_chain(e));
    })
}

fn kind_of(err: &FileError) -> &'static str {
    if err.is_not_found() { "not_found" } else { "corrupted" }
}

/// Error text followed by its sources, `outer: inner: ...`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
