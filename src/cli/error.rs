use crate::file::error::FileError;

// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
pub const NOT_FOUND: i32 = 2;

/// Pick the exit code for an error returned by a command handler
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FileError>() {
        Some(FileError::NotFound(_)) => NOT_FOUND,
        _ => ERROR,
    }
}
