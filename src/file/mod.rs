//! Comma-separated data file access
//!
//! [`FileManager`] wraps one file; every failure comes back as a
//! [`FileError`] and is logged once on the way out.

pub mod error;
pub mod logged;
pub mod manager;
pub mod value;

pub use error::{FileError, FileResult};
pub use manager::FileManager;
pub use value::Value;
