//! Error type for the writer-based adapters.
//!
//! The stringification engine itself is total: category checks are resolved
//! at compile time and rendering never fails, so the only runtime failure in
//! this crate is I/O on the writer-based [`print_to`](crate::print_to) and
//! [`log_to`](crate::log_to) adapters.
//!
//! ## Examples
//!
//! ```rust
//! use textify::{print_to, Error};
//!
//! let mut sink = Vec::new();
//! let result: Result<(), Error> = print_to(&mut sink, &vec![1, 2, 3]);
//! assert!(result.is_ok());
//! ```

use thiserror::Error;

/// Errors produced by the writer-based adapters.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
