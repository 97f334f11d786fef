//! # textify
//!
//! Python-like `print!`/`log!` for Rust: pass any mix of values and nested
//! containers, get readable output with no format strings.
//!
//! ## What does it do?
//!
//! At the center is one recursive stringification rule. Strings stay
//! themselves, scalars use their natural `Display` form, and ordered
//! containers render as `[a, b, c]` — recursively, so a `Vec<Vec<i32>>`
//! becomes `[[1, 2], [3]]`. The variadic macros join any number of such
//! renderings with single spaces.
//!
//! ## Key Features
//!
//! - **No format strings**: `log!("answer:", v, 42)` instead of
//!   `println!("answer: {:?} {}", v, 42)`
//! - **Nested containers**: vectors, slices, arrays, deques, lists and sets
//!   render as bracketed groups to any depth
//! - **Strings stay strings**: `"abc"` prints as `abc`, never `[a, b, c]`
//! - **Compile-time checked**: unsupported argument types are rejected by the
//!   type system, never at runtime
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! textify = "0.1"
//! ```
//!
//! ### Printing and logging
//!
//! ```rust
//! use textify::{log, print};
//!
//! let v = vec![1, 2, 3];
//!
//! log!("Hello", "World", &v, 42);
//! // stdout: Hello World [1, 2, 3] 42\n
//!
//! print!(&v);
//! // stdout: [1, 2, 3]      (no trailing newline)
//! ```
//!
//! ### Building strings
//!
//! ```rust
//! use textify::{text, to_text};
//!
//! assert_eq!(to_text(&vec![vec![1, 2], vec![3]]), "[[1, 2], [3]]");
//! assert_eq!(text!("score:", 42), "score: 42");
//! assert_eq!(text!(), "");
//! ```
//!
//! ### Container utilities
//!
//! ```rust
//! use textify::util::{fill_random, is_empty, repeat, sum};
//!
//! let mut v = Vec::new();
//! fill_random(&mut v, 5);
//! assert_eq!(v.len(), 5);
//! assert!(!is_empty(&v));
//! let _total: i64 = sum(&v);
//! let _rule = repeat("-", 40);
//! ```
//!
//! ## Output form
//!
//! One canonical rendering, chosen to match what Python programmers expect
//! from `print`:
//!
//! | Input | Output |
//! |---|---|
//! | `42` | `42` |
//! | `true` | `true` |
//! | `"abc"` | `abc` |
//! | `vec![]` | `[]` |
//! | `vec![1, 2, 3]` | `[1, 2, 3]` |
//! | `vec![vec![1, 2], vec![3]]` | `[[1, 2], [3]]` |
//!
//! There are no options: no quoting, no escaping, no locale handling, no
//! pretty-printing. For structured serialization use a serde format crate
//! instead.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Rendering is total: no panics, no runtime type errors
//! - The writer-based adapters propagate I/O failures as `Result`
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - your first textify experience
//! - **`python_style.rs`** - port of a typical Python print session
//! - **`containers.rs`** - nested containers and the utility helpers
//!
//! Run any of them with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod text;
pub mod util;

pub use error::{Error, Result};
pub use text::Textify;

use std::io;

/// Renders any [`Textify`] value into a freshly allocated `String`.
///
/// Free-function spelling of [`Textify::textify`]; handy when the trait is
/// not in scope.
///
/// # Examples
///
/// ```rust
/// use textify::to_text;
///
/// assert_eq!(to_text(&42), "42");
/// assert_eq!(to_text("abc"), "abc");
/// assert_eq!(to_text(&vec![1, 2, 3]), "[1, 2, 3]");
/// ```
#[must_use]
pub fn to_text<T>(value: &T) -> String
where
    T: Textify + ?Sized,
{
    value.textify()
}

/// Writes the rendering of `value` to a writer, with no trailing separator.
///
/// # Examples
///
/// ```rust
/// use textify::print_to;
///
/// let mut buf = Vec::new();
/// print_to(&mut buf, &vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(buf, b"[1, 2, 3, 4, 5]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_to<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: Textify + ?Sized,
{
    writer.write_all(value.textify().as_bytes())?;
    Ok(())
}

/// Writes the rendering of `value` to a writer, followed by exactly one line
/// terminator.
///
/// # Examples
///
/// ```rust
/// use textify::log_to;
///
/// let mut buf = Vec::new();
/// log_to(&mut buf, &vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(buf, b"[1, 2, 3, 4, 5]\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn log_to<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: Textify + ?Sized,
{
    let mut rendered = value.textify();
    rendered.push('\n');
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_scalar() {
        assert_eq!(to_text(&42), "42");
        assert_eq!(to_text(&true), "true");
    }

    #[test]
    fn test_to_text_unsized_str() {
        assert_eq!(to_text("hello"), "hello");
    }

    #[test]
    fn test_to_text_nested() {
        assert_eq!(to_text(&vec![vec![1, 2], vec![3]]), "[[1, 2], [3]]");
    }

    #[test]
    fn test_print_to_has_no_trailing_newline() {
        let mut buf = Vec::new();
        print_to(&mut buf, &vec![1, 2, 3, 4, 5]).unwrap();
        assert_eq!(buf, b"[1, 2, 3, 4, 5]");
    }

    #[test]
    fn test_log_to_appends_exactly_one_newline() {
        let mut buf = Vec::new();
        log_to(&mut buf, &vec![1, 2, 3, 4, 5]).unwrap();
        assert_eq!(buf, b"[1, 2, 3, 4, 5]\n");
    }

    #[test]
    fn test_print_to_propagates_writer_failure() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = print_to(Broken, &1).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
