//! Variadic `text!`, `print!` and `log!` macros.
//!
//! These give Rust the Python-style call shape the crate exists for: any
//! number of arguments, of any mix of [`Textify`](crate::Textify) types,
//! joined with single spaces.
//!
//! ```rust
//! use textify::{log, print, text};
//!
//! let v = vec![1, 2, 3];
//! assert_eq!(text!("Hello", "World", v, 42), "Hello World [1, 2, 3] 42");
//! assert_eq!(text!(), "");
//!
//! print!("no trailing newline:", 1); // -> stdout, nothing appended
//! log!("one trailing newline:", 2); // -> stdout + '\n'
//! ```
//!
//! `print!` and `log!` shadow the std prelude macros when imported with
//! `use textify::{log, print};` — that is intentional; call them as
//! `textify::print!` / `textify::log!` if you want both in scope.

/// Renders each argument with [`Textify`](crate::Textify) and joins the
/// results with a single space.
///
/// With no arguments, yields an empty `String`.
///
/// # Examples
///
/// ```rust
/// use textify::text;
///
/// assert_eq!(text!(), "");
/// assert_eq!(text!("solo"), "solo");
/// assert_eq!(text!(1, 2.5, true, "mix"), "1 2.5 true mix");
/// assert_eq!(text!(vec![vec![1, 2], vec![3]]), "[[1, 2], [3]]");
/// ```
#[macro_export]
macro_rules! text {
    () => {
        ::std::string::String::new()
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut buf = ::std::string::String::new();
        $crate::Textify::write_text(&$first, &mut buf);
        $(
            buf.push(' ');
            $crate::Textify::write_text(&$rest, &mut buf);
        )*
        buf
    }};
}

/// Writes [`text!`] of the arguments to standard output, with no trailing
/// separator.
///
/// Like `std::print!`, output goes through the process stdout handle and
/// panics if writing to it fails.
///
/// # Examples
///
/// ```rust
/// use textify::print;
///
/// print!("Hello", "World", vec![1, 2, 3], 42);
/// // stdout: Hello World [1, 2, 3] 42
/// ```
#[macro_export]
macro_rules! print {
    ($($arg:expr),* $(,)?) => {
        ::std::print!("{}", $crate::text!($($arg),*))
    };
}

/// Writes [`text!`] of the arguments to standard output, followed by exactly
/// one line terminator.
///
/// # Examples
///
/// ```rust
/// use textify::log;
///
/// log!("result:", vec![1, 2, 3]);
/// // stdout: result: [1, 2, 3]\n
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {
        ::std::println!("{}", $crate::text!($($arg),*))
    };
}
