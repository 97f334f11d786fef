//! The stringification engine behind `text!`, `print!` and `log!`.
//!
//! This module provides the [`Textify`] trait, a compile-time dispatch over
//! three mutually exclusive value categories:
//!
//! - **Text-like** (`str`, `String`, `Cow<str>`): rendered as themselves,
//!   with no quoting or escaping
//! - **Sequences** (`Vec`, slices, arrays, `VecDeque`, `LinkedList`,
//!   `BTreeSet`): rendered as `[a, b, c]`, recursively, to any nesting depth
//! - **Scalars** (integers, floats, `bool`, `char`): rendered with their
//!   standard `Display` formatting
//!
//! The text-like category always wins: a `String` is iterable over its
//! characters, but `"abc"` renders as `abc`, never as `[a, b, c]`. In Rust
//! this falls out of coherence rather than check ordering — string types get
//! the identity impl and nothing else — but it is the load-bearing contract
//! of the whole crate, so the tests pin it explicitly.
//!
//! Values outside all three categories simply don't implement [`Textify`],
//! so misuse is a type error at the call site, never a runtime failure.
//!
//! ## Scalar formatting
//!
//! Scalars use their `Display` impls: integers as base-10 digits, `bool` as
//! `true`/`false`, floats in Rust's shortest round-trip form (so `1.0f64`
//! renders as `1`). No precision or locale options are applied.
//!
//! ## Examples
//!
//! ```rust
//! use textify::Textify;
//!
//! assert_eq!(42_i32.textify(), "42");
//! assert_eq!("hello".textify(), "hello");
//! assert_eq!(vec![1, 2, 3].textify(), "[1, 2, 3]");
//! assert_eq!(vec![vec![1, 2], vec![3]].textify(), "[[1, 2], [3]]");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::fmt::Write;

/// Conversion of a value into its canonical human-readable text form.
///
/// Implementations exist for string types (identity), the primitive scalars
/// (`Display` formatting), and the ordered standard containers over any
/// `Textify` element type (bracketed, comma-separated, recursive). See the
/// [module docs](self) for the category rules.
///
/// Implementors only provide [`write_text`](Textify::write_text), which
/// appends into a caller-supplied buffer; nested sequences therefore share a
/// single accumulation buffer instead of allocating per element.
///
/// # Examples
///
/// ```rust
/// use textify::Textify;
///
/// let mut buf = String::from("got: ");
/// vec![1, 2].write_text(&mut buf);
/// assert_eq!(buf, "got: [1, 2]");
/// ```
pub trait Textify {
    /// Appends this value's rendering to `out`.
    fn write_text(&self, out: &mut String);

    /// Renders this value into a freshly allocated `String`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textify::Textify;
    ///
    /// assert_eq!(true.textify(), "true");
    /// assert_eq!(Vec::<i32>::new().textify(), "[]");
    /// ```
    #[must_use]
    fn textify(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

// References render as their referent, at any depth. This is what lets the
// variadic macros take a mix of owned values and borrows.
impl<T: Textify + ?Sized> Textify for &T {
    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

// ---------------------------------------------------------------- text-like

impl Textify for str {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Textify for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Textify for Cow<'_, str> {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

// ------------------------------------------------------------------ scalars

macro_rules! impl_textify_scalar {
    ($($ty:ty)*) => {
        $(
            impl Textify for $ty {
                fn write_text(&self, out: &mut String) {
                    // fmt::Write to a String cannot fail
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

impl_textify_scalar! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64 bool char
}

// ---------------------------------------------------------------- sequences

/// Renders an ordered sequence as `[e1, e2, ...]`, recursing into elements.
fn write_seq<'a, T, I>(items: I, out: &mut String)
where
    T: Textify + 'a,
    I: IntoIterator<Item = &'a T>,
{
    out.push('[');
    let mut iter = items.into_iter();
    if let Some(first) = iter.next() {
        first.write_text(out);
    }
    for item in iter {
        out.push_str(", ");
        item.write_text(out);
    }
    out.push(']');
}

impl<T: Textify> Textify for [T] {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}

impl<T: Textify, const N: usize> Textify for [T; N] {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}

impl<T: Textify> Textify for Vec<T> {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}

impl<T: Textify> Textify for VecDeque<T> {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}

impl<T: Textify> Textify for LinkedList<T> {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}

impl<T: Textify> Textify for BTreeSet<T> {
    fn write_text(&self, out: &mut String) {
        write_seq(self, out);
    }
}
