//! Small container and randomness utilities.
//!
//! Everyday helpers that pair well with the printing macros: fill a vector
//! with random values, check emptiness, sum a collection, repeat a pattern.
//!
//! ## Examples
//!
//! ```rust
//! use textify::util::{fill_random, is_empty, repeat, sum};
//!
//! assert_eq!(repeat("*", 10), "**********");
//!
//! let v = vec![1, 2, 3, 4, 5];
//! assert!(!is_empty(&v));
//! assert_eq!(sum(&v), 15);
//!
//! let mut r = Vec::new();
//! fill_random(&mut r, 10);
//! assert_eq!(r.len(), 10);
//! ```

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::ops::Add;

/// Repeats a string pattern `count` times.
///
/// # Examples
///
/// ```rust
/// use textify::util::repeat;
///
/// assert_eq!(repeat("*", 10), "**********");
/// assert_eq!(repeat("ab", 3), "ababab");
/// assert_eq!(repeat("x", 0), "");
/// ```
#[must_use]
pub fn repeat(pattern: &str, count: usize) -> String {
    pattern.repeat(count)
}

/// Returns `true` if the collection yields no elements.
///
/// Works with anything iterable by reference, so there is one spelling for
/// vectors, slices, sets and maps alike, with an `is_` prefix that reads
/// unambiguously as a predicate.
///
/// # Examples
///
/// ```rust
/// use textify::util::is_empty;
///
/// assert!(is_empty(&Vec::<i32>::new()));
/// assert!(!is_empty(&vec![1, 2, 3]));
/// ```
#[must_use]
pub fn is_empty<'a, C>(collection: &'a C) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    collection.into_iter().next().is_none()
}

/// Sums the elements of a collection.
///
/// The accumulator starts from the first element rather than a literal zero,
/// so any `Add` type with a sensible `Default` works, not just primitive
/// numbers. An empty collection yields `T::default()`.
///
/// # Examples
///
/// ```rust
/// use textify::util::sum;
///
/// assert_eq!(sum(&vec![1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum(&Vec::<i32>::new()), 0);
/// assert_eq!(sum(&[1.5, 2.5]), 4.0);
/// ```
#[must_use]
pub fn sum<'a, C, T>(collection: &'a C) -> T
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: Add<Output = T> + Clone + Default + 'a,
{
    let mut iter = collection.into_iter();
    match iter.next() {
        None => T::default(),
        Some(first) => iter.fold(first.clone(), |acc, item| acc + item.clone()),
    }
}

/// Returns a uniformly distributed integer in the half-open range
/// `[min, max)`.
///
/// Draws from `rand`'s per-thread generator, which is lazily initialized
/// once per thread and reused across calls. Per-thread state also means the
/// helper is safe to call from multiple threads without coordination.
///
/// # Panics
///
/// Panics if `min >= max`.
///
/// # Examples
///
/// ```rust
/// use textify::util::random_int;
///
/// let n = random_int(0, 10);
/// assert!((0..10).contains(&n));
/// ```
#[must_use]
pub fn random_int<T>(min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
{
    rand::thread_rng().gen_range(min..max)
}

/// Fills a vector with two-digit random integers.
///
/// An empty vector is first resized to `len`; a non-empty vector keeps its
/// length and has every slot overwritten.
///
/// # Examples
///
/// ```rust
/// use textify::util::fill_random;
///
/// let mut v = Vec::new();
/// fill_random(&mut v, 10);
/// assert_eq!(v.len(), 10);
/// assert!(v.iter().all(|n| (10..100).contains(n)));
/// ```
// TODO: generalize to containers other than Vec<i64>
pub fn fill_random(values: &mut Vec<i64>, len: usize) {
    if values.is_empty() {
        values.resize(len, 0);
    }
    for slot in values.iter_mut() {
        *slot = random_int(10, 100);
    }
}
