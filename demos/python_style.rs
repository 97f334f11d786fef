//! A typical Python print session, ported line for line.
//!
//! Run with: cargo run --example python_style

use textify::log;

fn main() {
    let vec = vec![1, 2, 3];

    // print("Hello", "World", vec, 42)
    log!("Hello", "World", &vec, 42);

    // print("Hello", "World", 24, vec)
    log!("Hello", "World", 24, &vec);

    // print("Hello", vec, 42, "World")
    log!("Hello", &vec, 42, "World");

    // print() -- a blank line
    log!();
}
