//! Basic printing and string conversion.
//!
//! Run with: cargo run --example simple

use textify::{log, to_text};

fn main() {
    let scores = vec![91, 78, 85];

    // One rendering rule everywhere: strings stay themselves, scalars use
    // their Display form, containers become bracketed groups.
    log!("scores:", &scores);
    log!("first scalar:", 91, "as text:", to_text(&91));

    let rendered = to_text(&scores);
    assert_eq!(rendered, "[91, 78, 85]");
    log!("rendered length:", rendered.len());
}
