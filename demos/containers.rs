//! Nested containers and the utility helpers.
//!
//! Run with: cargo run --example containers

use std::collections::VecDeque;
use textify::util::{fill_random, is_empty, repeat, sum};
use textify::log;

fn main() {
    log!(repeat("=", 40));

    let nested = vec![vec![1, 2], vec![3], vec![]];
    log!("nested:", &nested); // nested: [[1, 2], [3], []]

    let deque: VecDeque<&str> = VecDeque::from(vec!["front", "back"]);
    log!("deque:", &deque);

    let mut samples = Vec::new();
    fill_random(&mut samples, 10);
    log!("samples:", &samples);
    log!("empty?", is_empty(&samples), "sum:", sum::<_, i64>(&samples));

    log!(repeat("=", 40));
}
