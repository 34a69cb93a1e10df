//! Chapter 2: range-based iteration over a vector.
//!
//! Run with: cargo run --bin p2_range_iteration

use crate::output::MarkerSink;

pub fn demo(sink: &dyn MarkerSink) {
    let mut v: Vec<f32> = Vec::new();
    v.push(1.0);
    v.push(3.0);
    v.push(2.0);

    sink.emit("Simple iteration");
    // Borrowing iteration: `v` is still usable afterwards.
    for n in &v {
        sink.emit(&n.to_string());
    }
}
