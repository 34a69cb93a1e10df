//! Chapter 3: closures, with and without captured state.
//!
//! Run with: cargo run --bin p3_closures

use crate::output::MarkerSink;

pub const GREETING: &str = "Hello Izzy!";

/// Drives `f` over each character of `text`.
///
/// Takes `FnMut` so callers can pass closures that mutate what they capture.
pub fn for_each_char<F>(text: &str, f: F)
where
    F: FnMut(char),
{
    text.chars().for_each(f);
}

/// Emits `Hit <c>` per character and returns how many were seen.
pub fn count_chars(text: &str, sink: &dyn MarkerSink) -> usize {
    let mut count = 0;
    // The closure borrows `count` mutably until it is dropped at the end of the call.
    for_each_char(text, |c| {
        sink.emit(&format!("Hit {}", c));
        count += 1;
    });
    count
}

/// Sorts ascending with a comparator closure.
///
/// `total_cmp` gives floats a total order, so NaN cannot break the sort.
pub fn sort_ascending(values: &mut [f32]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

fn emit_values(sink: &dyn MarkerSink, values: &[f32]) {
    sink.emit("After sort:");
    values.iter().for_each(|n| sink.emit(&n.to_string()));
}

pub fn demo(sink: &dyn MarkerSink) {
    // No captures besides the sink itself.
    for_each_char(GREETING, |c| sink.emit(&format!("Hit {}", c)));

    let count = count_chars(GREETING, sink);
    sink.emit(&format!("Count {}", count));

    let mut numbers: [f32; 4] = [1.0, 2.0, 4.0, 3.0];
    sort_ascending(&mut numbers);
    emit_values(sink, &numbers);

    let mut v: Vec<f32> = vec![1.0, 3.0, 2.0];
    sort_ascending(&mut v);
    emit_values(sink, &v);
}
