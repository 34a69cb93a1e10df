//! Chapter 1: typed function pointers.
//!
//! Run with: cargo run --bin p1_function_pointers

use crate::output::MarkerSink;

pub fn simple_function(a: i32) -> i32 {
    a + 1
}

/// Calls through a function pointer rather than naming the function.
pub fn apply(f: fn(i32) -> i32, value: i32) -> i32 {
    f(value)
}

pub fn demo(sink: &dyn MarkerSink) {
    sink.emit("function_pointer_demo()");

    // A function pointer that points nowhere yet: the "null" state is a
    // `None`, which the type system forces us to check before calling.
    let mut f1: Option<fn(i32) -> i32> = None;
    if f1.is_none() {
        sink.emit("Null");
    }

    f1 = Some(simple_function);
    if let Some(f) = f1 {
        sink.emit(&format!("Test {}", apply(f, 5)));
    }
}
