//! Chapter 4: local type inference.
//!
//! Run with: cargo run --bin p4_type_inference

use crate::output::MarkerSink;

pub fn dummy() -> i32 {
    6
}

pub fn demo(sink: &dyn MarkerSink) {
    sink.emit("inference_demo()");

    let f = 10.5; // f64
    sink.emit(&f.to_string());

    let i = dummy(); // i32, from the return type
    sink.emit(&i.to_string());
}
