//! A tour of small language-feature demonstrations.
//!
//! Each chapter lives in its own module and writes its progress markers to a
//! [`MarkerSink`], so the same code drives the console binaries and the tests.
//!
//! Run the whole tour with: cargo run --bin feature-tour

pub mod closures;
pub mod config;
pub mod error;
pub mod function_pointer;
pub mod inference;
pub mod logging;
pub mod output;
pub mod range;
pub mod threads;
pub mod tour;

pub use config::TourConfig;
pub use error::TourError;
pub use output::{MarkerSink, StdoutSink, Transcript};
pub use threads::SharedState;
pub use tour::{run_tour, Chapter};
