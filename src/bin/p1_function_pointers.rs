//! Chapter 1: typed function pointers and the "null" pointer.
//!
//! Run with: cargo run --bin p1_function_pointers

use std::sync::Arc;

use feature_tour::{logging, Chapter, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    Chapter::FunctionPointers.run(&config, Arc::new(StdoutSink::with_color(config.color)))
}
