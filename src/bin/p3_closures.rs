//! Chapter 3: closures, captures, and comparator-driven sorting.
//!
//! Run with: cargo run --bin p3_closures

use std::sync::Arc;

use feature_tour::{logging, Chapter, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    Chapter::Closures.run(&config, Arc::new(StdoutSink::with_color(config.color)))
}
