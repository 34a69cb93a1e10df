//! Chapter 2: iterating a vector by reference.
//!
//! Run with: cargo run --bin p2_range_iteration

use std::sync::Arc;

use feature_tour::{logging, Chapter, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    Chapter::Range.run(&config, Arc::new(StdoutSink::with_color(config.color)))
}
