//! The full tour: every chapter, in order, with the reference timings.
//!
//! Run with: cargo run --bin feature-tour

use std::sync::Arc;

use feature_tour::{logging, run_tour, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    // Arguments are ignored; the tour always runs with its defaults.
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    run_tour(&config, Arc::new(StdoutSink::with_color(config.color)))
}
