//! Chapter 5: join vs detach around a mutex-guarded critical section.
//!
//! Run with: cargo run --bin p5_guarded_threads

use std::sync::Arc;

use feature_tour::{logging, Chapter, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    Chapter::Threads.run(&config, Arc::new(StdoutSink::with_color(config.color)))
}
