//! Chapter 4: letting the compiler infer local types.
//!
//! Run with: cargo run --bin p4_type_inference

use std::sync::Arc;

use feature_tour::{logging, Chapter, StdoutSink, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::default();
    logging::init(&config.log_level)?;

    Chapter::Inference.run(&config, Arc::new(StdoutSink::with_color(config.color)))
}
