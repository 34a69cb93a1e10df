use std::sync::Arc;

use tracing::info;

use crate::config::TourConfig;
use crate::error::TourError;
use crate::output::MarkerSink;
use crate::threads::{self, SharedState};
use crate::{closures, function_pointer, inference, range};

/// The chapters in the order the full tour runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chapter {
    Range,
    Closures,
    Inference,
    FunctionPointers,
    Threads,
}

impl Chapter {
    pub const ALL: [Chapter; 5] = [
        Chapter::Range,
        Chapter::Closures,
        Chapter::Inference,
        Chapter::FunctionPointers,
        Chapter::Threads,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Chapter::Range => "Range Iteration",
            Chapter::Closures => "Closures",
            Chapter::Inference => "Type Inference",
            Chapter::FunctionPointers => "Function Pointers",
            Chapter::Threads => "Guarded Threads",
        }
    }

    /// Runs one chapter under its banner.
    ///
    /// Only the thread chapter can fail; it gets a fresh `SharedState`.
    pub fn run(&self, config: &TourConfig, sink: Arc<dyn MarkerSink>) -> Result<(), TourError> {
        info!(chapter = self.title(), "starting chapter");
        sink.banner(self.title());

        match self {
            Chapter::Range => range::demo(sink.as_ref()),
            Chapter::Closures => closures::demo(sink.as_ref()),
            Chapter::Inference => inference::demo(sink.as_ref()),
            Chapter::FunctionPointers => function_pointer::demo(sink.as_ref()),
            Chapter::Threads => threads::demo_sequence(SharedState::shared(), sink, config)?,
        }
        Ok(())
    }
}

/// Greets, then runs every chapter in order.
pub fn run_tour(config: &TourConfig, sink: Arc<dyn MarkerSink>) -> Result<(), TourError> {
    sink.emit("Hello world");
    for chapter in Chapter::ALL {
        chapter.run(config, Arc::clone(&sink))?;
    }
    Ok(())
}
