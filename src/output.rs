//! Where the demos write their progress markers.

use std::sync::{Arc, Mutex};

use colored::Colorize;

/// Receives one line per marker. Shared across threads by the thread chapter.
pub trait MarkerSink: Send + Sync {
    fn emit(&self, line: &str);

    /// Chapter heading; defaults to a plain marker.
    fn banner(&self, title: &str) {
        self.emit(&format!("=== {} ===", title));
    }
}

/// Prints markers to stdout, headings in bold cyan.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Forces colouring on or off instead of consulting the environment.
    pub fn with_color(color: bool) -> Self {
        colored::control::set_override(color);
        StdoutSink
    }
}

impl MarkerSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }

    fn banner(&self, title: &str) {
        println!("\n{}", format!("=== {} ===", title).bold().cyan());
    }
}

/// In-memory record of every marker, in the order the sink saw them.
///
/// Clones share the same storage, so a clone can be handed to worker threads
/// while the original is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn position(&self, marker: &str) -> Option<usize> {
        self.lock().iter().position(|line| line == marker)
    }

    /// Every index at which `marker` was recorded.
    pub fn positions(&self, marker: &str) -> Vec<usize> {
        self.lock()
            .iter()
            .enumerate()
            .filter(|(_, line)| line.as_str() == marker)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count(&self, marker: &str) -> usize {
        self.lock().iter().filter(|line| line.as_str() == marker).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panicking test thread must not hide what was recorded before it.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MarkerSink for Transcript {
    fn emit(&self, line: &str) {
        self.lock().push(line.to_string());
    }
}

impl<S: MarkerSink + ?Sized> MarkerSink for Arc<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }

    fn banner(&self, title: &str) {
        (**self).banner(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_transcript_records_in_order() {
        let transcript = Transcript::new();
        transcript.emit("first");
        transcript.emit("second");
        transcript.emit("first");

        assert_eq!(transcript.lines(), vec!["first", "second", "first"]);
        assert_eq!(transcript.position("second"), Some(1));
        assert_eq!(transcript.positions("first"), vec![0, 2]);
        assert_eq!(transcript.count("first"), 2);
        assert_eq!(transcript.position("missing"), None);
    }

    #[test]
    fn test_default_banner() {
        let transcript = Transcript::new();
        transcript.banner("Closures");
        assert_eq!(transcript.lines(), vec!["=== Closures ==="]);
    }

    #[test]
    fn test_clones_share_storage_across_threads() {
        let transcript = Transcript::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = transcript.clone();
                thread::spawn(move || sink.emit(&format!("worker {}", i)))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(transcript.lines().len(), 4);
    }

    #[test]
    fn test_arc_dyn_sink_forwards() {
        let transcript = Transcript::new();
        let shared: Arc<dyn MarkerSink> = Arc::new(transcript.clone());
        shared.emit("through arc");
        shared.banner("Threads");

        assert_eq!(transcript.lines(), vec!["through arc", "=== Threads ==="]);
    }
}
