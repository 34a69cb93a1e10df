//! Chapter 5: threads, join vs detach, and a mutex-guarded critical section.
//!
//! A guarded task takes the shared lock, "works" by sleeping while it holds
//! the lock, and lets the guard release it when the task's scope ends. The
//! demo sequence runs one task to completion with `join`, then starts a second
//! one and drops its handle (detach) so the caller carries on without it.
//!
//! Run with: cargo run --bin p5_guarded_threads

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::TourConfig;
use crate::error::TourError;
use crate::output::MarkerSink;

pub const START_MARKER: &str = "Hello on different thread";
pub const FINISH_MARKER: &str = "Finished sleeping";
pub const JOINED_MARKER: &str = "Joined and done!";
pub const DETACHED_MARKER: &str = "Detached and done!";

//==============================================================================
// Shared state
//==============================================================================

/// The lock every guarded task contends for.
///
/// The guarded string is never read or written by the tasks; only the lock
/// around it matters. Hand it to threads as `Arc<SharedState>`.
#[derive(Debug, Default)]
pub struct SharedState {
    data: Mutex<String>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Blocks until the lock is free.
    pub fn lock(&self) -> Result<MutexGuard<'_, String>, TourError> {
        Ok(self.data.lock()?)
    }

    /// Returns `None` while another task holds the lock.
    pub fn try_lock(&self) -> Result<Option<MutexGuard<'_, String>>, TourError> {
        match self.data.try_lock() {
            Ok(guard) => Ok(Some(guard)),
            Err(TryLockError::WouldBlock) => Ok(None),
            Err(TryLockError::Poisoned(_)) => Err(TourError::LockPoisoned),
        }
    }

    pub fn is_poisoned(&self) -> bool {
        self.data.is_poisoned()
    }
}

//==============================================================================
// Guarded task
//==============================================================================

/// Holds the shared lock for the whole of its run and sleeps for `work`.
///
/// The guard is bound to this function's scope, so the lock is released on
/// every way out, including a panic between the two markers.
pub fn run_guarded_task(
    state: &SharedState,
    sink: &dyn MarkerSink,
    work: Duration,
) -> Result<(), TourError> {
    let _guard = state.lock()?;
    trace!("lock acquired");

    sink.emit(START_MARKER);
    thread::sleep(work);
    sink.emit(FINISH_MARKER);

    trace!("releasing lock");
    Ok(())
}

/// Launches a guarded task on its own named OS thread.
pub fn spawn_guarded_task(
    name: &str,
    state: Arc<SharedState>,
    sink: Arc<dyn MarkerSink>,
    work: Duration,
) -> Result<thread::JoinHandle<Result<(), TourError>>, TourError> {
    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || run_guarded_task(&state, sink.as_ref(), work))
        .map_err(|err| TourError::spawn(name, err))?;

    debug!(worker = name, "spawned guarded task");
    Ok(handle)
}

/// Waits for a worker and surfaces both its panic and its own error.
pub fn join_worker(
    name: &str,
    handle: thread::JoinHandle<Result<(), TourError>>,
) -> Result<(), TourError> {
    let outcome = handle
        .join()
        .map_err(|payload| TourError::worker_panicked(name, payload.as_ref()))?;
    debug!(worker = name, "joined guarded task");
    outcome
}

//==============================================================================
// Demo sequence
//==============================================================================

/// Join one worker, detach another, then linger for the grace period.
///
/// The detached worker is owned by the OS from the moment its handle drops.
/// The grace sleep only makes it likely, not certain, that its markers appear
/// before the process exits.
pub fn demo_sequence(
    state: Arc<SharedState>,
    sink: Arc<dyn MarkerSink>,
    config: &TourConfig,
) -> Result<(), TourError> {
    let work = config.work_duration();

    let joined = spawn_guarded_task("guarded-joined", Arc::clone(&state), Arc::clone(&sink), work)?;
    join_worker("guarded-joined", joined)?;
    sink.emit(JOINED_MARKER);

    let detached = spawn_guarded_task("guarded-detached", state, Arc::clone(&sink), work)?;
    drop(detached);
    debug!(worker = "guarded-detached", "detached guarded task");
    sink.emit(DETACHED_MARKER);

    thread::sleep(config.grace_duration());
    Ok(())
}
