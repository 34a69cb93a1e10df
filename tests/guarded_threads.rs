use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use feature_tour::threads::{
    demo_sequence, join_worker, run_guarded_task, spawn_guarded_task, DETACHED_MARKER,
    FINISH_MARKER, JOINED_MARKER, START_MARKER,
};
use feature_tour::{MarkerSink, SharedState, TourConfig, Transcript};

fn quick(work_millis: u64, grace_millis: u64) -> TourConfig {
    TourConfig {
        work_millis,
        grace_millis,
        ..TourConfig::quick()
    }
}

fn wait_for(transcript: &Transcript, marker: &str, count: usize, limit: Duration) -> bool {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if transcript.count(marker) >= count {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn joined_task_finishes_before_join_marker() {
    let transcript = Transcript::new();
    demo_sequence(
        SharedState::shared(),
        Arc::new(transcript.clone()),
        &quick(40, 0),
    )
    .unwrap();

    let lines = transcript.lines();
    assert_eq!(&lines[..3], &[START_MARKER, FINISH_MARKER, JOINED_MARKER]);
}

#[test]
fn concurrent_tasks_never_interleave() {
    let state = SharedState::shared();
    let transcript = Transcript::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let name = format!("contender-{}", i);
            let handle = spawn_guarded_task(
                &name,
                Arc::clone(&state),
                Arc::new(transcript.clone()),
                Duration::from_millis(20),
            )
            .unwrap();
            (name, handle)
        })
        .collect();

    for (name, handle) in handles {
        join_worker(&name, handle).unwrap();
    }

    let lines = transcript.lines();
    assert_eq!(lines.len(), 8);
    for pair in lines.chunks(2) {
        assert_eq!(pair, &[START_MARKER, FINISH_MARKER]);
    }
}

#[test]
fn detach_does_not_wait_for_the_worker() {
    let transcript = Transcript::new();
    let work = Duration::from_millis(500);
    let started = Instant::now();

    demo_sequence(
        SharedState::shared(),
        Arc::new(transcript.clone()),
        &quick(work.as_millis() as u64, 0),
    )
    .unwrap();

    // One full work period for the joined task, none for the detached one.
    assert!(started.elapsed() < work * 2);
    assert!(transcript.position(DETACHED_MARKER).is_some());
    assert_eq!(transcript.count(FINISH_MARKER), 1);

    // The detached worker still runs to completion on its own.
    assert!(wait_for(&transcript, FINISH_MARKER, 2, Duration::from_secs(5)));
    let detached = transcript.position(DETACHED_MARKER).unwrap();
    assert!(transcript.positions(FINISH_MARKER)[1] > detached);
}

#[test]
fn lock_is_free_as_soon_as_task_returns() {
    let state = SharedState::new();
    run_guarded_task(&state, &Transcript::new(), Duration::from_millis(10)).unwrap();

    let started = Instant::now();
    let guard = state.try_lock().unwrap();
    assert!(guard.is_some());
    assert!(started.elapsed() < Duration::from_millis(10));
}

#[test]
fn full_sequence_with_grace_period() {
    let transcript = Transcript::new();
    let sink: Arc<dyn MarkerSink> = Arc::new(transcript.clone());

    demo_sequence(SharedState::shared(), sink, &quick(30, 400)).unwrap();

    let joined = transcript.position(JOINED_MARKER).unwrap();
    let detached = transcript.position(DETACHED_MARKER).unwrap();
    let finishes = transcript.positions(FINISH_MARKER);

    assert!(finishes[0] < joined);
    assert!(joined < detached);
    // The grace period comfortably outlasts the detached worker here.
    assert_eq!(transcript.count(START_MARKER), 2);
    assert_eq!(finishes.len(), 2);
    assert!(finishes[1] > detached);
}
