//! Integration tests for the controller: busy exclusivity, reset
//! semantics, and event ordering, all with pacing disabled so they run at
//! full speed.

use std::time::Duration;

use sortviz_core::{Command, EngineConfig, EngineEvent, RunState, SortKind, SubmitOutcome};
use sortviz_engine::Controller;

fn fast_config(size: usize) -> EngineConfig {
    EngineConfig::default()
        .with_array_size(size)
        .with_delay(Duration::ZERO)
}

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn run_sorts_and_returns_to_idle() {
    let (controller, events) = Controller::new(fast_config(64)).expect("config is valid");
    let before = controller.latest();

    assert_eq!(controller.run_state(), RunState::Idle);
    assert_eq!(
        controller.submit(Command::Start(SortKind::Bubble)),
        SubmitOutcome::Accepted
    );
    controller.join();
    assert_eq!(controller.run_state(), RunState::Idle);

    let after = controller.latest();
    assert!(is_sorted(&after));
    let mut expected = before.to_vec();
    expected.sort_unstable();
    assert_eq!(&*after, expected.as_slice(), "multiset must be preserved");

    // The channel ends with the Finished marker.
    let mut finished = None;
    while let Ok(event) = events.try_recv() {
        if let EngineEvent::Finished(kind) = event {
            finished = Some(kind);
        }
    }
    assert_eq!(finished, Some(SortKind::Bubble));
}

#[test]
fn second_start_while_running_is_rejected() {
    // A paced run on a real array stays in flight long enough for the
    // second submit to observe Running deterministically.
    let config = fast_config(48).with_delay(Duration::from_millis(2));
    let (controller, events) = Controller::new(config).expect("config is valid");
    let before = controller.latest();

    assert!(controller.submit(Command::Start(SortKind::Quick)).is_accepted());
    assert_eq!(
        controller.submit(Command::Start(SortKind::Bubble)),
        SubmitOutcome::RejectedBusy
    );
    controller.join();

    // Exactly one run happened: one Finished event, carrying the first
    // algorithm, and the outcome is the first run's.
    let finished: Vec<SortKind> = events
        .try_iter()
        .filter_map(|event| match event {
            EngineEvent::Finished(kind) => Some(kind),
            _ => None,
        })
        .collect();
    assert_eq!(finished, [SortKind::Quick]);

    let mut expected = before.to_vec();
    expected.sort_unstable();
    assert_eq!(&*controller.latest(), expected.as_slice());
}

#[test]
fn start_accepted_again_after_completion() {
    let (controller, _events) = Controller::new(fast_config(16)).expect("config is valid");
    for kind in SortKind::ALL {
        assert!(controller.submit(Command::Start(kind)).is_accepted());
        controller.join();
        assert_eq!(controller.run_state(), RunState::Idle);
    }
}

#[test]
fn reset_regenerates_independent_arrays() {
    let (controller, events) = Controller::new(fast_config(100)).expect("config is valid");

    assert!(controller.submit(Command::Reset).is_accepted());
    let first = controller.latest();
    assert!(controller.submit(Command::Reset).is_accepted());
    let second = controller.latest();

    assert_eq!(first.len(), 100);
    assert_eq!(second.len(), 100);
    // Two independent draws of 100 values from a 550-wide range; a
    // collision of the full sequence is vanishingly unlikely.
    assert_ne!(first, second);

    let resets = events
        .try_iter()
        .filter(|event| matches!(event, EngineEvent::Reset(_)))
        .count();
    assert_eq!(resets, 2);
}

#[test]
fn reset_while_running_is_rejected() {
    let config = fast_config(48).with_delay(Duration::from_millis(2));
    let (controller, _events) = Controller::new(config).expect("config is valid");

    assert!(controller.submit(Command::Start(SortKind::Merge)).is_accepted());
    assert_eq!(controller.submit(Command::Reset), SubmitOutcome::RejectedBusy);
    controller.join();

    // The rejected reset left the run's outcome intact.
    assert!(is_sorted(&controller.latest()));
}

#[test]
fn events_arrive_in_emission_order() {
    let (controller, events) = Controller::new(fast_config(32)).expect("config is valid");
    assert!(controller.submit(Command::Start(SortKind::Bubble)).is_accepted());
    controller.join();

    // Replay the stream: every Step snapshot differs from its predecessor
    // by at most one adjacent transposition, which only holds if no event
    // was reordered or dropped.
    let mut previous: Option<Vec<i32>> = None;
    let mut steps = 0usize;
    for event in events.try_iter() {
        if let EngineEvent::Step(snapshot) = event {
            steps += 1;
            if let Some(prev) = previous {
                let diffs: Vec<usize> = prev
                    .iter()
                    .zip(snapshot.iter())
                    .enumerate()
                    .filter(|(_, (a, b))| a != b)
                    .map(|(i, _)| i)
                    .collect();
                match diffs.as_slice() {
                    [] => {}
                    [i, j] => assert_eq!(j - i, 1, "non-adjacent change between steps"),
                    other => panic!("more than one swap between steps: {other:?}"),
                }
            }
            previous = Some(snapshot.to_vec());
        }
    }
    // Bubble on 32 elements: 32*31/2 steps.
    assert_eq!(steps, 32 * 31 / 2);
}

#[test]
fn empty_array_run_emits_only_finished() {
    let (controller, events) = Controller::new(fast_config(0)).expect("config is valid");
    assert!(controller.submit(Command::Start(SortKind::Quick)).is_accepted());
    controller.join();

    let collected: Vec<EngineEvent> = events.try_iter().collect();
    assert_eq!(collected.len(), 1);
    assert!(matches!(collected[0], EngineEvent::Finished(SortKind::Quick)));
}

#[test]
fn run_completes_after_receiver_is_dropped() {
    let config = fast_config(64).with_delay(Duration::from_millis(20));
    let (controller, events) = Controller::new(config).expect("config is valid");
    let before = controller.latest();

    assert!(controller.submit(Command::Start(SortKind::Bubble)).is_accepted());
    drop(events);
    // With the receiver gone the emitter stops pacing, so this join is
    // quick despite the 20 ms interval.
    controller.join();

    let mut expected = before.to_vec();
    expected.sort_unstable();
    assert_eq!(&*controller.latest(), expected.as_slice());
}

#[test]
fn concurrent_starts_accept_exactly_one() {
    use std::sync::mpsc;
    use std::thread;

    let config = fast_config(64).with_delay(Duration::from_millis(1));
    let (controller, _events) = Controller::new(config).expect("config is valid");
    let controller = std::sync::Arc::new(controller);

    let (tx, rx) = mpsc::channel();
    let barrier = std::sync::Arc::new(std::sync::Barrier::new(8));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let controller = std::sync::Arc::clone(&controller);
        let tx = tx.clone();
        let barrier = std::sync::Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let outcome = controller.submit(Command::Start(SortKind::Quick));
            tx.send(outcome).expect("collector alive");
        }));
    }
    for handle in handles {
        handle.join().expect("submitter thread");
    }
    drop(tx);

    let accepted = rx.iter().filter(|o| o.is_accepted()).count();
    assert_eq!(accepted, 1, "busy CAS must admit exactly one start");
    controller.join();
}
