use std::time::{Duration, Instant};

use jsontree::progress::{ProgressEvent, ProgressPhase, ProgressRun, Schedule};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_default_schedule_shape() {
    let schedule = Schedule::default();
    assert_eq!(schedule.step_count(), 10);
    assert_eq!(schedule.total(), ms(7200));

    let events = schedule.events();
    assert_eq!(events.first(), Some(&(Duration::ZERO, ProgressEvent::Step(0))));
    assert_eq!(events[1], (ms(500), ProgressEvent::Step(0)));
    assert_eq!(events[2], (ms(800), ProgressEvent::Step(1)));
    assert_eq!(events.last(), Some(&(ms(7200), ProgressEvent::Complete)));
}

#[test]
fn test_poll_yields_each_event_once() {
    let start = Instant::now();
    let schedule = Schedule::from_millis(&[100, 200], 50);
    let mut run = ProgressRun::start(&schedule, start);

    assert_eq!(run.poll(start), vec![ProgressEvent::Step(0)]);
    assert_eq!(run.poll(start), vec![]);
    assert_eq!(run.poll(start + ms(150)), vec![ProgressEvent::Step(0)]);
    assert_eq!(run.phase(), ProgressPhase::Running { step: 0 });

    assert_eq!(run.poll(start + ms(300)), vec![ProgressEvent::Step(1)]);
    assert_eq!(run.phase(), ProgressPhase::Running { step: 1 });
    assert!(!run.is_complete());

    assert_eq!(run.poll(start + ms(350)), vec![ProgressEvent::Complete]);
    assert!(run.is_complete());
    assert_eq!(run.until_next(start + ms(400)), None);
}

#[test]
fn test_late_poll_catches_up_in_order() {
    let start = Instant::now();
    let schedule = Schedule::from_millis(&[10, 10, 10], 10);
    let mut run = ProgressRun::start(&schedule, start);

    assert_eq!(
        run.poll(start + Duration::from_secs(1)),
        vec![
            ProgressEvent::Step(0),
            ProgressEvent::Step(0),
            ProgressEvent::Step(1),
            ProgressEvent::Step(2),
            ProgressEvent::Complete,
        ]
    );
}

#[test]
fn test_until_next_counts_down() {
    let start = Instant::now();
    let schedule = Schedule::from_millis(&[500], 500);
    let mut run = ProgressRun::start(&schedule, start);
    run.poll(start);

    assert_eq!(run.until_next(start + ms(200)), Some(ms(300)));
    assert_eq!(run.until_next(start + ms(900)), Some(Duration::ZERO));
}

#[test]
fn test_empty_schedule_only_reveals() {
    let start = Instant::now();
    let mut run = ProgressRun::start(&Schedule::from_millis(&[], 20), start);
    assert_eq!(run.poll(start + ms(20)), vec![ProgressEvent::Complete]);
}
