//! Simulated analysis progress.
//!
//! A fixed list of per-step delays drives a step index, followed by a reveal
//! once the last step has had its time. Nothing actually runs; callers poll a
//! [`ProgressRun`] with the current time and react to the events it yields.

use std::time::{Duration, Instant};

/// Event emitted by a running schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The given step became active.
    Step(usize),
    /// All steps are done and the result should be revealed.
    Complete,
}

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Running { step: usize },
    Complete,
}

/// Ordered step durations plus the reveal delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    steps: Vec<Duration>,
    reveal_delay: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::from_millis(&[500, 300, 800, 800, 1000, 600, 400, 1500, 300, 500], 500)
    }
}

impl Schedule {
    pub fn new(steps: Vec<Duration>, reveal_delay: Duration) -> Self {
        Self {
            steps,
            reveal_delay,
        }
    }

    pub fn from_millis(steps: &[u64], reveal_delay: u64) -> Self {
        Self::new(
            steps.iter().copied().map(Duration::from_millis).collect(),
            Duration::from_millis(reveal_delay),
        )
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Offset of the reveal from the start of the run.
    pub fn total(&self) -> Duration {
        self.steps.iter().sum::<Duration>() + self.reveal_delay
    }

    /// Every event with its offset from the start, in firing order.
    ///
    /// Step 0 is active immediately; step `i` is (re)announced once the
    /// durations of steps `0..=i` have elapsed; `Complete` follows after the
    /// reveal delay.
    pub fn events(&self) -> Vec<(Duration, ProgressEvent)> {
        let mut events = Vec::with_capacity(self.steps.len() + 2);
        if !self.steps.is_empty() {
            events.push((Duration::ZERO, ProgressEvent::Step(0)));
        }
        let mut offset = Duration::ZERO;
        for (i, duration) in self.steps.iter().enumerate() {
            offset += *duration;
            events.push((offset, ProgressEvent::Step(i)));
        }
        events.push((offset + self.reveal_delay, ProgressEvent::Complete));
        events
    }
}

/// A schedule started at a point in time.
#[derive(Debug, Clone)]
pub struct ProgressRun {
    started: Instant,
    events: Vec<(Duration, ProgressEvent)>,
    next: usize,
    phase: ProgressPhase,
}

impl ProgressRun {
    pub fn start(schedule: &Schedule, now: Instant) -> Self {
        log::info!(
            "simulated run started: {} steps over {:?}",
            schedule.step_count(),
            schedule.total()
        );
        Self {
            started: now,
            events: schedule.events(),
            next: 0,
            phase: ProgressPhase::Running { step: 0 },
        }
    }

    /// Events that became due since the last poll, in order. Each event is
    /// returned exactly once.
    pub fn poll(&mut self, now: Instant) -> Vec<ProgressEvent> {
        let elapsed = now.saturating_duration_since(self.started);
        let mut due = Vec::new();
        while let Some((offset, event)) = self.events.get(self.next).copied() {
            if offset > elapsed {
                break;
            }
            self.next += 1;
            self.phase = match event {
                ProgressEvent::Step(step) => ProgressPhase::Running { step },
                ProgressEvent::Complete => ProgressPhase::Complete,
            };
            due.push(event);
        }
        due
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ProgressPhase::Complete
    }

    /// Time until the next event, or `None` when nothing is left.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        let (offset, _) = self.events.get(self.next)?;
        Some((self.started + *offset).saturating_duration_since(now))
    }
}
