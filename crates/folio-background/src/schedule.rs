//! Frame scheduling and the deferred click-flash timeline.

use std::time::{Duration, Instant};

use folio_core::Rgb;
use rand::Rng;

use crate::scene::DecorativeObject;

/// Delay between consecutive objects in a click flash sequence.
pub const FLASH_STAGGER: Duration = Duration::from_millis(50);

/// How long each object shows its flash color.
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Source of frame ticks and of the time they happen at.
pub trait FrameScheduler {
    /// Monotonic time since the scheduler's origin.
    fn now(&self) -> Duration;

    /// Ask for one more frame.
    fn request_next_frame(&mut self);

    /// Drop any pending frame request.
    fn cancel(&mut self);
}

/// Wall-clock scheduler that spaces frames at a fixed interval.
///
/// The host loop polls [`PacedScheduler::is_due`] and runs a frame when it
/// returns true.
#[derive(Debug)]
pub struct PacedScheduler {
    origin: Instant,
    interval: Duration,
    next_due: Option<Instant>,
}

impl PacedScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            origin: Instant::now(),
            interval,
            next_due: None,
        }
    }

    /// Whether a requested frame is ready to run.
    pub fn is_due(&self) -> bool {
        self.next_due.is_some_and(|due| Instant::now() >= due)
    }

    /// Time left until the pending frame, `None` when nothing is pending.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(Instant::now()))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameScheduler for PacedScheduler {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn request_next_frame(&mut self) {
        self.next_due = Some(Instant::now() + self.interval);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FlashAction {
    Flash(Rgb),
    Restore,
}

#[derive(Debug, Clone, Copy)]
struct FlashEvent {
    due: Duration,
    seq: u64,
    object: usize,
    action: FlashAction,
}

/// Pending emissive changes scheduled by clicks.
///
/// Sequences from overlapping clicks are kept side by side; events fire in
/// due order and the last write to an object's emissive state wins.
#[derive(Debug, Default)]
pub struct FlashTimeline {
    events: Vec<FlashEvent>,
    next_seq: u64,
}

impl FlashTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a staggered flash over `count` objects starting at `now`.
    pub fn schedule_click<R: Rng>(&mut self, now: Duration, count: usize, rng: &mut R) {
        for object in 0..count {
            let start = now + FLASH_STAGGER * object as u32;
            let color = Rgb::from_hsl(rng.gen_range(0.0..1.0), 1.0, 0.5);
            self.push(start, object, FlashAction::Flash(color));
            self.push(start + FLASH_DURATION, object, FlashAction::Restore);
        }
    }

    /// Apply every event due at or before `now`. Returns how many fired.
    pub fn fire_due(&mut self, now: Duration, objects: &mut [DecorativeObject]) -> usize {
        let (mut due, pending): (Vec<FlashEvent>, Vec<FlashEvent>) =
            self.events.iter().partition(|e| e.due <= now);
        self.events = pending;
        due.sort_by_key(|e| (e.due, e.seq));

        for event in &due {
            let Some(obj) = objects.get_mut(event.object) else {
                continue;
            };
            match event.action {
                FlashAction::Flash(color) => {
                    obj.emissive = color;
                    obj.flashing = true;
                    obj.glow = 0.0;
                }
                FlashAction::Restore => {
                    obj.emissive = obj.base_emissive();
                    obj.flashing = false;
                }
            }
        }
        due.len()
    }

    /// Number of events still waiting.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, due: Duration, object: usize, action: FlashAction) {
        self.next_seq += 1;
        self.events.push(FlashEvent {
            due,
            seq: self.next_seq,
            object,
            action,
        });
    }
}
