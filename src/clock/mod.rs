//! Simulated playback clock.
//!
//! Stands in for a media player: it advances a time cursor at a fixed
//! cadence and pushes each new time to its subscribers. A one-shot mode
//! delivers a single externally supplied time instead.

mod driver;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

pub use driver::OverlayDriver;

/// Default wall-clock interval between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Default media time advanced per tick (seconds).
pub const DEFAULT_STEP_SECONDS: f64 = 0.25;

/// Receives time updates from a [`Player`].
pub trait TimeObserver: Send {
    fn time_update(&mut self, time: f64);
}

/// Handle returned by [`Player::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fixed-cadence clock that notifies subscribed observers.
pub struct Player {
    observers: Vec<(SubscriptionId, Box<dyn TimeObserver>)>,
    next_id: u64,
    current_time: f64,
    interval: Duration,
    step: f64,
}

impl Player {
    /// Create a clock at time zero.
    ///
    /// # Arguments
    /// * `interval` - Wall-clock delay between ticks
    /// * `step` - Media seconds added per tick
    pub fn new(interval: Duration, step: f64) -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            current_time: 0.0,
            interval,
            step,
        }
    }

    /// Start from `time` instead of zero. The first tick lands at `time + step`.
    pub fn starting_at(mut self, time: f64) -> Self {
        self.current_time = round_time(time);
        self
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn subscribe(&mut self, observer: Box<dyn TimeObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a subscriber. Returns it if it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Box<dyn TimeObserver>> {
        let pos = self.observers.iter().position(|(sub, _)| *sub == id)?;
        Some(self.observers.remove(pos).1)
    }

    /// Advance by one step and notify every subscriber. Returns the new time.
    pub fn tick(&mut self) -> f64 {
        self.current_time = round_time(self.current_time + self.step);
        self.notify(self.current_time);
        self.current_time
    }

    /// Deliver a single time to every subscriber without advancing the clock.
    pub fn emit(&mut self, time: f64) {
        self.notify(round_time(time));
    }

    /// Tick every `interval` until `stop` is raised or the clock passes
    /// `stop_after`. Returns the last time delivered.
    pub fn play(&mut self, stop: &AtomicBool, stop_after: Option<f64>) -> f64 {
        tracing::info!(
            start = self.current_time,
            interval_ms = self.interval.as_millis() as u64,
            step = self.step,
            "playback started"
        );

        while !stop.load(Ordering::SeqCst) {
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
            if stop.load(Ordering::SeqCst) {
                break;
            }

            let time = self.tick();
            if stop_after.map_or(false, |limit| time >= limit) {
                break;
            }
        }

        tracing::info!(time = self.current_time, "playback stopped");
        self.current_time
    }

    fn notify(&mut self, time: f64) {
        for (_, observer) in &mut self.observers {
            observer.time_update(time);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, DEFAULT_STEP_SECONDS)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("current_time", &self.current_time)
            .field("interval", &self.interval)
            .field("step", &self.step)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

/// Round to microseconds so repeated stepping does not drift.
pub fn round_time(time: f64) -> f64 {
    (time * 1_000_000.0).round() / 1_000_000.0
}

/// Parse a time argument: either `3.5` or `currentTime=3.5`.
pub fn parse_time_arg(arg: &str) -> Result<f64, String> {
    let value = arg
        .trim()
        .strip_prefix("currentTime=")
        .unwrap_or(arg.trim());

    let time: f64 = value
        .parse()
        .map_err(|_| format!("invalid time '{}': expected seconds, e.g. 3.5", arg))?;

    if !time.is_finite() || time < 0.0 {
        return Err(format!("invalid time '{}': must be a non-negative number", arg));
    }
    Ok(time)
}
