//! Deferred transition scheduling for the traffic light
//!
//! The signal is a cooperative state machine: at most one pending
//! light transition and one pending crosswalk expiry exist at a time,
//! and scheduling a new one supersedes the old. Every deadline carries
//! the generation it was scheduled under; a deadline whose generation
//! is no longer current is discarded instead of fired, so a canceled
//! timer can never mutate state late.

use std::time::Duration;

use super::types::{TrafficLight, CROSSWALK_DURATION};

/// A scheduled change of the signal color.
#[derive(Debug, Clone, Copy)]
struct PendingLight {
    due: Duration,
    color: TrafficLight,
    generation: u64,
}

/// A scheduled end of the pedestrian crossing window.
#[derive(Debug, Clone, Copy)]
struct PendingCrosswalk {
    due: Duration,
    generation: u64,
}

/// Scheduler for the light cycle and its crosswalk sub-cycle.
#[derive(Debug, Default)]
pub(crate) struct LightCycle {
    pending: Option<PendingLight>,
    generation: u64,
    crosswalk: Option<PendingCrosswalk>,
    crosswalk_generation: u64,
}

impl LightCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the transition out of `color`, superseding any pending
    /// transition.
    pub fn arm(&mut self, color: TrafficLight, now: Duration) {
        self.generation += 1;
        self.pending = Some(PendingLight {
            due: now + color.dwell(),
            color: color.next(),
            generation: self.generation,
        });
    }

    /// Drop the pending transition. A no-op when none is pending.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// When the next signal change is due, if one is scheduled.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Consume the pending transition if it is due at `now`. A stale
    /// generation is discarded without firing.
    pub fn fire(&mut self, now: Duration) -> Option<TrafficLight> {
        let pending = self.pending?;
        if pending.due > now {
            return None;
        }
        self.pending = None;
        if pending.generation != self.generation {
            return None;
        }
        Some(pending.color)
    }

    /// Schedule the pedestrian window expiry, superseding any pending
    /// expiry.
    pub fn start_crosswalk(&mut self, now: Duration) {
        self.crosswalk_generation += 1;
        self.crosswalk = Some(PendingCrosswalk {
            due: now + CROSSWALK_DURATION,
            generation: self.crosswalk_generation,
        });
    }

    /// Drop the pending crosswalk expiry. A no-op when none is pending.
    pub fn cancel_crosswalk(&mut self) {
        self.crosswalk_generation += 1;
        self.crosswalk = None;
    }

    /// When the pedestrian window closes, if one is open.
    pub fn crosswalk_due(&self) -> Option<Duration> {
        self.crosswalk.map(|c| c.due)
    }

    /// Consume the crosswalk expiry if it is due at `now`. Returns
    /// whether the window should actually close.
    pub fn fire_crosswalk(&mut self, now: Duration) -> bool {
        let Some(crosswalk) = self.crosswalk else {
            return false;
        };
        if crosswalk.due > now {
            return false;
        }
        self.crosswalk = None;
        crosswalk.generation == self.crosswalk_generation
    }
}
