//! The game engine
//!
//! Owns all mutable game state and the two timed processes that drive
//! it: the fixed-period simulation tick and the traffic-light cycle.
//! Time is supplied externally through `advance`, which fires every
//! deadline inside the elapsed window in chronological order. That
//! keeps the engine deterministic: tests advance virtual time, the
//! console runner advances wall time.

use std::time::Duration;

use log::debug;

use super::config::GameConfig;
use super::light::LightCycle;
use super::state::GameState;
use super::types::{
    TrafficLight, CROSSWALK_SETBACK, LIGHT_LEAD_DISTANCE, LIGHT_SPACING, TICK_INTERVAL,
    VIOLATION_RADIUS,
};

/// The kinds of deadline the engine can owe.
#[derive(Debug, Clone, Copy)]
enum Deadline {
    Crosswalk,
    Light,
    Tick,
}

/// The game core. All mutation happens through its operations; no
/// operation blocks, returns an error, or panics. Invalid intents
/// (accelerating while the brake is held, braking in the open) are
/// absorbed as no-ops.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    /// Engine-local monotonic time, moved only by `advance`.
    clock: Duration,
    /// When the next simulation tick runs. Armed while the game is
    /// started.
    tick_due: Option<Duration>,
    lights: LightCycle,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            clock: Duration::ZERO,
            tick_due: None,
            lights: LightCycle::new(),
        }
    }

    /// Snapshot of the current state. Callers get a copy, never a live
    /// reference.
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // --- Game control ---

    /// Start the simulation tick and the light cycle. The cycle always
    /// begins at red, which also opens the pedestrian window. Calling
    /// this on a started engine re-arms both timers.
    pub fn start(&mut self) {
        self.state.started = true;
        self.state.is_moving = true;
        self.tick_due = Some(self.clock + TICK_INTERVAL);
        self.enter_light(TrafficLight::Red);
    }

    /// Halt the game: cancels the simulation tick, the pending light
    /// transition and the pending crosswalk expiry. Safe to call
    /// redundantly.
    pub fn stop(&mut self) {
        self.state.started = false;
        self.state.is_moving = false;
        self.tick_due = None;
        self.lights.cancel();
        self.lights.cancel_crosswalk();
    }

    /// Stop and restore the initial state.
    pub fn reset(&mut self) {
        self.stop();
        self.state = GameState::new(&self.config);
    }

    /// Tear the engine down. Equivalent to `stop`; consuming the
    /// engine guarantees nothing can drive it afterward.
    pub fn destroy(mut self) {
        self.stop();
    }

    // --- Vehicle control ---

    /// One-shot speed increment. The first call on a fresh engine
    /// starts the game instead. Ignored while the brake is held.
    pub fn accelerate(&mut self) {
        if !self.state.started {
            self.start();
            return;
        }
        if self.state.is_stopped {
            return;
        }
        self.state.speed =
            (self.state.speed + self.config.acceleration).min(self.config.max_speed);
        self.state.is_moving = true;
    }

    /// Brake and hold. Speed snaps back to the base speed, it does not
    /// ramp down.
    pub fn brake(&mut self) {
        self.state.is_stopped = true;
        self.state.is_moving = false;
        self.state.speed = self.config.base_speed;
    }

    /// Release the brake and move again.
    pub fn release_brake(&mut self) {
        self.state.is_stopped = false;
        self.state.is_moving = true;
    }

    // --- Violations ---

    /// True when the vehicle is running a red light: inside the
    /// violation window of the light, signal red, brake not held.
    /// Read-only; callers decide whether to penalize.
    pub fn traffic_light_violation(&self) -> bool {
        let distance_to_light = (self.state.distance - self.state.light_position).abs();
        distance_to_light < VIOLATION_RADIUS
            && self.state.light == TrafficLight::Red
            && !self.state.is_stopped
    }

    /// True when the vehicle is inside an active crosswalk window
    /// while pedestrians are crossing. Read-only.
    pub fn crosswalk_violation(&self) -> bool {
        let distance_to_crosswalk = (self.state.distance - self.state.crosswalk_position).abs();
        distance_to_crosswalk < VIOLATION_RADIUS
            && self.state.pedestrians_crossing
            && !self.state.is_stopped
    }

    // --- Score ---

    pub fn add_score(&mut self, points: u32) {
        self.state.add_score(points);
    }

    pub fn subtract_score(&mut self, points: u32) {
        self.state.subtract_score(points);
    }

    // --- Positioning ---

    /// Place the next traffic light. The crosswalk always sits
    /// `CROSSWALK_SETBACK` before it.
    pub fn set_light_position(&mut self, position: f32) {
        self.state.light_position = position;
        self.state.crosswalk_position = position - CROSSWALK_SETBACK;
    }

    // --- Clock ---

    /// Advance engine time by `elapsed`, firing every deadline that
    /// falls inside the window in chronological order.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.clock + elapsed;
        while let Some((due, kind)) = self.next_deadline(target) {
            self.clock = due;
            match kind {
                Deadline::Crosswalk => {
                    if self.lights.fire_crosswalk(self.clock) {
                        self.state.pedestrians_crossing = false;
                    }
                }
                Deadline::Light => {
                    if let Some(color) = self.lights.fire(self.clock) {
                        self.enter_light(color);
                    }
                }
                Deadline::Tick => self.step(),
            }
        }
        self.clock = target;
    }

    /// The earliest deadline at or before `target`, if any. Ties
    /// resolve in scheduling order: crosswalk, light, tick.
    fn next_deadline(&self, target: Duration) -> Option<(Duration, Deadline)> {
        [
            (self.lights.crosswalk_due(), Deadline::Crosswalk),
            (self.lights.next_due(), Deadline::Light),
            (self.tick_due, Deadline::Tick),
        ]
        .into_iter()
        .filter_map(|(due, kind)| due.map(|due| (due, kind)))
        .filter(|(due, _)| *due <= target)
        .min_by_key(|(due, _)| *due)
    }

    /// Apply a signal change and schedule the next one. Entering red
    /// opens the pedestrian window.
    fn enter_light(&mut self, color: TrafficLight) {
        self.state.light = color;
        debug!("traffic light is now {:?}", color);
        if color == TrafficLight::Red {
            self.state.pedestrians_crossing = true;
            self.lights.start_crosswalk(self.clock);
        }
        self.lights.arm(color, self.clock);
    }

    /// One simulation tick: integrate distance, spawn the next light
    /// when a spacing boundary is crossed, recompute the level.
    fn step(&mut self) {
        self.tick_due = Some(self.clock + TICK_INTERVAL);
        if !self.state.is_moving || self.state.is_stopped {
            return;
        }
        self.state.distance += self.state.speed;

        // The tick just crossed a multiple of the light spacing
        if self.state.distance % LIGHT_SPACING < self.state.speed {
            self.set_light_position(self.state.distance + LIGHT_LEAD_DISTANCE);
        }

        let level = (self.state.distance / self.config.level_up_distance) as u32 + 1;
        if level > self.state.level {
            self.state.level = level;
            debug!("level up to {}", level);
            // Resync the signal at the new difficulty, back to red
            self.enter_light(TrafficLight::Red);
        }
    }
}
