//! Core types and tuning constants for the game engine

use std::time::Duration;

/// Traffic signal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLight {
    Red,
    Yellow,
    Green,
}

impl TrafficLight {
    /// How long the signal holds this color before transitioning.
    pub fn dwell(self) -> Duration {
        match self {
            TrafficLight::Red => Duration::from_millis(3000),
            TrafficLight::Green => Duration::from_millis(2000),
            TrafficLight::Yellow => Duration::from_millis(1000),
        }
    }

    /// The color that follows this one. The cycle runs
    /// red -> green -> yellow -> red; there is no red+yellow phase.
    pub fn next(self) -> TrafficLight {
        match self {
            TrafficLight::Red => TrafficLight::Green,
            TrafficLight::Green => TrafficLight::Yellow,
            TrafficLight::Yellow => TrafficLight::Red,
        }
    }
}

/// Period of the simulation tick that integrates distance.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// How long pedestrians keep crossing after a light turns red.
pub const CROSSWALK_DURATION: Duration = Duration::from_millis(3000);

/// A new traffic light spawns each time the vehicle crosses a multiple
/// of this distance.
pub const LIGHT_SPACING: f32 = 150.0;

/// A spawned light is placed this far ahead of the vehicle.
pub const LIGHT_LEAD_DISTANCE: f32 = 100.0;

/// The crosswalk sits this far before its traffic light.
pub const CROSSWALK_SETBACK: f32 = 30.0;

/// Half-width of the window around a light or crosswalk in which a
/// moving vehicle counts as running it.
pub const VIOLATION_RADIUS: f32 = 50.0;

/// Points awarded for stopping at a red light.
pub const COMPLIANT_STOP_REWARD: u32 = 10;

/// Points deducted for running a red light or an active crosswalk.
pub const VIOLATION_PENALTY: u32 = 10;
