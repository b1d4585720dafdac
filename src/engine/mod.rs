//! Standalone game engine module
//!
//! This module contains all the core game logic: the timed
//! traffic-light cycle, the distance integration loop, violation
//! detection, scoring and leveling. It has no rendering dependencies
//! and can be driven from a console runner or a test harness.

mod config;
mod game;
mod light;
mod state;
mod types;

pub use config::GameConfig;
pub use game::GameEngine;
pub use state::GameState;
pub use types::{
    TrafficLight, COMPLIANT_STOP_REWARD, CROSSWALK_DURATION, CROSSWALK_SETBACK,
    LIGHT_LEAD_DISTANCE, LIGHT_SPACING, TICK_INTERVAL, VIOLATION_PENALTY, VIOLATION_RADIUS,
};
