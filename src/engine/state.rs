//! Observable game state
//!
//! The engine owns the single live instance; display layers and other
//! observers only ever receive snapshot copies of it.

use super::config::GameConfig;
use super::types::TrafficLight;

/// Everything a display layer needs to render one frame of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Vehicle currently advancing.
    pub is_moving: bool,
    /// Vehicle braked and held at the line.
    pub is_stopped: bool,
    /// Current scalar speed, kept within the configured speed band.
    pub speed: f32,
    /// Cumulative distance traveled. Never decreases except on reset.
    pub distance: f32,
    /// Difficulty tier derived from distance. Starts at 1.
    pub level: u32,
    /// Player score. Cannot go negative.
    pub score: u32,
    /// Current signal color. The cycle starts at red.
    pub light: TrafficLight,
    /// Distance coordinate of the nearest upcoming traffic light.
    pub light_position: f32,
    /// Distance coordinate of the crosswalk belonging to that light.
    pub crosswalk_position: f32,
    /// Whether pedestrians are in the crossing window.
    pub pedestrians_crossing: bool,
    /// Whether the simulation and light cycle are active.
    pub started: bool,
}

impl GameState {
    /// Fresh state for a new or reset game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            is_moving: false,
            is_stopped: false,
            speed: config.base_speed,
            distance: 0.0,
            level: 1,
            score: 0,
            light: TrafficLight::Red,
            light_position: 0.0,
            crosswalk_position: 0.0,
            pedestrians_crossing: false,
            started: false,
        }
    }

    /// Award points.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Deduct points, clamping at zero.
    pub fn subtract_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}
