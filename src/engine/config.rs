//! Engine configuration

use anyhow::{ensure, Result};

/// Tuning parameters for a game engine, fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Speed the vehicle starts at and returns to after braking.
    pub base_speed: f32,
    /// Ceiling that accelerating cannot push the speed past.
    pub max_speed: f32,
    /// Speed gained per accelerate call.
    pub acceleration: f32,
    /// Reserved. Braking snaps the speed to `base_speed` rather than
    /// ramping it down, so this value is never read.
    pub deceleration: f32,
    /// Distance the vehicle must cover to gain a level.
    pub level_up_distance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_speed: 1.0,
            max_speed: 5.0,
            acceleration: 0.5,
            deceleration: 1.0,
            level_up_distance: 1000.0,
        }
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable game.
    ///
    /// The engine itself accepts any config; callers that take values
    /// from the outside world should validate first.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.base_speed > 0.0, "base speed must be positive");
        ensure!(
            self.max_speed >= self.base_speed,
            "max speed must be at least the base speed"
        );
        ensure!(self.acceleration > 0.0, "acceleration must be positive");
        ensure!(
            self.level_up_distance > 0.0,
            "level up distance must be positive"
        );
        Ok(())
    }
}
