use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use stoplight_run::engine::{
    GameConfig, GameEngine, GameState, TrafficLight, COMPLIANT_STOP_REWARD, TICK_INTERVAL,
    VIOLATION_PENALTY,
};

/// How far ahead of a red light the autopilot starts braking.
const BRAKE_WINDOW: f32 = 55.0;

/// Minimum time the autopilot holds the brake before it will release.
const BRAKE_HOLD: Duration = Duration::from_secs(2);

/// How often the autopilot taps the accelerate control.
const TAP_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Parser)]
#[command(name = "stoplight_run")]
#[command(about = "Traffic-light driving game, headless console demo")]
struct Cli {
    /// Simulated game length in seconds
    #[arg(long, default_value = "30")]
    seconds: u32,

    /// Skip the real-time delay between per-second summaries
    #[arg(long)]
    turbo: bool,

    /// Speed the vehicle starts at and returns to after braking
    #[arg(long, default_value = "1.0")]
    base_speed: f32,

    /// Ceiling that accelerating cannot push the speed past
    #[arg(long, default_value = "5.0")]
    max_speed: f32,

    /// Speed gained per accelerate press
    #[arg(long, default_value = "0.5")]
    acceleration: f32,

    /// Distance the vehicle must cover to gain a level
    #[arg(long, default_value = "1000.0")]
    level_up_distance: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig {
        base_speed: cli.base_speed,
        max_speed: cli.max_speed,
        acceleration: cli.acceleration,
        deceleration: 1.0,
        level_up_distance: cli.level_up_distance,
    };
    config.validate()?;

    run_demo(config, cli.seconds, cli.turbo);
    Ok(())
}

/// Drive the engine with the scripted autopilot for the requested game
/// length, printing a summary every simulated second.
fn run_demo(config: GameConfig, seconds: u32, turbo: bool) {
    let mut engine = GameEngine::new(config);
    let mut pilot = Autopilot::new();

    println!("Running stoplight run, headless...");
    println!("Game length: {}s", seconds);
    println!();

    // The first accelerate press is the implicit start
    engine.accelerate();
    info!("journey begins");

    let total = Duration::from_secs(seconds as u64);
    let mut now = Duration::ZERO;
    let mut next_summary = Duration::from_secs(1);

    while now < total {
        now += TICK_INTERVAL;
        pilot.drive(&mut engine, now);
        engine.advance(TICK_INTERVAL);
        pilot.observe(&mut engine);

        if now >= next_summary {
            print_summary(&engine.state(), next_summary);
            next_summary += Duration::from_secs(1);
            if !turbo {
                std::thread::sleep(Duration::from_millis(250));
            }
        }
    }

    let state = engine.state();
    println!();
    println!("=== GAME COMPLETE ===");
    println!("Distance traveled: {:.0}m", state.distance);
    println!("Final score: {} (level {})", state.score, state.level);
    println!("Compliant stops: {}", pilot.stops);
    println!("Violations: {}", pilot.violations);

    engine.destroy();
}

fn print_summary(state: &GameState, now: Duration) {
    println!(
        "--- {}s | light {:?} | speed {:.1} | distance {:.0}m | level {} | score {} ---",
        now.as_secs(),
        state.light,
        state.speed,
        state.distance,
        state.level,
        state.score
    );
    if state.pedestrians_crossing {
        println!("    pedestrians crossing");
    }
    if state.is_stopped {
        println!("    vehicle holding at the line");
    }
}

/// Scripted driver standing in for a player: taps accelerate, brakes
/// for red and yellow lights, holds the brake until the light clears,
/// and takes the penalty when caught inside a violation window.
struct Autopilot {
    /// Earliest time the held brake may release.
    brake_held_until: Option<Duration>,
    /// When the next accelerate tap lands.
    next_tap: Duration,
    /// Light placement already stopped at, to avoid farming the same
    /// light for repeat rewards.
    last_stop: Option<f32>,
    /// Violation flags from the previous tick, for edge detection.
    was_running_light: bool,
    was_in_crosswalk: bool,
    /// Tally for the final report.
    stops: u32,
    violations: u32,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            brake_held_until: None,
            next_tap: Duration::ZERO,
            last_stop: None,
            was_running_light: false,
            was_in_crosswalk: false,
            stops: 0,
            violations: 0,
        }
    }

    /// Decide this tick's input: keep holding, brake for a red light,
    /// or tap accelerate.
    fn drive(&mut self, engine: &mut GameEngine, now: Duration) {
        let state = engine.state();

        if let Some(held_until) = self.brake_held_until {
            // Hold at least the minimum and until the light clears
            if now >= held_until && state.light != TrafficLight::Red {
                engine.release_brake();
                self.brake_held_until = None;
                info!("brake released, moving again");
            }
            return;
        }

        let gap = state.light_position - state.distance;
        let already_stopped_here = self.last_stop == Some(state.light_position);
        if state.light != TrafficLight::Green
            && !already_stopped_here
            && (0.0..=BRAKE_WINDOW).contains(&gap)
        {
            engine.brake();
            if state.light == TrafficLight::Red {
                // Only a stop at red earns points
                engine.add_score(COMPLIANT_STOP_REWARD);
                info!("stopped at the red light (+{})", COMPLIANT_STOP_REWARD);
            } else {
                info!("slowing for the yellow light");
            }
            self.brake_held_until = Some(now + BRAKE_HOLD);
            self.last_stop = Some(state.light_position);
            self.stops += 1;
            return;
        }

        if now >= self.next_tap {
            engine.accelerate();
            self.next_tap = now + TAP_INTERVAL;
        }
    }

    /// Edge-detect violations against the previous tick and apply the
    /// penalty once per offense.
    fn observe(&mut self, engine: &mut GameEngine) {
        let running_light = engine.traffic_light_violation();
        if running_light && !self.was_running_light {
            engine.subtract_score(VIOLATION_PENALTY);
            self.violations += 1;
            warn!("ran a red light (-{})", VIOLATION_PENALTY);
        }
        self.was_running_light = running_light;

        let in_crosswalk = engine.crosswalk_violation();
        if in_crosswalk && !self.was_in_crosswalk {
            engine.subtract_score(VIOLATION_PENALTY);
            self.violations += 1;
            warn!("drove through an active crosswalk (-{})", VIOLATION_PENALTY);
        }
        self.was_in_crosswalk = in_crosswalk;
    }
}
