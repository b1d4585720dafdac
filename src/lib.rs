//! Stoplight Run
//!
//! Game logic core for an educational traffic-light driving game. The
//! engine runs headless and display layers consume it through state
//! snapshots.

pub mod engine;
