//! Hardest Game - A top-down obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, motion, game state)
//! - `levels`: Built-in level catalog and JSON level loading
//! - `settings`: Data-driven tuning (player speed/size, start level)
//! - `autopilot`: Seeded demo input driver

pub mod autopilot;
pub mod levels;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use levels::{LevelData, LevelError, LevelSet};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Player square side length (pixels)
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player movement per tick along each held axis (pixels)
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 8.0;
    /// Extra reach added to a coin's radius when testing pickup distance
    pub const COIN_PICKUP_TOLERANCE: f32 = 10.0;
    /// Pulse animation advance per tick (radians)
    pub const COIN_PULSE_STEP: f32 = 0.1;
    /// Pulse amplitude as a fraction of the coin radius
    pub const COIN_PULSE_AMPLITUDE: f32 = 0.2;

    /// Default host tick rate (ticks per second)
    pub const DEFAULT_TICK_RATE: u32 = 60;
}
