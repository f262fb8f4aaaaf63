//! Demo/idle input driver
//!
//! Plays the game well enough for an attract screen or a headless smoke run:
//! heads for the nearest uncollected coin (then the goal) and wanders off in a
//! random direction when blocked. Seeded, so a given seed always produces the
//! same run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, HasBounds, InputState, Point, TickInput};

/// Shortest and longest time a chosen direction is held (ticks)
const MIN_HOLD: u32 = 8;
const MAX_HOLD: u32 = 30;
/// Chance of steering at the target rather than wandering
const SEEK_CHANCE: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    keys: InputState,
    hold_ticks: u32,
    last_pos: Option<Point>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keys: InputState::default(),
            hold_ticks: 0,
            last_pos: None,
        }
    }

    /// Decide the input for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let pos = state.player.position();
        let stuck = self.last_pos == Some(pos) && self.keys != InputState::default();
        self.last_pos = Some(pos);

        if self.hold_ticks == 0 || stuck {
            self.keys = if !stuck && self.rng.random_bool(SEEK_CHANCE) {
                seek(state)
            } else {
                self.wander()
            };
            self.hold_ticks = self.rng.random_range(MIN_HOLD..=MAX_HOLD);
        }
        self.hold_ticks -= 1;

        TickInput {
            keys: self.keys,
            ..Default::default()
        }
    }

    fn wander(&mut self) -> InputState {
        let mut keys = InputState::default();
        match self.rng.random_range(0..3) {
            0 => keys.up = true,
            1 => keys.down = true,
            _ => {}
        }
        match self.rng.random_range(0..3) {
            0 => keys.left = true,
            1 => keys.right = true,
            _ => {}
        }
        keys
    }
}

/// Keys pointing the player at the nearest open coin, or the goal
fn seek(state: &GameState) -> InputState {
    let center = state.player.center();
    let target = state
        .level
        .coins
        .iter()
        .filter(|c| !c.collected)
        .map(|c| Point::new(c.x, c.y))
        .min_by(|a, b| {
            a.distance_squared(center)
                .partial_cmp(&b.distance_squared(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|| state.level.goal_zone.center());

    let delta = target - center;
    let dead_zone = state.player.speed;
    InputState {
        up: delta.y < -dead_zone,
        down: delta.y > dead_zone,
        left: delta.x < -dead_zone,
        right: delta.x > dead_zone,
        ..Default::default()
    }
}
