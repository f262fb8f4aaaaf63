//! Arena contents: walls, oscillating obstacles, coins and the goal zone

use serde::{Deserialize, Serialize};

use super::collision::{circle_rectangle_collision, get_distance, rectangle_collision};
use super::geom::{Circle, HasBounds, HasCircleBounds, Point, Rect};
use crate::consts::{COIN_PICKUP_TOLERANCE, COIN_PULSE_AMPLITUDE, COIN_PULSE_STEP};
use crate::levels::{CoinData, LevelData, ObstacleData};

/// A circle bouncing back and forth inside its oscillation box.
///
/// Obstacles pass through walls; only the player collides with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Obstacle {
    pub fn update(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x <= self.min_x || self.x >= self.max_x {
            self.speed_x = -self.speed_x;
        }
        if self.y <= self.min_y || self.y >= self.max_y {
            self.speed_y = -self.speed_y;
        }

        // min/max rather than clamp: inverted bounds pin to min instead of panicking
        self.x = self.x.min(self.max_x).max(self.min_x);
        self.y = self.y.min(self.max_y).max(self.min_y);
    }
}

impl From<&ObstacleData> for Obstacle {
    fn from(d: &ObstacleData) -> Self {
        Self {
            x: d.x,
            y: d.y,
            radius: d.radius,
            speed_x: d.speed_x,
            speed_y: d.speed_y,
            min_x: d.min_x,
            max_x: d.max_x,
            min_y: d.min_y,
            max_y: d.max_y,
        }
    }
}

impl HasCircleBounds for Obstacle {
    fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.radius)
    }
}

/// A collectible coin with a pulsing display radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub collected: bool,
    /// Animation phase (radians), cosmetic only
    pub pulse_phase: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            collected: false,
            pulse_phase: 0.0,
        }
    }

    /// Advance the pulse animation
    pub fn update(&mut self) {
        self.pulse_phase += COIN_PULSE_STEP;
    }

    /// Radius to draw at. Pickup always uses the base radius.
    pub fn display_radius(&self) -> f32 {
        self.radius * (1.0 + self.pulse_phase.sin() * COIN_PULSE_AMPLITUDE)
    }
}

impl From<&CoinData> for Coin {
    fn from(d: &CoinData) -> Self {
        Coin::new(d.x, d.y, d.radius)
    }
}

impl HasCircleBounds for Coin {
    fn circle(&self) -> Circle {
        Circle::new(self.x, self.y, self.radius)
    }
}

/// One loaded level. Walls, goal and bounds never change after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub player_start: Point,
    pub bounds: Rect,
    pub goal_zone: Rect,
    pub walls: Vec<Rect>,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
}

impl Level {
    pub fn new(data: &LevelData) -> Self {
        Self {
            player_start: Point::new(data.player_start.x, data.player_start.y),
            bounds: data.level_bounds,
            goal_zone: data.goal_zone,
            walls: data.walls.clone(),
            obstacles: data.obstacles.iter().map(Obstacle::from).collect(),
            coins: data.coins.iter().map(Coin::from).collect(),
        }
    }

    /// Advance obstacles and coin animation by one tick
    pub fn update(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
        for coin in &mut self.coins {
            coin.update();
        }
    }

    /// Index of the first obstacle touching `player`
    pub fn check_player_obstacle_collision(&self, player: &impl HasBounds) -> Option<usize> {
        let bounds = player.bounds();
        self.obstacles
            .iter()
            .position(|o| circle_rectangle_collision(&o.circle(), &bounds))
    }

    /// Collect at most one coin near the player's centre.
    ///
    /// Returns the index of the coin collected this call.
    pub fn check_player_coin_collision(&mut self, player: &impl HasBounds) -> Option<usize> {
        let center = player.center();
        let index = self.coins.iter().position(|coin| {
            !coin.collected
                && get_distance(center, coin.circle().center())
                    < coin.radius + COIN_PICKUP_TOLERANCE
        })?;
        self.coins[index].collected = true;
        Some(index)
    }

    pub fn check_player_goal_collision(&self, player: &impl HasBounds) -> bool {
        rectangle_collision(&player.bounds(), &self.goal_zone)
    }

    /// Vacuously true for a level without coins
    pub fn all_coins_collected(&self) -> bool {
        self.coins.iter().all(|c| c.collected)
    }

    pub fn collected_coins(&self) -> usize {
        self.coins.iter().filter(|c| c.collected).count()
    }

    pub fn total_coins(&self) -> usize {
        self.coins.len()
    }

    pub fn remaining_coins(&self) -> usize {
        self.total_coins() - self.collected_coins()
    }

    pub fn reset_coins(&mut self) {
        for coin in &mut self.coins {
            coin.collected = false;
        }
    }
}
