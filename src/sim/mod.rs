//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per `tick` call, no clock assumptions
//! - No randomness
//! - Stable iteration order (declaration order of level data)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod level;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{
    check_wall_collision, circle_collision, circle_rectangle_collision, get_distance,
    is_in_bounds, point_in_rectangle, rectangle_collision,
};
pub use geom::{Circle, HasBounds, HasCircleBounds, Point, Rect};
pub use level::{Coin, Level, Obstacle};
pub use player::{InputState, Key, Player};
pub use snapshot::{CoinFrame, Frame};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
