//! Read-only frame description handed to a renderer

use serde::{Deserialize, Serialize};

use super::geom::{Circle, HasBounds, HasCircleBounds, Rect};
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinFrame {
    pub circle: Circle,
    /// Pulsing radius to draw with
    pub display_radius: f32,
    /// Collected coins are not drawn
    pub collected: bool,
}

/// Everything needed to draw one frame plus the HUD numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub level: u32,
    pub deaths: u32,
    pub phase: GamePhase,
    pub collected_coins: usize,
    pub total_coins: usize,
    pub player: Rect,
    pub obstacles: Vec<Circle>,
    pub coins: Vec<CoinFrame>,
    pub walls: Vec<Rect>,
    pub goal_zone: Rect,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let level = &state.level;
        Self {
            level: state.current_level,
            deaths: state.deaths,
            phase: state.phase,
            collected_coins: level.collected_coins(),
            total_coins: level.total_coins(),
            player: state.player.bounds(),
            obstacles: level.obstacles.iter().map(|o| o.circle()).collect(),
            coins: level
                .coins
                .iter()
                .map(|c| CoinFrame {
                    circle: c.circle(),
                    display_radius: c.display_radius(),
                    collected: c.collected,
                })
                .collect(),
            walls: level.walls.clone(),
            goal_zone: level.goal_zone,
        }
    }
}

impl GameState {
    /// Snapshot for the render sink
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }
}
