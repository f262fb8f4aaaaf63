//! Level catalog
//!
//! Levels are plain data records. The two built-in levels ship with the
//! game; custom sets can be loaded from a JSON array of the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::COIN_RADIUS;
use crate::sim::collision::is_in_bounds;
use crate::sim::geom::Rect;

/// Errors raised while loading level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(u32),

    #[error("level {0}: player spawn lies outside the level bounds")]
    SpawnOutOfBounds(u32),

    #[error("level {0}: goal zone lies outside the level bounds")]
    GoalOutOfBounds(u32),

    #[error("level set is empty")]
    Empty,

    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse level data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-left corner of the player at level start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleData {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinData {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_coin_radius")]
    pub radius: f32,
}

fn default_coin_radius() -> f32 {
    COIN_RADIUS
}

/// Immutable description of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    pub player_start: SpawnPoint,
    pub level_bounds: Rect,
    pub goal_zone: Rect,
    #[serde(default)]
    pub walls: Vec<Rect>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleData>,
    #[serde(default)]
    pub coins: Vec<CoinData>,
}

impl LevelData {
    /// Check that the spawn square and goal zone sit inside the level bounds.
    ///
    /// Nothing else about the geometry is checked.
    pub fn validate(&self, number: u32, player_size: f32) -> Result<(), LevelError> {
        let spawn = Rect::new(
            self.player_start.x,
            self.player_start.y,
            player_size,
            player_size,
        );
        if !is_in_bounds(&spawn, &self.level_bounds) {
            return Err(LevelError::SpawnOutOfBounds(number));
        }
        if !is_in_bounds(&self.goal_zone, &self.level_bounds) {
            return Err(LevelError::GoalOutOfBounds(number));
        }
        Ok(())
    }
}

/// Ordered collection of levels, numbered from 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: Vec<LevelData>,
}

impl LevelSet {
    pub fn new(levels: Vec<LevelData>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { levels })
    }

    /// The levels that ship with the game
    pub fn builtin() -> Self {
        Self {
            levels: vec![level_1(), level_2()],
        }
    }

    /// Parse a JSON array of level records
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelData> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// Load a JSON level file from disk
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        let set = Self::from_json(&json)?;
        log::info!("Loaded {} levels from {}", set.len(), path.display());
        Ok(set)
    }

    /// Level by 1-based number
    pub fn get(&self, number: u32) -> Option<&LevelData> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.levels.get(index)
    }

    /// Number of the last level
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn wall(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, width, height)
}

#[allow(clippy::too_many_arguments)]
const fn obstacle(
    x: f32,
    y: f32,
    radius: f32,
    speed_x: f32,
    speed_y: f32,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
) -> ObstacleData {
    ObstacleData {
        x,
        y,
        radius,
        speed_x,
        speed_y,
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

const fn coin(x: f32, y: f32) -> CoinData {
    CoinData {
        x,
        y,
        radius: COIN_RADIUS,
    }
}

/// 800x600 border walls shared by the built-in levels
fn border_walls() -> Vec<Rect> {
    vec![
        wall(0.0, 0.0, 800.0, 20.0),
        wall(0.0, 580.0, 800.0, 20.0),
        wall(0.0, 0.0, 20.0, 600.0),
        wall(780.0, 0.0, 20.0, 600.0),
    ]
}

fn level_1() -> LevelData {
    let mut walls = border_walls();
    walls.extend([wall(200.0, 100.0, 20.0, 200.0), wall(400.0, 300.0, 20.0, 200.0)]);

    LevelData {
        player_start: SpawnPoint { x: 50.0, y: 520.0 },
        level_bounds: Rect::new(20.0, 20.0, 760.0, 560.0),
        goal_zone: Rect::new(680.0, 500.0, 80.0, 60.0),
        walls,
        obstacles: vec![
            obstacle(300.0, 200.0, 15.0, 2.0, 0.0, 240.0, 360.0, 200.0, 200.0),
            obstacle(500.0, 150.0, 15.0, 0.0, 1.5, 500.0, 500.0, 120.0, 250.0),
            obstacle(600.0, 350.0, 15.0, -1.5, 1.0, 560.0, 700.0, 320.0, 420.0),
        ],
        coins: vec![coin(150.0, 300.0), coin(350.0, 450.0), coin(550.0, 100.0)],
    }
}

fn level_2() -> LevelData {
    let mut walls = border_walls();
    walls.extend([
        wall(150.0, 120.0, 20.0, 120.0),
        wall(250.0, 360.0, 20.0, 120.0),
        wall(400.0, 80.0, 20.0, 160.0),
        wall(400.0, 360.0, 20.0, 160.0),
        wall(550.0, 200.0, 20.0, 200.0),
    ]);

    LevelData {
        player_start: SpawnPoint { x: 50.0, y: 300.0 },
        level_bounds: Rect::new(20.0, 20.0, 760.0, 560.0),
        goal_zone: Rect::new(680.0, 280.0, 80.0, 40.0),
        walls,
        obstacles: vec![
            obstacle(200.0, 180.0, 12.0, 1.5, 0.0, 180.0, 320.0, 180.0, 180.0),
            obstacle(320.0, 420.0, 12.0, -1.5, 0.0, 280.0, 380.0, 420.0, 420.0),
            obstacle(450.0, 300.0, 12.0, 0.0, -2.0, 450.0, 450.0, 260.0, 340.0),
            obstacle(500.0, 150.0, 12.0, 1.0, 1.0, 440.0, 520.0, 120.0, 180.0),
            obstacle(600.0, 350.0, 12.0, -1.0, -1.5, 580.0, 650.0, 320.0, 380.0),
            obstacle(300.0, 250.0, 10.0, 0.8, 1.2, 270.0, 370.0, 220.0, 320.0),
        ],
        coins: vec![
            coin(120.0, 200.0),
            coin(220.0, 500.0),
            coin(350.0, 50.0),
            coin(480.0, 480.0),
            coin(620.0, 120.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_SIZE;

    #[test]
    fn test_builtin_levels_are_valid() {
        let set = LevelSet::builtin();
        assert_eq!(set.max_level(), 2);
        for n in 1..=set.max_level() {
            set.get(n).unwrap().validate(n, PLAYER_SIZE).unwrap();
        }
    }

    #[test]
    fn test_get_is_one_based() {
        let set = LevelSet::builtin();
        assert!(set.get(0).is_none());
        assert_eq!(set.get(1).unwrap().player_start, SpawnPoint { x: 50.0, y: 520.0 });
        assert_eq!(set.get(2).unwrap().coins.len(), 5);
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_parse_json_level() {
        let json = r#"[{
            "playerStart": {"x": 30, "y": 30},
            "levelBounds": {"x": 20, "y": 20, "w": 300, "h": 200},
            "goalZone": {"x": 250, "y": 150, "width": 50, "height": 50},
            "obstacles": [{"x": 100, "y": 100, "radius": 10, "speedX": 1, "speedY": 0,
                           "minX": 80, "maxX": 120, "minY": 100, "maxY": 100}],
            "coins": [{"x": 150, "y": 60}]
        }]"#;
        let set = LevelSet::from_json(json).unwrap();
        let level = set.get(1).unwrap();
        assert!(level.walls.is_empty());
        assert_eq!(level.obstacles[0].speed_x, 1.0);
        assert_eq!(level.coins[0].radius, COIN_RADIUS);
        assert_eq!(level.level_bounds.width, 300.0);
        level.validate(1, PLAYER_SIZE).unwrap();
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(LevelSet::from_json("[]"), Err(LevelError::Empty)));
        assert!(matches!(LevelSet::from_json("{"), Err(LevelError::Parse(_))));
    }

    #[test]
    fn test_validate_spawn_and_goal() {
        let mut data = LevelSet::builtin().get(1).unwrap().clone();
        data.player_start = SpawnPoint { x: 10.0, y: 520.0 };
        assert!(matches!(
            data.validate(1, PLAYER_SIZE),
            Err(LevelError::SpawnOutOfBounds(1))
        ));

        let mut data = LevelSet::builtin().get(1).unwrap().clone();
        data.goal_zone = Rect::new(700.0, 500.0, 100.0, 60.0);
        assert!(matches!(
            data.validate(1, PLAYER_SIZE),
            Err(LevelError::GoalOutOfBounds(1))
        ));
    }
}
