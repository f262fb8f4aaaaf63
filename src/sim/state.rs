//! Game state and level lifecycle
//!
//! The host owns one `GameState` and drives it with [`super::tick::tick`].

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::player::Player;
use crate::levels::{LevelError, LevelSet};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen; ticks do nothing until unpaused
    Paused,
    /// Level won, waiting for `next_level`
    LevelComplete,
    /// Final level won; only `reset_game` leaves this phase
    GameComplete,
}

/// Lifecycle notifications produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched an obstacle; `deaths` is the new total
    PlayerDied { deaths: u32 },
    /// A coin was picked up
    CoinCollected { remaining: usize },
    /// Every coin collected and the goal reached
    LevelCompleted { is_final_level: bool },
}

/// Complete game state: one live level and player at a time
#[derive(Debug, Clone)]
pub struct GameState {
    /// Level catalog
    pub levels: LevelSet,
    /// Current level number (1-based)
    pub current_level: u32,
    /// Deaths since the last full reset
    pub deaths: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Live level
    pub level: Level,
    /// Live player
    pub player: Player,
    player_speed: f32,
    player_size: f32,
}

impl GameState {
    /// Start a game on the configured start level.
    ///
    /// Fails without building any state if that level does not exist.
    pub fn new(levels: LevelSet, settings: &Settings) -> Result<Self, LevelError> {
        let first_level = settings.start_level;
        let (level, player) =
            build_level(&levels, first_level, settings.player_size, settings.player_speed)?;
        log::info!("Level {} loaded", first_level);

        Ok(Self {
            levels,
            current_level: first_level,
            deaths: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            level,
            player,
            player_speed: settings.player_speed,
            player_size: settings.player_size,
        })
    }

    /// Built-in levels with default settings
    pub fn with_defaults() -> Result<Self, LevelError> {
        Self::new(LevelSet::builtin(), &Settings::default())
    }

    /// Replace the live level and player with a fresh copy of `number`.
    ///
    /// On error nothing changes.
    pub fn load_level(&mut self, number: u32) -> Result<(), LevelError> {
        let (level, player) =
            match build_level(&self.levels, number, self.player_size, self.player_speed) {
                Ok(built) => built,
                Err(e) => {
                    log::warn!("Failed to load level {}: {}", number, e);
                    return Err(e);
                }
            };
        self.level = level;
        self.player = player;
        self.current_level = number;
        self.phase = GamePhase::Playing;
        log::info!("Level {} loaded", number);
        Ok(())
    }

    /// Advance to the following level
    pub fn next_level(&mut self) -> Result<(), LevelError> {
        self.load_level(self.current_level + 1)
    }

    /// Reload the current level. The death counter is kept.
    pub fn restart_level(&mut self) -> Result<(), LevelError> {
        self.load_level(self.current_level)
    }

    /// Back to level 1 with the death counter cleared.
    ///
    /// Ignores the configured start level, which only applies to `new`.
    pub fn reset_game(&mut self) -> Result<(), LevelError> {
        self.load_level(1)?;
        self.deaths = 0;
        self.time_ticks = 0;
        Ok(())
    }

    /// Toggle between playing and paused; other phases are unaffected
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    pub fn is_final_level(&self) -> bool {
        self.current_level >= self.levels.max_level()
    }

    /// Count the death and reset the attempt. Obstacles keep moving as before.
    pub(crate) fn player_died(&mut self) -> GameEvent {
        self.deaths += 1;
        self.player
            .reset(self.level.player_start.x, self.level.player_start.y);
        self.level.reset_coins();
        log::debug!("Player died on level {} (deaths: {})", self.current_level, self.deaths);
        GameEvent::PlayerDied {
            deaths: self.deaths,
        }
    }

    pub(crate) fn level_completed(&mut self) -> GameEvent {
        let is_final_level = self.is_final_level();
        if is_final_level {
            self.phase = GamePhase::GameComplete;
            log::info!("Game complete with {} deaths", self.deaths);
        } else {
            self.phase = GamePhase::LevelComplete;
            log::info!("Level {} complete", self.current_level);
        }
        GameEvent::LevelCompleted { is_final_level }
    }
}

fn build_level(
    levels: &LevelSet,
    number: u32,
    player_size: f32,
    player_speed: f32,
) -> Result<(Level, Player), LevelError> {
    let data = levels.get(number).ok_or(LevelError::NotFound(number))?;
    data.validate(number, player_size)?;
    let level = Level::new(data);
    let player = Player::with_size(
        level.player_start.x,
        level.player_start.y,
        player_size,
        player_speed,
    );
    Ok((level, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Point;

    #[test]
    fn test_new_starts_playing_level_one() {
        let state = GameState::with_defaults().unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.deaths, 0);
        assert_eq!(state.player.position(), Point::new(50.0, 520.0));
        assert_eq!(state.level.total_coins(), 3);
    }

    #[test]
    fn test_unknown_start_level_fails() {
        let settings = Settings {
            start_level: 7,
            ..Default::default()
        };
        let err = GameState::new(LevelSet::builtin(), &settings).unwrap_err();
        assert!(matches!(err, LevelError::NotFound(7)));
    }

    #[test]
    fn test_failed_load_keeps_current_level() {
        let mut state = GameState::with_defaults().unwrap();
        state.next_level().unwrap();
        assert_eq!(state.current_level, 2);

        let err = state.next_level().unwrap_err();
        assert!(matches!(err, LevelError::NotFound(3)));
        assert_eq!(state.current_level, 2);
        assert_eq!(state.level.total_coins(), 5);
    }

    #[test]
    fn test_restart_keeps_deaths_reset_clears() {
        let mut state = GameState::with_defaults().unwrap();
        state.player_died();
        state.player_died();
        state.next_level().unwrap();

        state.restart_level().unwrap();
        assert_eq!(state.current_level, 2);
        assert_eq!(state.deaths, 2);

        state.reset_game().unwrap();
        assert_eq!(state.current_level, 1);
        assert_eq!(state.deaths, 0);
    }

    #[test]
    fn test_reset_returns_to_level_one_from_start_level() {
        let settings = Settings {
            start_level: 2,
            ..Default::default()
        };
        let mut state = GameState::new(LevelSet::builtin(), &settings).unwrap();
        assert_eq!(state.current_level, 2);
        state.player_died();

        state.restart_level().unwrap();
        assert_eq!(state.current_level, 2);

        state.reset_game().unwrap();
        assert_eq!(state.current_level, 1);
        assert_eq!(state.deaths, 0);
        assert_eq!(state.player.position(), Point::new(50.0, 520.0));
    }

    #[test]
    fn test_toggle_pause_only_between_playing_and_paused() {
        let mut state = GameState::with_defaults().unwrap();
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::LevelComplete;
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_completion_phase_depends_on_final_level() {
        let mut state = GameState::with_defaults().unwrap();
        assert_eq!(
            state.level_completed(),
            GameEvent::LevelCompleted {
                is_final_level: false
            }
        );
        assert_eq!(state.phase, GamePhase::LevelComplete);

        state.next_level().unwrap();
        assert_eq!(
            state.level_completed(),
            GameEvent::LevelCompleted {
                is_final_level: true
            }
        );
        assert_eq!(state.phase, GamePhase::GameComplete);
    }
}
