//! Discrete simulation tick
//!
//! Core game loop step. The host calls `tick` once per frame at whatever
//! rate it likes; nothing here reads a clock.

use serde::{Deserialize, Serialize};

use super::player::InputState;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Movement keys held at the start of the tick
    pub keys: InputState,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Restart the current level (one-shot)
    pub restart: bool,
}

/// Advance the game by one step and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        state.toggle_pause();
    }

    if input.restart && state.restart_level().is_err() {
        return events;
    }

    // Paused, or waiting on the host to advance/reset
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;
    state.player.keys = input.keys;

    // Obstacles and coin animation first, then the player
    state.level.update();
    state.player.update(&state.level.bounds, &state.level.walls);

    if state
        .level
        .check_player_obstacle_collision(&state.player)
        .is_some()
    {
        events.push(state.player_died());
        return events;
    }

    if state.level.check_player_coin_collision(&state.player).is_some() {
        let remaining = state.level.remaining_coins();
        log::debug!("Coin collected ({} remaining)", remaining);
        events.push(GameEvent::CoinCollected { remaining });
    }

    // Goal contact with coins outstanding is ignored
    if state.level.check_player_goal_collision(&state.player) && state.level.all_coins_collected()
    {
        events.push(state.level_completed());
    }

    events
}
