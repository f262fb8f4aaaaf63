//! The player square and its directional input

use serde::{Deserialize, Serialize};

use super::collision::{check_wall_collision, is_in_bounds};
use super::geom::{HasBounds, Point, Rect};
use crate::consts::{PLAYER_SIZE, PLAYER_SPEED};

/// A physical key the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Left,
    Down,
    Right,
}

impl Key {
    /// Map a host key name (`"w"`, `"ArrowUp"`, ...) to a movement key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "arrowup" | "up" => Some(Key::Up),
            "arrowleft" | "left" => Some(Key::Left),
            "arrowdown" | "down" => Some(Key::Down),
            "arrowright" | "right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Snapshot of the eight movement keys, taken once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl InputState {
    /// Record a key press or release
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.w = pressed,
            Key::A => self.a = pressed,
            Key::S => self.s = pressed,
            Key::D => self.d = pressed,
            Key::Up => self.up = pressed,
            Key::Left => self.left = pressed,
            Key::Down => self.down = pressed,
            Key::Right => self.right = pressed,
        }
    }

    #[inline]
    pub fn move_up(&self) -> bool {
        self.w || self.up
    }

    #[inline]
    pub fn move_down(&self) -> bool {
        self.s || self.down
    }

    #[inline]
    pub fn move_left(&self) -> bool {
        self.a || self.left
    }

    #[inline]
    pub fn move_right(&self) -> bool {
        self.d || self.right
    }
}

/// The player-controlled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick on each held axis
    pub speed: f32,
    /// Input snapshot used for the current tick
    pub keys: InputState,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_size(x, y, PLAYER_SIZE, PLAYER_SPEED)
    }

    pub fn with_size(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            speed,
            keys: InputState::default(),
        }
    }

    /// Apply one tick of movement.
    ///
    /// The candidate position is accepted only if it stays inside `arena` and
    /// touches no wall; otherwise the player does not move at all this tick.
    /// There is no sliding along walls.
    pub fn update(&mut self, arena: &Rect, walls: &[Rect]) {
        let mut new_x = self.x;
        let mut new_y = self.y;

        if self.keys.move_up() {
            new_y -= self.speed;
        }
        if self.keys.move_down() {
            new_y += self.speed;
        }
        if self.keys.move_left() {
            new_x -= self.speed;
        }
        if self.keys.move_right() {
            new_x += self.speed;
        }

        let candidate = self.bounds().at(new_x, new_y);
        if is_in_bounds(&candidate, arena) && check_wall_collision(&candidate, walls).is_none() {
            self.x = new_x;
            self.y = new_y;
        }
    }

    /// Move back to a spawn point. Held keys are kept.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl HasBounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Rect {
        Rect::new(20.0, 20.0, 760.0, 560.0)
    }

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for &k in keys {
            input.set(k, true);
        }
        input
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("W"), Some(Key::W));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Escape"), None);
    }

    #[test]
    fn test_letter_and_arrow_are_or_combined() {
        let input = held(&[Key::W, Key::Up]);
        assert!(input.move_up());
        let mut p = Player::new(100.0, 100.0);
        p.keys = input;
        p.update(&arena(), &[]);
        // Both keys for the same direction still move only once
        assert_eq!(p.position(), Point::new(100.0, 97.0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let mut p = Player::new(100.0, 100.0);
        p.keys = held(&[Key::D, Key::Down]);
        p.update(&arena(), &[]);
        assert_eq!(p.position(), Point::new(103.0, 103.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut p = Player::new(100.0, 100.0);
        p.keys = held(&[Key::Up, Key::S, Key::Left, Key::Right]);
        p.update(&arena(), &[]);
        assert_eq!(p.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_wall_blocks_move() {
        let mut p = Player::new(100.0, 100.0);
        p.keys = held(&[Key::Right]);
        // Wall starts 1px to the right of the player's right edge
        let walls = [Rect::new(121.0, 0.0, 20.0, 300.0)];
        p.update(&arena(), &walls);
        assert_eq!(p.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_blocked_diagonal_does_not_slide() {
        let mut p = Player::new(100.0, 100.0);
        p.keys = held(&[Key::Right, Key::Down]);
        // Only the horizontal component would hit the wall
        let walls = [Rect::new(121.0, 0.0, 20.0, 300.0)];
        p.update(&arena(), &walls);
        assert_eq!(p.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_move_up_to_wall_edge_is_allowed() {
        let mut p = Player::new(100.0, 103.0);
        p.keys = held(&[Key::Up]);
        // Landing flush against the wall's bottom edge is not a collision
        let walls = [Rect::new(0.0, 0.0, 300.0, 100.0)];
        p.update(&arena(), &walls);
        assert_eq!(p.position(), Point::new(100.0, 100.0));
        p.update(&arena(), &walls);
        assert_eq!(p.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_arena_edge_stops_player() {
        let mut p = Player::new(21.0, 100.0);
        p.keys = held(&[Key::A]);
        p.update(&arena(), &[]);
        // 21 - 3 = 18 would leave the arena
        assert_eq!(p.position(), Point::new(21.0, 100.0));
    }

    #[test]
    fn test_reset_moves_to_spawn() {
        let mut p = Player::new(300.0, 300.0);
        p.reset(50.0, 520.0);
        assert_eq!(p.bounds(), Rect::new(50.0, 520.0, 20.0, 20.0));
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        any::<[bool; 8]>().prop_map(|k| InputState {
            w: k[0],
            a: k[1],
            s: k[2],
            d: k[3],
            up: k[4],
            left: k[5],
            down: k[6],
            right: k[7],
        })
    }

    proptest! {
        #[test]
        fn prop_player_never_leaves_arena(inputs in proptest::collection::vec(arb_input(), 1..200)) {
            let arena = arena();
            let walls = [Rect::new(200.0, 100.0, 20.0, 200.0)];
            let mut p = Player::new(50.0, 520.0);
            for input in inputs {
                p.keys = input;
                p.update(&arena, &walls);
                prop_assert!(is_in_bounds(&p.bounds(), &arena));
                prop_assert!(check_wall_collision(&p.bounds(), &walls).is_none());
            }
        }
    }
}
