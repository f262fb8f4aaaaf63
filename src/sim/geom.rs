//! Geometry primitives shared by every body in the arena
//!
//! Plain value types. Behaviour beyond trivial accessors lives in
//! [`super::collision`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in arena space (pixels, y grows downward)
pub type Point = Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    #[serde(alias = "w")]
    pub width: f32,
    #[serde(alias = "h")]
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, moved so the top-left corner sits at `(x, y)`
    #[inline]
    pub fn at(&self, x: f32, y: f32) -> Self {
        Self { x, y, ..*self }
    }
}

/// Circle given by centre and radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Vec2::new(self.x, self.y)
    }
}

/// Anything occupying an axis-aligned box
pub trait HasBounds {
    fn bounds(&self) -> Rect;

    fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// Anything occupying a circle
pub trait HasCircleBounds {
    fn circle(&self) -> Circle;
}

impl HasBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl HasCircleBounds for Circle {
    fn circle(&self) -> Circle {
        *self
    }
}
