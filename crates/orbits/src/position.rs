//! Planar positions in a focus-centred orbital-plane frame.

use std::ops::{Add, Sub};

use orrery_core::vector::{self, Vector2};

/// Cartesian point in the orbital plane, in the same distance unit as the
/// semi-major axis. The origin is the focus occupied by the primary body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the focus.
    pub fn radius(&self) -> f64 {
        vector::norm(&self.to_array())
    }

    /// Polar angle measured counter-clockwise from +x, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (*self - *other).radius()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotate about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Position {
        vector::rotate(&self.to_array(), angle).into()
    }

    pub fn to_array(self) -> Vector2 {
        [self.x, self.y]
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl From<Position> for Vector2 {
    fn from(p: Position) -> Self {
        p.to_array()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        vector::add(&self.to_array(), &rhs.to_array()).into()
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        vector::sub(&self.to_array(), &rhs.to_array()).into()
    }
}
