//! Geometry primitives for the play field
//!
//! Screen space: x grows to the right, y grows downward, the field's top
//! edge is y = 0. Positions are entity centers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Inclusive numeric range (`min <= max`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// A range holding a single value
    pub fn constant(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// `min <= max`
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl Range<f32> {
    /// Uniform sample in `[min, max]`
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.uniform_f32(self.min, self.max)
    }
}

impl Range<u32> {
    /// Uniform sample in `[min, max]`
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.uniform_u32(self.min, self.max)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centered at `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Interiors intersect. Boxes that only share an edge don't overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The visible play field (canvas) in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box entirely above the top edge
    #[inline]
    pub fn is_above(&self, bounds: &Aabb) -> bool {
        bounds.max.y < 0.0
    }

    /// Box entirely below the bottom edge
    #[inline]
    pub fn is_below(&self, bounds: &Aabb) -> bool {
        bounds.min.y > self.height
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
