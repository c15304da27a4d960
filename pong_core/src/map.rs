use glam::Vec2;

use crate::error::{Error, Result};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Rectangle overlap test. Boxes that share an edge count as touching.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Playing field. Origin is the bottom-left corner, y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::invalid(
                "arena_width",
                format!("must be positive, got {width}"),
            ));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(Error::invalid(
                "arena_height",
                format!("must be positive, got {height}"),
            ));
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn left(&self) -> f32 {
        0.0
    }

    pub fn right(&self) -> f32 {
        self.width
    }

    pub fn bottom(&self) -> f32 {
        0.0
    }

    pub fn top(&self) -> f32 {
        self.height
    }
}
