use glam::Vec2;

use crate::Config;

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

    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.bottom() > other.top()
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Dashed center line, purely decorative
#[derive(Debug, Clone)]
pub struct Net {
    pub segments: Vec<Aabb>,
}

impl Net {
    pub fn new(config: &Config) -> Self {
        let size = Vec2::new(
            crate::Params::NET_SEGMENT_WIDTH,
            crate::Params::NET_SEGMENT_HEIGHT,
        );
        let y = (config.board_height - size.y) / 2.0;

        let mut segments = Vec::new();
        let mut x = 0.0;
        while x <= config.board_width {
            let min = Vec2::new(x, y);
            segments.push(Aabb::new(min, min + size));
            x += crate::Params::NET_SEGMENT_SPACING;
        }

        Self { segments }
    }
}
