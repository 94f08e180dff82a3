use glam::Vec2;

/// Which paddle a component or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Bottom edge, mouse controlled
    Computer, // Top edge, tracks the ball
}

impl Side {
    /// Vertical direction of the ball after bouncing off this side's paddle
    pub fn bounce_direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Computer => 1.0,
        }
    }
}

/// Paddle component - top-left anchored rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn bounds(&self) -> crate::Aabb {
        crate::Aabb::new(self.pos, self.pos + Vec2::new(self.width, self.height))
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Units per tick
    pub radius: f32,
    pub speed: f32, // Magnitude used for the next paddle bounce
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    pub fn bounds(&self) -> crate::Aabb {
        crate::Aabb::from_center_half_extent(self.pos, Vec2::splat(self.radius))
    }

    /// Re-center after a point. The horizontal velocity is kept so the
    /// serve heads back toward the side that conceded.
    pub fn reset(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.vel.y = -self.vel.y;
        self.speed = base_speed;
    }
}
