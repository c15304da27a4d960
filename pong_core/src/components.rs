use glam::Vec2;

use crate::map::Aabb;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,  // player 1, keys w/s
    Right, // player 2, arrow keys
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub center: Vec2,
    pub size: Vec2,
    pub score: u32,
    pub velocity_y: f32, // changed only by key events
}

impl Paddle {
    pub fn new(side: Side, center: Vec2, size: Vec2) -> Self {
        Self {
            side,
            center,
            size,
            score: 0,
            velocity_y: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    /// Send the ball back if it overlaps this paddle.
    ///
    /// The horizontal component is mirrored, the whole velocity is scaled by
    /// `speedup`, and the normalized contact offset (-1 at the bottom edge,
    /// 1 at the top) is added to the vertical component afterwards. Returns
    /// the offset when a bounce happened.
    pub fn bounce_ball(&self, ball: &mut Ball, speedup: f32) -> Option<f32> {
        if !self.bounds().intersects(&ball.bounds()) {
            return None;
        }

        let offset = (ball.pos.y - self.center.y) / (self.size.y / 2.0);
        let bounced = Vec2::new(-ball.vel.x, ball.vel.y) * speedup;
        ball.vel = Vec2::new(bounced.x, bounced.y + offset);
        Some(offset)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // center
    pub vel: Vec2, // units per tick
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// One tick of Euler integration
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Put the ball at `center` moving with `vel`
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size))
    }
}
