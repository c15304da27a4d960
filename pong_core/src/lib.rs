pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use error::Error;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity at its edge of the arena
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let center = Vec2::new(config.paddle_x(side), y);
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, center, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
