use crate::{Arena, Ball, Paddle};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

/// Apply paddle velocities.
///
/// A move that would push any part of the paddle past the top or bottom of
/// the arena is skipped for this tick. The velocity is kept, so a paddle
/// pinned against a wall stays put until its velocity changes sign.
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let half_height = paddle.size.y / 2.0;
        let candidate = paddle.center.y + paddle.velocity_y;

        if candidate - half_height > arena.bottom() && candidate + half_height < arena.top() {
            paddle.center.y = candidate;
        }
    }
}
