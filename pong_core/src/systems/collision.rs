use crate::{Arena, Ball, Config, Events, GameEvent, Paddle};
use hecs::World;

/// Let each paddle bounce the ball, left paddle first
pub fn bounce_off_paddles(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if let Some(offset) = paddle.bounce_ball(ball, config.ball_speedup) {
                tracing::trace!(side = ?paddle.side, offset, vel = ?ball.vel, "paddle bounce");
                events.push(GameEvent::PaddleBounce {
                    side: paddle.side,
                    offset,
                });
            }
        }
    }
}

/// Check top/bottom wall bounces.
///
/// Only a ball that is outside the arena and still heading further out gets
/// its vertical velocity flipped, so a ball lingering past the edge for
/// several ticks is not flipped back.
pub fn bounce_off_walls(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds();
        let below = bounds.min.y < arena.bottom() && ball.vel.y < 0.0;
        let above = bounds.max.y > arena.top() && ball.vel.y > 0.0;

        if below || above {
            ball.vel.y = -ball.vel.y;
            tracing::trace!(vel = ?ball.vel, "wall bounce");
            events.push(GameEvent::WallBounce {
                velocity_y: ball.vel.y,
            });
        }
    }
}
