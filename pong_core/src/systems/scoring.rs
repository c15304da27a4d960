use crate::{Arena, Ball, Config, Events, GameEvent, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Reset the ball to the arena center with the given velocity
pub fn serve_ball(world: &mut World, arena: &Arena, velocity: Vec2, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(arena.center(), velocity);
    }
    tracing::debug!(vel = ?velocity, "serve");
    events.push(GameEvent::Serve { velocity });
}

/// Check if ball left the arena through a gutter (scoring)
pub fn check_scoring(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let exit = world
        .query::<&Ball>()
        .iter()
        .next()
        .and_then(|(_e, ball)| {
            let bounds = ball.bounds();
            if bounds.min.x < arena.left() {
                // Past the left paddle: right player scores
                Some((Side::Right, config.serve_after_left_gutter))
            } else if bounds.max.x > arena.right() {
                Some((Side::Left, config.serve_after_right_gutter))
            } else {
                None
            }
        });

    let Some((scorer, serve)) = exit else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            tracing::debug!(scorer = ?scorer, score = paddle.score, "point scored");
            events.push(GameEvent::Scored {
                scorer,
                score: paddle.score,
            });
        }
    }

    serve_ball(world, arena, serve, events);
}
