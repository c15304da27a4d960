use std::fmt;

use glam::Vec2;
use hecs::World;

use crate::error::Result;
use crate::input::{pointer_target, InputState, Key};
use crate::systems::*;
use crate::{create_ball, create_paddle, Arena, Ball, Config, Events, GameEvent, Paddle, Side};
use crate::{TickClock, Time};

/// Observer called with every event the match raises
pub type Listener = Box<dyn FnMut(&GameEvent) + Send>;

/// Owns the ball, both paddles and the arena, and runs the match one fixed
/// tick at a time.
///
/// All mutation goes through `&mut self`, so ticks and input events are
/// serialized by the borrow checker. A host that receives input on another
/// thread can put the controller behind a `Mutex`.
pub struct MatchController {
    world: World,
    config: Config,
    arena: Arena,
    time: Time,
    clock: TickClock,
    events: Events,
    input: InputState,
    listeners: Vec<Listener>,
}

impl MatchController {
    /// Validate `config`, place both paddles at mid height and serve
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let arena = config.arena();
        let mut world = World::new();

        let center = arena.center();
        create_paddle(&mut world, &config, Side::Left, center.y);
        create_paddle(&mut world, &config, Side::Right, center.y);
        create_ball(&mut world, center, Vec2::ZERO, config.ball_size);

        let mut controller = Self {
            world,
            clock: TickClock::new(config.tick_rate),
            arena,
            config,
            time: Time::new(),
            events: Events::new(),
            input: InputState::new(),
            listeners: Vec::new(),
        };
        let opening = controller.config.serve_opening;
        controller.serve_ball(opening);
        Ok(controller)
    }

    /// Register an observer for paddle bounces, wall bounces, points and serves
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reset the ball to the arena center moving with `velocity`
    pub fn serve_ball(&mut self, velocity: Vec2) {
        let mut served = Events::new();
        serve_ball(&mut self.world, &self.arena, velocity, &mut served);
        for event in served.iter() {
            notify(&mut self.listeners, event);
        }
        self.events.list.extend(served.list);
    }

    /// Run exactly one tick.
    ///
    /// Motion uses whole-tick velocities, so `_dt` does not scale anything;
    /// use [`advance`](Self::advance) when the host's frame rate varies.
    pub fn update(&mut self, _dt: f32) {
        // Clear events at start of tick
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.world);

        // 2. Bounce off paddles (left, then right)
        bounce_off_paddles(&mut self.world, &self.config, &mut self.events);

        // 3. Bounce off top and bottom
        bounce_off_walls(&mut self.world, &self.arena, &mut self.events);

        // 4. Gutters for points
        check_scoring(&mut self.world, &self.arena, &self.config, &mut self.events);

        // 5. Move paddles, keeping them inside the arena
        move_paddles(&mut self.world, &self.arena);

        self.time.advance(self.clock.step);

        for event in self.events.iter() {
            notify(&mut self.listeners, event);
        }
    }

    /// Feed `elapsed` seconds of wall-clock time and run every tick now due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let ticks = self.clock.advance(elapsed);
        let step = self.clock.step;
        for _ in 0..ticks {
            self.update(step);
        }
        ticks
    }

    /// Accelerate the paddle bound to `key`. Repeats of a held key are ignored.
    pub fn on_key_down(&mut self, key: Key) {
        if !self.input.press(key) {
            return;
        }
        let (side, direction) = key.binding();
        let accel = direction * self.config.paddle_accel;
        self.with_paddle(side, |paddle| paddle.velocity_y += accel);
    }

    /// Stop the paddle bound to `key`
    pub fn on_key_up(&mut self, key: Key) {
        self.input.release(key);
        let (side, _) = key.binding();
        self.with_paddle(side, |paddle| paddle.velocity_y = 0.0);
    }

    /// [`on_key_down`](Self::on_key_down) by toolkit key name. Returns whether
    /// the key was recognized.
    pub fn on_key_down_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.on_key_down(key);
                true
            }
            None => false,
        }
    }

    pub fn on_key_up_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.on_key_up(key);
                true
            }
            None => false,
        }
    }

    /// Put the paddle under the pointer at height `y`, bypassing its velocity.
    /// The position is clamped so the paddle stays inside the arena.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(side) = pointer_target(&self.arena, x) else {
            return;
        };
        let y = self.config.clamp_paddle_y(y);
        self.with_paddle(side, |paddle| paddle.center.y = y);
    }

    /// Follow a resized display surface. Paddles are re-anchored to the new
    /// edges and pulled back inside; the ball is left where it is.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let config = Config {
            arena_width: width,
            arena_height: height,
            ..self.config.clone()
        };
        config.validate()?;

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.center.x = config.paddle_x(paddle.side);
            paddle.center.y = config.clamp_paddle_y(paddle.center.y);
        }
        tracing::debug!(width, height, "arena resized");
        self.arena = config.arena();
        self.config = config;
        Ok(())
    }

    /// Move the ball directly, e.g. to restore a saved position
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).map_or(0, |p| p.score)
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the latest tick (plus any serve since)
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Fraction of the next tick already accumulated by [`advance`](Self::advance)
    pub fn interpolation_alpha(&self) -> f32 {
        self.clock.alpha()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn with_paddle(&mut self, side: Side, f: impl FnOnce(&mut Paddle)) {
        if let Some((_entity, paddle)) = self
            .world
            .query_mut::<&mut Paddle>()
            .into_iter()
            .find(|(_e, p)| p.side == side)
        {
            f(paddle);
        }
    }
}

fn notify(listeners: &mut [Listener], event: &GameEvent) {
    for listener in listeners.iter_mut() {
        listener(event);
    }
}

impl fmt::Debug for MatchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchController")
            .field("arena", &self.arena)
            .field("ball", &self.ball())
            .field("left", &self.paddle(Side::Left))
            .field("right", &self.paddle(Side::Right))
            .field("time", &self.time)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
