use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Simulation time, counted in whole ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub tick: u64, // Ticks run so far
    pub now: f32,  // Nominal elapsed seconds (tick * step)
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, step: f32) {
        self.tick += 1;
        self.now += step;
    }
}

/// Turns variable frame deltas into a whole number of fixed ticks.
///
/// Physics always moves by whole-tick velocities, so a host that cannot
/// promise a steady 60 Hz feeds its frame time here and runs the returned
/// number of ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    pub step: f32,
    accumulator: f32,
}

impl TickClock {
    pub fn new(tick_rate: f32) -> Self {
        Self {
            step: 1.0 / tick_rate,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks are now due
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Clamp dt to prevent large jumps; NaN and negatives count as zero
        let dt = if dt.is_nan() { 0.0 } else { dt.clamp(0.0, Params::MAX_FRAME_DT) };
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of the next tick already accumulated, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Params::TICK_RATE)
    }
}

/// Something presentation or audio may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Serve { velocity: Vec2 },
    PaddleBounce { side: Side, offset: f32 },
    WallBounce { velocity_y: f32 },
    Scored { scorer: Side, score: u32 },
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.iter()
            .any(|e| matches!(e, GameEvent::PaddleBounce { .. }))
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.iter().any(|e| matches!(e, GameEvent::WallBounce { .. }))
    }

    pub fn scored(&self, side: Side) -> bool {
        self.iter()
            .any(|e| matches!(e, GameEvent::Scored { scorer, .. } if *scorer == side))
    }
}
