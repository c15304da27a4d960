/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    pub const PADDLE_ACCEL: f32 = 2.0; // velocity change per key press

    // Ball
    pub const BALL_SIZE: f32 = 50.0;
    pub const BALL_SPEEDUP: f32 = 1.2; // Multiply velocity on paddle hit

    // Serves (units per tick)
    pub const SERVE_OPENING: [f32; 2] = [3.0, -1.0];
    pub const SERVE_AFTER_LEFT_GUTTER: [f32; 2] = [3.0, 1.0];
    pub const SERVE_AFTER_RIGHT_GUTTER: [f32; 2] = [-3.0, 1.0];

    // Timing
    pub const TICK_RATE: f32 = 60.0; // Hz
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent spiral of death
}
