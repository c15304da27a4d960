use glam::Vec2;
use pong_core::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TICK: f32 = 1.0 / 60.0;

fn new_match() -> MatchController {
    MatchController::new(Config::new()).unwrap()
}

fn assert_paddles_inside(game: &MatchController) {
    let arena = game.arena();
    for side in Side::BOTH {
        let paddle = game.paddle(side).unwrap();
        let half = paddle.size.y / 2.0;
        assert!(
            paddle.center.y - half >= 0.0 && paddle.center.y + half <= arena.height,
            "{side:?} paddle left the arena at y={}",
            paddle.center.y
        );
    }
}

#[test]
fn test_first_tick_from_serve() {
    let mut game = new_match();
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(3.0, -1.0));

    game.update(TICK);

    assert_eq!(game.ball().unwrap().pos, Vec2::new(403.0, 299.0));
}

#[test]
fn test_ball_past_left_edge_scores_for_right() {
    let mut game = new_match();
    game.place_ball(Vec2::new(-1.0, 300.0), Vec2::new(3.0, -1.0));
    let before = game.score(Side::Right);

    game.update(TICK);

    assert_eq!(game.score(Side::Right), before + 1);
    assert_eq!(game.score(Side::Left), 0);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(3.0, 1.0));
}

#[test]
fn test_ball_past_right_edge_scores_for_left() {
    let mut game = new_match();
    game.place_ball(Vec2::new(790.0, 550.0), Vec2::new(3.0, 0.0));

    game.update(TICK);

    assert_eq!(game.score(Side::Left), 1);
    assert_eq!(game.score(Side::Right), 0);
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(ball.vel, Vec2::new(-3.0, 1.0));
}

#[test]
fn test_rally_speeds_up_ball() {
    let mut game = new_match();
    // Straight at the right paddle's center
    game.place_ball(Vec2::new(700.0, 300.0), Vec2::new(5.0, 0.0));

    let mut bounced = false;
    for _ in 0..20 {
        game.update(TICK);
        if game.events().ball_hit_paddle() {
            bounced = true;
            break;
        }
    }

    assert!(bounced, "Ball should reach the right paddle");
    let vel = game.ball().unwrap().vel;
    assert!((vel.x + 6.0).abs() < 1e-4, "got {vel:?}");
    assert!(vel.y.abs() < 1e-4, "Centered hit adds no spin");
}

#[test]
fn test_wall_bounce_during_play() {
    let mut game = new_match();
    game.place_ball(Vec2::new(400.0, 30.0), Vec2::new(3.0, -10.0));

    game.update(TICK);

    assert!(game.events().ball_hit_wall());
    assert_eq!(game.ball().unwrap().vel, Vec2::new(3.0, 10.0));

    game.update(TICK);
    assert!(!game.events().ball_hit_wall(), "Heading back in, no second flip");
}

#[test]
fn test_held_key_drives_paddle_to_wall_and_stops() {
    let mut game = new_match();
    game.on_key_down(Key::W);

    for _ in 0..500 {
        game.update(TICK);
        assert_paddles_inside(&game);
    }

    let left = game.paddle(Side::Left).unwrap();
    assert_eq!(left.velocity_y, 2.0, "Velocity persists while pinned");
    assert!(left.center.y + left.size.y / 2.0 > 596.0);

    game.on_key_up(Key::W);
    game.on_key_down(Key::S);
    let pinned = game.paddle(Side::Left).unwrap().center.y;
    game.update(TICK);
    assert_eq!(game.paddle(Side::Left).unwrap().center.y, pinned - 2.0);
}

#[test]
fn test_long_match_with_random_input() {
    let mut game = new_match();
    let mut rng = StdRng::seed_from_u64(12345);
    let names = ["w", "s", "up", "down", "space"];

    for _ in 0..20_000 {
        if rng.gen_bool(0.1) {
            let name = names[rng.gen_range(0..names.len())];
            if rng.gen_bool(0.5) {
                game.on_key_down_named(name);
            } else {
                game.on_key_up_named(name);
            }
        }
        if rng.gen_bool(0.01) {
            let x = rng.gen_range(0.0..800.0);
            let y = rng.gen_range(-100.0..700.0);
            game.on_pointer_move(x, y);
        }

        game.update(TICK);
        assert_paddles_inside(&game);
        let ball = game.ball().unwrap();
        assert!(ball.pos.is_finite());
    }

    assert_eq!(game.time().tick, 20_000);
}

proptest! {
    #[test]
    fn prop_paddles_never_leave_arena(
        presses in proptest::collection::vec((0usize..4, any::<bool>(), 0u32..40), 1..60)
    ) {
        let mut game = new_match();
        for (key, down, ticks) in presses {
            let key = Key::ALL[key];
            if down {
                game.on_key_down(key);
            } else {
                game.on_key_up(key);
            }
            for _ in 0..ticks {
                game.update(TICK);
                let arena = game.arena();
                for side in Side::BOTH {
                    let paddle = game.paddle(side).unwrap();
                    let half = paddle.size.y / 2.0;
                    prop_assert!(paddle.center.y - half >= 0.0);
                    prop_assert!(paddle.center.y + half <= arena.height);
                }
            }
        }
    }

    #[test]
    fn prop_key_down_then_up_stops_paddle(
        history in proptest::collection::vec(0usize..4, 0..10),
        key in 0usize..4,
    ) {
        let mut game = new_match();
        for k in history {
            game.on_key_down(Key::ALL[k]);
        }
        let key = Key::ALL[key];
        game.on_key_down(key);
        game.on_key_up(key);

        let (side, _) = key.binding();
        prop_assert_eq!(game.paddle(side).unwrap().velocity_y, 0.0);
    }

    #[test]
    fn prop_free_flight_is_euler_step(
        x in 100.0f32..700.0,
        y in 100.0f32..500.0,
        vx in -10.0f32..10.0,
        vy in -10.0f32..10.0,
    ) {
        let mut game = new_match();
        game.place_ball(Vec2::new(x, y), Vec2::new(vx, vy));

        game.update(TICK);

        let ball = game.ball().unwrap();
        prop_assert_eq!(ball.pos, Vec2::new(x, y) + Vec2::new(vx, vy));
        prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
    }
}
