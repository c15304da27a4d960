use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::{Error, Result};
use crate::map::Arena;
use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] default when omitted from a TOML
/// document. Velocities are in arena units per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_accel: f32,
    pub ball_size: f32,
    pub ball_speedup: f32,
    pub serve_opening: Vec2,
    pub serve_after_left_gutter: Vec2,
    pub serve_after_right_gutter: Vec2,
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_accel: Params::PADDLE_ACCEL,
            ball_size: Params::BALL_SIZE,
            ball_speedup: Params::BALL_SPEEDUP,
            serve_opening: Vec2::from_array(Params::SERVE_OPENING),
            serve_after_left_gutter: Vec2::from_array(Params::SERVE_AFTER_LEFT_GUTTER),
            serve_after_right_gutter: Vec2::from_array(Params::SERVE_AFTER_RIGHT_GUTTER),
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing, unparseable or fails validation.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Reject geometry the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        Arena::new(self.arena_width, self.arena_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        positive("ball_speedup", self.ball_speedup)?;
        positive("tick_rate", self.tick_rate)?;

        if self.paddle_height >= self.arena_height {
            return Err(Error::invalid(
                "paddle_height",
                format!(
                    "must be smaller than arena height {}, got {}",
                    self.arena_height, self.paddle_height
                ),
            ));
        }
        if self.ball_size >= self.arena_width.min(self.arena_height) {
            return Err(Error::invalid(
                "ball_size",
                format!("must fit inside the arena, got {}", self.ball_size),
            ));
        }
        if !self.paddle_accel.is_finite() {
            return Err(Error::invalid("paddle_accel", "must be finite"));
        }
        for (field, serve) in [
            ("serve_opening", self.serve_opening),
            ("serve_after_left_gutter", self.serve_after_left_gutter),
            ("serve_after_right_gutter", self.serve_after_right_gutter),
        ] {
            if !serve.is_finite() {
                return Err(Error::invalid(field, "must be finite"));
            }
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    /// Get X position for paddle center based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width / 2.0,
            Side::Right => self.arena_width - self.paddle_width / 2.0,
        }
    }

    /// Clamp paddle center Y so the whole paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.max(half_height).min(self.arena_height - half_height)
    }

    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be positive, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.serve_opening, Vec2::new(3.0, -1.0));
        assert_eq!(config.ball_speedup, 1.2);
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 12.5, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 787.5, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(0.0), half_height);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - half_height
        );
        let valid_y = 300.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_zero_paddle_height_rejected() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::default()
        };
        match config.validate() {
            Err(Error::InvalidConfiguration { field, .. }) => assert_eq!(field, "paddle_height"),
            other => panic!("expected invalid paddle_height, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_arena_rejected() {
        let config = Config {
            arena_width: -800.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration {
                field: "arena_width",
                ..
            })
        ));
    }

    #[test]
    fn test_paddle_taller_than_arena_rejected() {
        let config = Config {
            paddle_height: 600.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_overrides_and_defaults() {
        let config = Config::from_toml_str(
            r#"
            arena_width = 1024.0
            ball_speedup = 1.1
            serve_opening = [4.0, 2.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.arena_width, 1024.0);
        assert_eq!(config.ball_speedup, 1.1);
        assert_eq!(config.serve_opening, Vec2::new(4.0, 2.0));
        assert_eq!(config.arena_height, Params::ARENA_HEIGHT);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            Config::from_toml_str("arena_width = \"wide\""),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("arena_height = 0.0"),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load_or_default("/nonexistent/pong.toml");
        assert_eq!(config, Config::default());
    }
}
