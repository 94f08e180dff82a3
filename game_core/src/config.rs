use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_velocity_initial: Vec2,
    pub ball_speed_increment: f32,
    pub max_bounce_angle: f32,
    pub opponent_tracking: f32,
    pub win_score: u8,
    pub ticks_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_velocity_initial: Vec2::new(Params::BALL_VELOCITY_X, Params::BALL_VELOCITY_Y),
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            opponent_tracking: Params::OPPONENT_TRACKING,
            win_score: Params::WIN_SCORE,
            ticks_per_second: Params::TICKS_PER_SECOND,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_win_score(mut self, win_score: u8) -> Self {
        self.win_score = win_score;
        self
    }

    pub fn board_center(&self) -> Vec2 {
        Vec2::new(self.board_width / 2.0, self.board_height / 2.0)
    }

    /// Y coordinate splitting the computer half (above) from the player half
    pub fn midline(&self) -> f32 {
        self.board_height / 2.0
    }

    /// Milliseconds between ticks for the frontend timer
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.ticks_per_second.max(1)
    }

    /// Top-left corner of the player's paddle, centered along the bottom edge
    pub fn player_paddle_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.board_width - self.paddle_width) / 2.0,
            self.board_height - self.paddle_height,
        )
    }

    /// Top-left corner of the computer's paddle, centered along the top edge
    pub fn computer_paddle_spawn(&self) -> Vec2 {
        Vec2::new((self.board_width - self.paddle_width) / 2.0, 0.0)
    }
}
