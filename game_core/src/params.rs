/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 400.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 7.0;
    pub const BALL_VELOCITY_X: f32 = 5.0; // Serve velocity, units per tick
    pub const BALL_VELOCITY_Y: f32 = 5.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.1; // Added on every paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Opponent
    pub const OPPONENT_TRACKING: f32 = 0.1; // Fraction of the gap closed per tick

    // Net
    pub const NET_SEGMENT_WIDTH: f32 = 10.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 2.0;
    pub const NET_SEGMENT_SPACING: f32 = 15.0;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Timing
    pub const TICKS_PER_SECOND: u32 = 50;
}
