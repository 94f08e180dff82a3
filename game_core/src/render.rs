//! Render pass
//!
//! Turns a snapshot of the match into a flat list of drawing intents. The
//! frontend replays them onto whatever surface it has; nothing here touches
//! a canvas.

use crate::{Ball, Config, MatchState, Net, Outcome, Paddle, Score};

pub const BACKGROUND: &str = "#005236";
pub const FOREGROUND: &str = "#FFF";
pub const HIGHLIGHT: &str = "yellow";

pub const LABEL_FONT: &str = "38px fantasy";
pub const SCORE_FONT: &str = "48px fantasy";
pub const BANNER_FONT: &str = "25px fantasy";

/// A single drawing intent in board coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: &'static str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: &'static str,
        font: &'static str,
    },
}

/// Immutable view of everything the render pass needs
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub state: MatchState,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    pub score: Score,
    pub tick: u32,
}

/// Build the frame for the current match state
pub fn render(snapshot: &Snapshot, net: &Net, config: &Config) -> Vec<DrawCommand> {
    let mut frame = Vec::new();
    clear(&mut frame, config);

    match snapshot.state {
        MatchState::NotStarted => draw_start_prompt(&mut frame, config),
        MatchState::Playing => draw_board(&mut frame, snapshot, net, config),
        MatchState::GameOver(outcome) => draw_game_over(&mut frame, outcome, config),
    }

    frame
}

fn clear(frame: &mut Vec<DrawCommand>, config: &Config) {
    frame.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        w: config.board_width,
        h: config.board_height,
        color: BACKGROUND,
    });
}

fn text(
    frame: &mut Vec<DrawCommand>,
    text: impl Into<String>,
    x: f32,
    y: f32,
    color: &'static str,
    font: &'static str,
) {
    frame.push(DrawCommand::Text {
        text: text.into(),
        x,
        y,
        color,
        font,
    });
}

fn paddle(frame: &mut Vec<DrawCommand>, paddle: &Paddle) {
    frame.push(DrawCommand::Rect {
        x: paddle.pos.x,
        y: paddle.pos.y,
        w: paddle.width,
        h: paddle.height,
        color: FOREGROUND,
    });
}

fn draw_start_prompt(frame: &mut Vec<DrawCommand>, config: &Config) {
    let center = config.board_center();
    text(
        frame,
        "PRESS ENTER TO START THE GAME",
        center.x - 158.0,
        center.y,
        FOREGROUND,
        BANNER_FONT,
    );
}

fn draw_board(frame: &mut Vec<DrawCommand>, snapshot: &Snapshot, net: &Net, config: &Config) {
    let w = config.board_width;
    let h = config.board_height;

    // Computer on top, player at the bottom
    text(frame, "COMPUTER", w / 2.0 - 86.0, h / 4.0, FOREGROUND, LABEL_FONT);
    text(
        frame,
        snapshot.score.computer.to_string(),
        20.0,
        h / 2.0 - 20.0,
        FOREGROUND,
        SCORE_FONT,
    );
    text(frame, "USER", w / 2.0 - 40.0, h / 1.25, FOREGROUND, LABEL_FONT);
    text(
        frame,
        snapshot.score.player.to_string(),
        20.0,
        h / 2.0 + 58.0,
        FOREGROUND,
        SCORE_FONT,
    );

    paddle(frame, &snapshot.computer);
    paddle(frame, &snapshot.player);

    for segment in &net.segments {
        frame.push(DrawCommand::Rect {
            x: segment.left(),
            y: segment.top(),
            w: segment.right() - segment.left(),
            h: segment.bottom() - segment.top(),
            color: FOREGROUND,
        });
    }

    frame.push(DrawCommand::Circle {
        x: snapshot.ball.pos.x,
        y: snapshot.ball.pos.y,
        r: snapshot.ball.radius,
        color: FOREGROUND,
    });
}

fn draw_game_over(frame: &mut Vec<DrawCommand>, outcome: Outcome, config: &Config) {
    let center = config.board_center();
    text(
        frame,
        "GAME OVER",
        center.x - 58.0,
        center.y,
        FOREGROUND,
        BANNER_FONT,
    );

    // Offsets roughly center each banner
    let offset = match outcome {
        Outcome::Winner(crate::Side::Computer) => 80.0,
        Outcome::Winner(crate::Side::Player) => 52.0,
        Outcome::Tie => 55.0,
    };
    text(
        frame,
        outcome.message(),
        center.x - offset,
        center.y + 30.0,
        HIGHLIGHT,
        BANNER_FONT,
    );
}
