use crate::{Ball, Config, Events, GameEvent, Score, Side};
use hecs::World;

/// Check if ball left the board through the top or bottom edge
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.y + ball.radius > config.board_height {
            // Got past the player
            Some(Side::Computer)
        } else if ball.pos.y - ball.radius < 0.0 {
            // Got past the computer
            Some(Side::Player)
        } else {
            None
        };

        if let Some(side) = scorer {
            score.increment(side);
            events.push(GameEvent::PointScored(side));
            log::info!(
                "{:?} scored, player {} - computer {}",
                side,
                score.player,
                score.computer
            );

            ball.reset(config.board_center(), config.ball_speed_base);
        }
    }
}
