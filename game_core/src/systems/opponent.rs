use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the computer paddle a fixed fraction of the way toward the ball.
///
/// Closing only part of the gap each tick caps how fast the opponent can
/// react, so fast angled shots get past it.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x);

    let Some(ball_x) = ball_x else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Computer {
            let gap = ball_x - (paddle.pos.x + paddle.width / 2.0);
            paddle.pos.x += gap * config.opponent_tracking;
        }
    }
}
