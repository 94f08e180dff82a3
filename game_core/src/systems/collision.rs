use crate::{Ball, Config, Events, GameEvent, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Bounding-box test between the ball and a paddle
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.bounds().overlaps(&ball.bounds())
}

/// Recompute the ball's velocity after it strikes `paddle`.
///
/// The hit offset from the paddle center is normalized to [-1, 1] and mapped
/// onto [-max_bounce_angle, max_bounce_angle]. The vertical component always
/// points away from the paddle, and every hit makes the next one faster.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) {
    let half_width = paddle.width / 2.0;
    let collide_point = ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let angle = collide_point * config.max_bounce_angle;
    let direction = paddle.side.bounce_direction();

    ball.vel = Vec2::new(
        ball.speed * angle.sin(),
        direction * ball.speed * angle.cos(),
    );
    ball.speed += config.ball_speed_increment;
}

/// Check ball collisions with the side walls and the paddle on the ball's half
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > config.board_width {
            ball.vel.x = -ball.vel.x;
            events.push(GameEvent::WallBounce);
            log::debug!("Ball hit side wall at x={:.1}", ball.pos.x);
        }

        let side = if ball.pos.y + ball.radius > config.midline() {
            Side::Player
        } else {
            Side::Computer
        };

        let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
            continue;
        };

        if collides(ball, paddle) {
            bounce_off_paddle(ball, paddle, config);
            events.push(GameEvent::PaddleHit(side));
            log::debug!("{:?} paddle hit, ball speed now {:.1}", side, ball.speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn paddle_at(side: Side, x: f32, y: f32) -> Paddle {
        Paddle::new(side, Vec2::new(x, y), 100.0, 10.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(5.0, 5.0), 10.0, 7.0)
    }

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_collides_when_boxes_overlap() {
        let paddle = paddle_at(Side::Player, 150.0, 590.0);
        assert!(collides(&ball_at(200.0, 585.0), &paddle));
        // Ball's box corner just inside the paddle's top-left corner
        assert!(collides(&ball_at(141.0, 581.0), &paddle));
    }

    #[test]
    fn test_no_collision_when_separated_on_one_axis() {
        let paddle = paddle_at(Side::Player, 150.0, 590.0);
        // Horizontally aligned but above the paddle
        assert!(!collides(&ball_at(200.0, 570.0), &paddle));
        // Vertically aligned but left of the paddle
        assert!(!collides(&ball_at(130.0, 595.0), &paddle));
        // Touching edges exactly is not an overlap
        assert!(!collides(&ball_at(200.0, 580.0), &paddle));
        assert!(!collides(&ball_at(260.0, 595.0), &paddle));
    }

    #[test]
    fn test_collision_invariant_under_translation() {
        let offsets = [
            Vec2::new(-120.0, 35.0),
            Vec2::new(3.5, -400.0),
            Vec2::new(1000.0, 1000.0),
        ];
        let cases = [
            (ball_at(200.0, 585.0), true),
            (ball_at(200.0, 570.0), false),
            (ball_at(255.0, 595.0), true),
            (ball_at(265.0, 595.0), false),
        ];
        let paddle = paddle_at(Side::Player, 150.0, 590.0);

        for (ball, expected) in cases {
            assert_eq!(collides(&ball, &paddle), expected);
            for offset in offsets {
                let mut moved_ball = ball;
                moved_ball.pos += offset;
                let mut moved_paddle = paddle;
                moved_paddle.pos += offset;
                assert_eq!(
                    collides(&moved_ball, &moved_paddle),
                    expected,
                    "Translation by {offset:?} changed the result"
                );
            }
        }
    }

    #[test]
    fn test_center_hit_goes_straight() {
        let config = Config::new();
        let paddle = paddle_at(Side::Player, 150.0, 590.0);
        let mut ball = ball_at(200.0, 585.0);
        let speed = ball.speed;

        bounce_off_paddle(&mut ball, &paddle, &config);

        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(ball.vel.y.abs(), speed);
        assert!(ball.vel.y < 0.0, "Player hit sends the ball up");
    }

    #[test]
    fn test_edge_hit_bounces_at_max_angle() {
        let config = Config::new();
        let paddle = paddle_at(Side::Computer, 150.0, 0.0);
        // Right edge of the paddle: collide point = 1
        let mut ball = ball_at(250.0, 15.0);
        let speed = ball.speed;

        bounce_off_paddle(&mut ball, &paddle, &config);

        let angle = std::f32::consts::FRAC_PI_4;
        assert_eq!(ball.vel.x, speed * angle.sin());
        assert!(ball.vel.y > 0.0, "Computer hit sends the ball down");
        assert!((ball.vel.y - speed * angle.cos()).abs() < 1e-6);
    }

    #[test]
    fn test_hit_offset_is_clamped() {
        let config = Config::new();
        let paddle = paddle_at(Side::Player, 150.0, 590.0);
        // Ball center past the paddle's right end, still overlapping
        let mut ball = ball_at(258.0, 585.0);
        let speed = ball.speed;

        bounce_off_paddle(&mut ball, &paddle, &config);

        assert_eq!(ball.vel.x, speed * std::f32::consts::FRAC_PI_4.sin());
    }

    #[test]
    fn test_speed_increases_by_increment_on_hit() {
        let config = Config::new();
        let paddle = paddle_at(Side::Player, 150.0, 590.0);
        let mut ball = ball_at(180.0, 585.0);
        ball.speed = 8.3;

        bounce_off_paddle(&mut ball, &paddle, &config);

        assert_eq!(ball.speed, 8.3 + config.ball_speed_increment);
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, ball_at(5.0, 300.0));

        check_collisions(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -5.0, "X velocity should reverse");
            assert_eq!(ball.vel.y, 5.0, "Y velocity should be unchanged");
            assert_eq!(ball.speed, 7.0, "Walls do not change speed");
        }
        assert_eq!(events.as_slice(), &[GameEvent::WallBounce]);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, ball_at(395.0, 300.0));

        check_collisions(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -5.0);
        }
        assert!(events.contains(GameEvent::WallBounce));
    }

    #[test]
    fn test_only_paddle_on_ball_half_is_checked() {
        let (mut world, config, mut events) = setup_world();
        // Computer paddle placed in the lower half, overlapping the ball
        create_paddle(&mut world, paddle_at(Side::Computer, 150.0, 580.0));
        create_ball(&mut world, ball_at(200.0, 585.0));

        check_collisions(&mut world, &config, &mut events);

        assert!(events.is_empty(), "Computer paddle is ignored below midline");
    }

    #[test]
    fn test_player_paddle_hit_sends_ball_up() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, paddle_at(Side::Player, 150.0, 590.0));
        create_paddle(&mut world, paddle_at(Side::Computer, 150.0, 0.0));
        create_ball(&mut world, ball_at(225.0, 585.0));

        check_collisions(&mut world, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.y < 0.0);
            assert!(ball.vel.x > 0.0, "Right-of-center hit angles right");
            assert_eq!(ball.speed, 7.0 + config.ball_speed_increment);
        }
        assert_eq!(events.as_slice(), &[GameEvent::PaddleHit(Side::Player)]);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, paddle_at(Side::Player, 150.0, 590.0));

        check_collisions(&mut world, &config, &mut events);

        assert!(events.is_empty());
    }
}
