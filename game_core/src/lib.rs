pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    pointer: &mut PointerInput,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply the latest pointer sample to the player's paddle
    apply_pointer(world, pointer);

    // 2. Score against the position reached last tick
    check_scoring(world, config, score, events);

    // 3. Move ball
    move_ball(world);

    // 4. Computer follows the ball
    track_ball(world, config);

    // 5. Check collisions (side walls, then paddles)
    check_collisions(world, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Ball at the start of a match: centered, serving down and to the right
pub fn initial_ball(config: &Config) -> Ball {
    Ball::new(
        config.board_center(),
        config.ball_velocity_initial,
        config.ball_radius,
        config.ball_speed_base,
    )
}

/// Paddle at the start of a match, centered on its edge of the board
pub fn initial_paddle(side: Side, config: &Config) -> Paddle {
    let pos = match side {
        Side::Player => config.player_paddle_spawn(),
        Side::Computer => config.computer_paddle_spawn(),
    };
    Paddle::new(side, pos, config.paddle_width, config.paddle_height)
}
