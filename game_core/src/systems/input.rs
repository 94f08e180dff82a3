use crate::{Paddle, PointerInput, Side};
use hecs::World;

/// Center the player's paddle under the latest pointer sample.
///
/// Positions are taken as-is; a pointer beyond the board edges moves the
/// paddle off the board.
pub fn apply_pointer(world: &mut World, pointer: &mut PointerInput) {
    let Some(x) = pointer.take() else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.pos.x = x - paddle.width / 2.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;
    use glam::Vec2;

    fn setup_world() -> World {
        let mut world = World::new();
        create_paddle(
            &mut world,
            Paddle::new(Side::Player, Vec2::new(150.0, 590.0), 100.0, 10.0),
        );
        create_paddle(
            &mut world,
            Paddle::new(Side::Computer, Vec2::new(150.0, 0.0), 100.0, 10.0),
        );
        world
    }

    fn paddle_x(world: &World, side: Side) -> Option<f32> {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.x)
    }

    #[test]
    fn test_pointer_centers_player_paddle() {
        let mut world = setup_world();
        let mut pointer = PointerInput::new();
        pointer.set(80.0);

        apply_pointer(&mut world, &mut pointer);

        assert_eq!(paddle_x(&world, Side::Player), Some(30.0));
        assert_eq!(paddle_x(&world, Side::Computer), Some(150.0));
    }

    #[test]
    fn test_pointer_is_not_clamped() {
        let mut world = setup_world();
        let mut pointer = PointerInput::new();
        pointer.set(-500.0);

        apply_pointer(&mut world, &mut pointer);

        assert_eq!(paddle_x(&world, Side::Player), Some(-550.0));
    }

    #[test]
    fn test_no_sample_leaves_paddle() {
        let mut world = setup_world();
        let mut pointer = PointerInput::new();

        apply_pointer(&mut world, &mut pointer);

        assert_eq!(paddle_x(&world, Side::Player), Some(150.0));
    }
}
