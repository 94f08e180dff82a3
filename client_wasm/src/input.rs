//! Keyboard and pointer input handling

/// Key that starts the match from the title screen
pub const START_KEY: &str = "Enter";

pub fn is_start_key(key: &str) -> bool {
    key == START_KEY
}

/// Map a viewport pointer x onto the board.
///
/// `canvas_left` and `canvas_width` come from the canvas bounding rect, so a
/// canvas stretched by CSS still lines the paddle up with the cursor.
pub fn pointer_to_board_x(
    client_x: f64,
    canvas_left: f64,
    canvas_width: f64,
    board_width: f32,
) -> f32 {
    let x = client_x - canvas_left;
    if canvas_width > 0.0 {
        (x * board_width as f64 / canvas_width) as f32
    } else {
        x as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_enter_starts() {
        assert!(is_start_key("Enter"));
        assert!(!is_start_key("enter"));
        assert!(!is_start_key(" "));
        assert!(!is_start_key("Escape"));
    }

    #[test]
    fn test_pointer_relative_to_canvas() {
        assert_eq!(pointer_to_board_x(260.0, 60.0, 400.0, 400.0), 200.0);
    }

    #[test]
    fn test_pointer_scaled_for_stretched_canvas() {
        // Canvas shown at twice its logical width
        assert_eq!(pointer_to_board_x(500.0, 100.0, 800.0, 400.0), 200.0);
    }

    #[test]
    fn test_pointer_outside_canvas_passes_through() {
        assert_eq!(pointer_to_board_x(10.0, 60.0, 400.0, 400.0), -50.0);
        assert_eq!(pointer_to_board_x(75.0, 25.0, 0.0, 400.0), 50.0);
    }
}
