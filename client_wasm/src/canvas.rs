//! Replays drawing intents onto a Canvas 2D context

use game_core::DrawCommand;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub fn draw(ctx: &CanvasRenderingContext2d, frame: &[DrawCommand]) -> Result<(), JsValue> {
    for command in frame {
        match command {
            DrawCommand::Rect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
            }
            DrawCommand::Circle { x, y, r, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(*x as f64, *y as f64, *r as f64, 0.0, std::f64::consts::TAU)?;
                ctx.close_path();
                ctx.fill();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                color,
                font,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
    }
    Ok(())
}
