//! Browser client for Pong against the computer
//!
//! Canvas 2D rendering, mouse and keyboard input and sound cues around the
//! simulation in `game_core`. The page must provide a `<canvas id="myCanvas">`.

pub mod audio;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::audio::{Cue, Sounds};
    use crate::canvas;
    use crate::input::{is_start_key, pointer_to_board_x};
    use game_core::{Config, Match};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window,
    };

    const CANVAS_ID: &str = "myCanvas";

    /// Everything the timer and input callbacks share
    struct App {
        game: Match,
        ctx: CanvasRenderingContext2d,
        sounds: Sounds,
        interval: Option<i32>,
    }

    impl App {
        fn draw(&self) -> Result<(), JsValue> {
            canvas::draw(&self.ctx, &self.game.render())
        }

        /// One timer tick: update, play cues, then render
        fn frame(&mut self) -> Result<(), JsValue> {
            let events = self.game.tick().to_vec();
            for event in events {
                self.sounds.play(Cue::for_event(event));
            }
            self.draw()
        }
    }

    #[wasm_bindgen(start)]
    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&JsValue::from_str("Logger already initialized"));
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let config = Config::new();
        let canvas = find_canvas(&document)?;
        canvas.set_width(config.board_width as u32);
        canvas.set_height(config.board_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;

        let app = Rc::new(RefCell::new(App {
            game: Match::new(config),
            ctx,
            sounds: Sounds::load()?,
            interval: None,
        }));

        // Title screen until Enter is pressed
        app.borrow().draw()?;

        listen_pointer(&canvas, app.clone())?;
        listen_start(&window, &document, app)?;

        log::info!("Pong ready, press Enter to start");
        Ok(())
    }

    fn find_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))
    }

    fn listen_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let mut app = app.borrow_mut();
            let x = pointer_to_board_x(
                event.client_x() as f64,
                rect.left(),
                rect.width(),
                app.game.config.board_width,
            );
            app.game.set_pointer_x(x);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn listen_start(
        window: &Window,
        document: &Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let window = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if !is_start_key(&event.key()) {
                return;
            }

            // Repeated presses are rejected by the match state machine
            let started = app.borrow_mut().game.start().success;
            if started {
                if let Err(err) = start_ticking(&window, app.clone()) {
                    log::error!("Failed to start tick timer: {:?}", err);
                }
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Run the match on a fixed-rate interval, cleared once the match is over
    fn start_ticking(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let interval_ms = app.borrow().game.config.tick_interval_ms() as i32;

        let tick_app = app.clone();
        let tick_window = window.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut app = tick_app.borrow_mut();
            if let Err(err) = app.frame() {
                log::error!("Frame failed: {:?}", err);
            }

            if app.game.fsm.is_game_over() {
                if let Some(handle) = app.interval.take() {
                    tick_window.clear_interval_with_handle(handle);
                    log::info!("Match finished, tick timer stopped");
                }
            }
        });

        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        closure.forget();

        app.borrow_mut().interval = Some(handle);
        log::info!("Match started, ticking every {}ms", interval_ms);
        Ok(())
    }
}
