//! Square Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use square_dodge::persistence::LocalStore;
    use square_dodge::platform::frame::next_animation_frame;
    use square_dodge::platform::{ClientRect, fit_to_container, pointer_to_field};
    use square_dodge::renderer::CanvasRenderer;
    use square_dodge::sim::Field;
    use square_dodge::{FrameOutcome, Game, Tuning, ui};

    type SharedGame = Rc<RefCell<Game<LocalStore>>>;

    /// Size the canvas to its container and return the matching play field
    fn fit_canvas(canvas: &HtmlCanvasElement) -> Field {
        let container_width = canvas
            .parent_element()
            .map(|parent| parent.client_width())
            .unwrap_or(canvas.width() as i32)
            .max(0) as u32;
        let (width, height) = fit_to_container(container_width);
        canvas.set_width(width);
        canvas.set_height(height);
        Field::new(width as f32, height as f32)
    }

    /// Map a client-space point onto the current play field
    fn client_to_field(canvas: &HtmlCanvasElement, game: &SharedGame, x: i32, y: i32) -> Vec2 {
        let dom_rect = canvas.get_bounding_client_rect();
        let rect = ClientRect {
            left: dom_rect.left() as f32,
            top: dom_rect.top() as f32,
            width: dom_rect.width() as f32,
            height: dom_rect.height() as f32,
        };
        let scroll = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| Vec2::new(root.scroll_left() as f32, root.scroll_top() as f32))
            .unwrap_or(Vec2::ZERO);
        let field = game.borrow().state.field;
        pointer_to_field(Vec2::new(x as f32, y as f32), rect, scroll, &field)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        log::info!("Square Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ui::ids::CANVAS)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let field = fit_canvas(&canvas);
        let seed = js_sys::Date::now() as u64;
        let game: SharedGame = Rc::new(RefCell::new(Game::new(
            seed,
            field,
            Tuning::default(),
            LocalStore::open(),
        )));

        {
            let g = game.borrow();
            ui::update_scores(&document, 0, g.high_score());
            ui::set_leaderboard_visible(&document, g.settings.show_leaderboard);
            ui::display_leaderboard(&document, g.leaderboard())?;
        }

        setup_resize_handler(&canvas, game.clone())?;
        setup_input_handlers(&canvas, game.clone())?;

        let mut renderer = CanvasRenderer::new(&canvas)?;

        log::info!("Square Dodge running!");
        game_loop(&document, &game, &mut renderer).await
    }

    /// One frame per display refresh until the frame signal fails
    async fn game_loop(
        document: &Document,
        game: &SharedGame,
        renderer: &mut CanvasRenderer,
    ) -> Result<(), JsValue> {
        loop {
            let now = next_animation_frame().await?;
            let outcome = game.borrow_mut().frame(now, renderer);

            match outcome {
                FrameOutcome::Running { score, high_score } => {
                    ui::update_scores(document, score, high_score);
                }
                FrameOutcome::GameOver { score, rank } => {
                    {
                        let g = game.borrow();
                        ui::display_leaderboard(document, g.leaderboard())?;
                        ui::update_scores(document, 0, g.high_score());
                    }
                    ui::announce_game_over(score, rank);
                }
            }
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: SharedGame) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let field = fit_canvas(&canvas_clone);
            game.borrow_mut().resize(field);
            log::info!("Canvas resized to {}x{}", field.width, field.height);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: SharedGame) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let pos = client_to_field(&canvas_clone, &game, event.client_x(), event.client_y());
                game.borrow_mut().set_pointer(pos);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move (first touch only)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos =
                        client_to_field(&canvas_clone, &game, touch.client_x(), touch.client_y());
                    game.borrow_mut().set_pointer(pos);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "p" | "P") {
                    game.borrow_mut().cycle_palette();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(err) = wasm_game::run().await {
        log::error!("Square Dodge stopped: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use square_dodge::persistence::MemoryStore;
    use square_dodge::renderer::DrawList;
    use square_dodge::sim::Field;
    use square_dodge::{FrameOutcome, Game, Tuning};

    const SEED: u64 = 0x5eed;
    const SESSIONS: u32 = 5;
    /// Ten simulated minutes at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Play seeded sessions with a scripted pointer sweep
    pub fn run() {
        let mut game = Game::new(SEED, Field::default(), Tuning::default(), MemoryStore::new());
        let mut draw_list = DrawList::default();
        let mut finished = 0;

        for frame in 0..MAX_FRAMES {
            if finished >= SESSIONS {
                break;
            }

            let t = frame as f32 * 0.01;
            let field = game.state.field;
            game.set_pointer(Vec2::new(
                field.width * (0.5 + 0.4 * t.sin()),
                field.height * (0.5 + 0.4 * (t * 1.3).cos()),
            ));

            if let FrameOutcome::GameOver { score, rank } = game.frame(frame as f64 * FRAME_MS, &mut draw_list) {
                finished += 1;
                log::info!("Session {}: score {} (rank {:?})", finished, score, rank);
            }
        }

        log::info!("Best score: {}", game.high_score());
        if game.leaderboard().is_empty() {
            log::info!("No session ended within {} frames", MAX_FRAMES);
        }
        for (rank, score) in game.leaderboard().rows().take(10) {
            log::info!("{:>3}. {}", rank, score);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Square Dodge (native) starting...");
    log::info!("Native mode runs headless sessions - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
