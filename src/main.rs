//! Triball entry point
//!
//! Wires the simulation to the browser: canvas, start/reset buttons, and the
//! requestAnimationFrame loop. The native build runs the simulation headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent};

    use triball::renderer::CanvasRenderer;
    use triball::sim::{SimState, step};

    /// Everything the frame loop and the button handlers share
    struct Game {
        state: SimState,
        renderer: CanvasRenderer,
        /// Handle of the pending requestAnimationFrame registration
        raf_id: Option<i32>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("triball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(&canvas);
        let (width, height) = renderer.size();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: SimState::new(width, height, seed),
            renderer,
            raf_id: None,
        }));

        log::info!("initialized {}x{} viewport with seed {}", width, height, seed);

        setup_start_button(&document, game.clone());
        setup_reset_button(&document, game);

        log::info!("triball ready");
    }

    /// Register the next frame callback and remember its handle for cancel
    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let g = game.clone();
        let closure = Closure::once(move |_time: f64| frame(g));
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
        game.borrow_mut().raf_id = Some(id);
        closure.forget();
    }

    /// One frame: draw every ball at its current position, advance the
    /// simulation, reschedule
    fn frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.raf_id = None;
            g.renderer.draw_frame(&g.state);
            step(&mut g.state);
        }
        schedule_frame(game);
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        let btn = document
            .get_element_by_id("start-btn")
            .expect("no start button");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            // Only a real Idle -> Running transition schedules a callback
            if game.borrow_mut().state.start() {
                schedule_frame(game.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_button(document: &Document, game: Rc<RefCell<Game>>) {
        let btn = document
            .get_element_by_id("reset-btn")
            .expect("no reset button");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            // Cancel of an absent registration is harmless
            if let Some(id) = g.raf_id.take() {
                let _ = web_sys::window().unwrap().cancel_animation_frame(id);
            }
            g.renderer.clear();
            g.state.reset();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use triball::consts::{HEADLESS_HEIGHT, HEADLESS_WIDTH};
    use triball::sim::{SimState, step};

    env_logger::init();
    log::info!("triball (native) starting - headless smoke run");
    log::info!("run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = SimState::new(HEADLESS_WIDTH, HEADLESS_HEIGHT, seed);
    state.start();
    for _ in 0..600 {
        step(&mut state);
    }

    println!(
        "seed {}: {} balls after 600 frames ({} merges)",
        seed,
        state.balls.len(),
        state.balls.len() - 8
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
