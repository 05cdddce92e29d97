//! MatrixXscape entry point
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
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use matrixscape::highscores::HighScore;
    use matrixscape::platform::{self, Offer};
    use matrixscape::present::{self, LOST_COMMENTARY, PresentationSink, WON_COMMENTARY};
    use matrixscape::render::CanvasPainter;
    use matrixscape::settings::Settings;
    use matrixscape::sim::{
        Arena, GameEvent, GameState, KeyState, RestartRequest, TickInput, tick,
    };

    /// DOM-backed presentation sink: score/lives/hint mirrors plus the two
    /// terminal overlays. Absent elements are skipped, never a panic.
    struct DomSink {
        score: Option<Element>,
        lives: Option<Element>,
        hint: Option<Element>,
        lost_overlay: Option<Element>,
        won_overlay: Option<Element>,
        final_score: Option<Element>,
        win_time: Option<Element>,
        lost_feedback: Option<Element>,
        won_feedback: Option<Element>,
    }

    impl DomSink {
        fn new(document: &Document) -> Self {
            let grab = |id: &str| document.get_element_by_id(id);
            Self {
                score: grab("score"),
                lives: grab("lives"),
                hint: grab("aiStatus"),
                lost_overlay: grab("gameOver"),
                won_overlay: grab("winScreen"),
                final_score: grab("finalScore"),
                win_time: grab("winTime"),
                lost_feedback: grab("aiFeedback"),
                won_feedback: grab("winFeedback"),
            }
        }

        fn set_text(el: &Option<Element>, text: &str) {
            if let Some(el) = el {
                el.set_text_content(Some(text));
            }
        }

        fn set_visible(el: &Option<Element>, visible: bool) {
            if let Some(el) = el {
                let class = if visible { "modal" } else { "modal hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    impl PresentationSink for DomSink {
        fn set_score(&mut self, seconds: u64) {
            Self::set_text(&self.score, &seconds.to_string());
        }

        fn set_lives(&mut self, lives: u32) {
            Self::set_text(&self.lives, &lives.to_string());
        }

        fn set_hint(&mut self, hint: &str) {
            Self::set_text(&self.hint, hint);
        }

        fn show_lost(&mut self, final_score: u64, commentary: &str) {
            Self::set_text(&self.final_score, &final_score.to_string());
            Self::set_text(&self.lost_feedback, commentary);
            Self::set_visible(&self.lost_overlay, true);
        }

        fn show_won(&mut self, elapsed_secs: u64, commentary: &str) {
            Self::set_text(&self.win_time, &elapsed_secs.to_string());
            Self::set_text(&self.won_feedback, commentary);
            Self::set_visible(&self.won_overlay, true);
        }

        fn hide_overlays(&mut self) {
            Self::set_visible(&self.lost_overlay, false);
            Self::set_visible(&self.won_overlay, false);
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        painter: Option<CanvasPainter>,
        sink: DomSink,
        highscore: HighScore,
        keys: KeyState,
        /// Joystick vector while a touch is active
        analog: Option<Vec2>,
        /// Restart requested by a UI event, applied at the next tick boundary
        pending_restart: Option<RestartRequest>,
        /// Elapsed seconds captured when the win overlay was shown
        final_elapsed_secs: u64,
        /// Once set, the loop callback is a no-op and stops rescheduling
        stopped: bool,
    }

    impl Game {
        fn new(state: GameState, painter: Option<CanvasPainter>, sink: DomSink) -> Self {
            Self {
                state,
                painter,
                sink,
                highscore: HighScore::load(),
                keys: KeyState::default(),
                analog: None,
                pending_restart: None,
                final_elapsed_secs: 0,
                stopped: false,
            }
        }

        /// One scheduled invocation: tick, route events, render, mirror HUD
        fn frame(&mut self) {
            let input = TickInput {
                keys: self.keys,
                analog: self.analog,
                restart: self.pending_restart.take(),
            };
            tick(&mut self.state, &input);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::Lost { final_score } => {
                        if self.highscore.submit(final_score) {
                            log::info!("New high score: {final_score}");
                        }
                        self.sink.show_lost(final_score, LOST_COMMENTARY);
                    }
                    GameEvent::Won => {
                        let secs = present::elapsed_secs(&self.state, js_sys::Date::now());
                        self.final_elapsed_secs = secs;
                        self.sink.show_won(secs, WON_COMMENTARY);
                    }
                    // Hint text is mirrored below with the rest of the HUD
                    GameEvent::Hint(_) | GameEvent::LifeLost | GameEvent::SigilCollected => {}
                }
            }

            if let Some(ref painter) = self.painter {
                painter.draw(&self.state);
            }
            present::mirror_frame(&self.state, &mut self.sink);
        }

        fn request_restart(&mut self, harder: bool) {
            self.pending_restart = Some(RestartRequest {
                harder,
                now_ms: js_sys::Date::now(),
            });
            self.sink.hide_overlays();
            log::info!("Restart requested (harder: {harder})");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("MatrixXscape starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(
            seed,
            Arena::new(width as f32, height as f32),
            settings.movement,
            js_sys::Date::now(),
        );
        log::info!(
            "Session initialized: seed {seed}, movement {}",
            settings.movement.as_str()
        );

        let painter = CanvasPainter::new(&canvas, settings.rain);
        if painter.is_none() {
            log::warn!("2D canvas context unavailable, running headless");
        }

        let sink = DomSink::new(&document);
        let game = Rc::new(RefCell::new(Game::new(state, painter, sink)));

        setup_resize(&canvas, game.clone());
        setup_keyboard(game.clone());
        setup_joystick(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_stop_signal(game.clone());

        request_animation_frame(game);

        log::info!("MatrixXscape running!");
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.stopped {
                return;
            }
            g.frame();
        }
        request_animation_frame(game);
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
            let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            game.borrow_mut().state.set_arena_size(w as f32, h as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                apply_key(&mut game.borrow_mut().keys, &event.key().to_lowercase(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                apply_key(&mut game.borrow_mut().keys, &event.key().to_lowercase(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn apply_key(keys: &mut KeyState, key: &str, pressed: bool) {
        match key {
            "a" | "arrowleft" => keys.left = pressed,
            "d" | "arrowright" => keys.right = pressed,
            "w" | "arrowup" => keys.up = pressed,
            "s" | "arrowdown" => keys.down = pressed,
            _ => {}
        }
    }

    /// Wire the touch joystick when its markup exists; otherwise the
    /// discrete key-state path remains the sole input source.
    fn setup_joystick(document: &Document, game: Rc<RefCell<Game>>) {
        let joystick = document.query_selector(".joystick").ok().flatten();
        let knob = document.query_selector(".joystick-knob").ok().flatten();
        let (Some(joystick), Some(knob)) = (joystick, knob) else {
            log::info!("No joystick markup, keyboard input only");
            return;
        };

        // Touch move: map the knob offset to an analog vector, magnitude <= 1
        {
            let game = game.clone();
            let joystick_el = joystick.clone();
            let knob = knob.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let rect = joystick_el.get_bounding_client_rect();
                let cx = rect.left() + rect.width() / 2.0;
                let cy = rect.top() + rect.height() / 2.0;
                let dx = touch.client_x() as f64 - cx;
                let dy = touch.client_y() as f64 - cy;
                let max_dist = rect.width() / 2.0 - 20.0;
                if max_dist <= 0.0 {
                    return;
                }
                let dist = (dx * dx + dy * dy).sqrt().min(max_dist);
                let angle = dy.atan2(dx);

                let _ = knob.set_attribute(
                    "style",
                    &format!(
                        "transform: translate({}px, {}px)",
                        angle.cos() * dist,
                        angle.sin() * dist
                    ),
                );

                let v = Vec2::new(
                    (angle.cos() * dist / max_dist) as f32,
                    (angle.sin() * dist / max_dist) as f32,
                );
                game.borrow_mut().analog = Some(v);
            });
            let _ = joystick
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: release back to the keyboard path
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                let _ = knob.set_attribute("style", "transform: translate(-50%, -50%)");
                game.borrow_mut().analog = None;
            });
            let _ = joystick
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Restart from the lost overlay
        if let Some(btn) = document.get_element_by_id("retry") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().request_restart(false);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart from the win overlay runs the harder single-life mode
        if let Some(btn) = document.get_element_by_id("playAgain") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().request_restart(true);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Checkout offers on the lost overlay
        for (id, offer) in [
            ("buyEscapePass", Offer::EscapePass),
            ("buyFounders", Offer::Founders),
        ] {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    platform::open_checkout(offer);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("bookCall") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                platform::open_scheduler();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Share from the win overlay
        if let Some(btn) = document.get_element_by_id("shareWin") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let secs = game.borrow().final_elapsed_secs;
                platform::share_escape_time(secs);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop the loop for good when the page is being torn down
    fn setup_stop_signal(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().stopped = true;
            log::info!("Stop signal set, loop will not reschedule");
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use matrixscape::settings::MovementModel;
    use matrixscape::sim::{Arena, GamePhase, GameState, KeyState, TickInput, tick};

    env_logger::init();
    log::info!("MatrixXscape (native) starting...");
    log::info!("Native mode is a headless smoke run - serve the wasm build for the web version");

    let mut state = GameState::new(42, Arena::new(800.0, 600.0), MovementModel::Direct, 0.0);
    let input = TickInput {
        keys: KeyState {
            up: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut ticks = 0u64;
    while state.phase == GamePhase::Running && ticks < 6_000 {
        tick(&mut state, &input);
        ticks += 1;
    }

    log::info!(
        "Smoke run ended after {ticks} ticks: phase {:?}, score {}, lives {}, {} agents",
        state.phase,
        state.displayed_score(),
        state.lives,
        state.agents.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
