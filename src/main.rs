//! Hive Flight entry point
//!
//! Browser: WebGPU canvas, pointer joystick, DOM HUD and wing buzz.
//! Native: headless autopilot run through every level, logging events.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, PointerEvent};

    use hive_flight::Settings;
    use hive_flight::audio::{BuzzModel, BuzzVoice};
    use hive_flight::input::{PointerDown, VirtualJoystick};
    use hive_flight::platform::{Procedural, Viewport};
    use hive_flight::renderer::{RenderError, RenderState, scene};
    use hive_flight::sim::{FrameClock, GameState, SessionError, TickInput, WorldSnapshot, tick};
    use hive_flight::ui::{self, CompletionOverlay, FpsCounter};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        joystick: VirtualJoystick,
        settings: Settings,
        canvas: HtmlCanvasElement,
        render_state: Option<RenderState>,
        viewport: Viewport,
        dpr: f32,
        buzz: BuzzModel,
        voice: Option<BuzzVoice>,
        muted: bool,
        fps: FpsCounter,
    }

    impl Game {
        fn new(settings: Settings, canvas: HtmlCanvasElement, dpr: f32) -> Result<Self, SessionError> {
            let viewport = Viewport::fit(canvas.width() as f32, canvas.height() as f32);
            Ok(Self {
                state: GameState::new(1)?,
                clock: FrameClock::default(),
                joystick: VirtualJoystick::new(settings.joystick_radius),
                settings,
                canvas,
                render_state: None,
                viewport,
                dpr,
                buzz: BuzzModel::default(),
                voice: None,
                muted: false,
                fps: FpsCounter::default(),
            })
        }

        /// Window (CSS pixel) position to logical coordinates
        fn to_logical(&self, client: Vec2) -> Vec2 {
            self.viewport.screen_to_logical(client * self.dpr)
        }

        fn frame(&mut self, now_ms: f64) {
            let dt = self.clock.advance(now_ms);
            tick(&mut self.state, &TickInput::stick(self.joystick.value()), dt);
            let snapshot = WorldSnapshot::capture(&mut self.state);
            for event in &snapshot.events {
                log::debug!("{event:?}");
            }

            self.render(&snapshot);
            self.update_hud(&snapshot, dt);
            self.update_audio(&snapshot);
        }

        fn render(&mut self, snapshot: &WorldSnapshot) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = scene::build(snapshot, &self.state.scenery, &Procedural, Some(&self.joystick));
            match render_state.render(&vertices) {
                Ok(()) => {}
                Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                    let (w, h) = render_state.size;
                    render_state.resize(w, h);
                }
                Err(e) => log::warn!("Render error: {e}"),
            }
        }

        fn update_hud(&mut self, snapshot: &WorldSnapshot, dt: f32) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            set_text(&document, "hud-hp", &ui::hp_text(snapshot));
            set_text(&document, "hud-level", &ui::level_text(snapshot));

            if self.fps.frame(dt) && self.settings.show_fps {
                set_text(&document, "hud-fps", &format!("{} FPS", self.fps.fps()));
            }
            set_hidden(&document, "hud-fps", !self.settings.show_fps);

            let overlay = CompletionOverlay::from_snapshot(snapshot);
            set_hidden(&document, "overlay", overlay.is_none());
            if let Some(overlay) = overlay {
                set_text(&document, "overlay-title", &overlay.title);
                set_text(&document, "overlay-lines", &overlay.lines.join("\n"));
                set_hidden(&document, "overlay-button", overlay.button.is_none());
                if let Some(button) = &overlay.button {
                    set_text(&document, "overlay-button", button);
                }
            }
        }

        fn update_audio(&mut self, snapshot: &WorldSnapshot) {
            let volume = if self.muted { 0.0 } else { self.settings.buzz_volume() };
            self.buzz.update(snapshot, self.joystick.value().length(), volume);
            if let Some(voice) = &self.voice {
                voice.apply(&self.buzz);
            }
        }

        fn pointer_down(&mut self, id: i32, client: Vec2) {
            // Audio can only start inside a user gesture
            if self.voice.is_none() {
                self.voice = BuzzVoice::start();
            }
            let pos = self.to_logical(client);
            if self.joystick.pointer_down(id, pos, self.state.level_complete) == PointerDown::Continue {
                self.continue_game();
            }
        }

        fn pointer_move(&mut self, id: i32, client: Vec2) {
            let pos = self.to_logical(client);
            self.joystick.pointer_move(id, pos);
        }

        fn pointer_up(&mut self, id: i32, _client: Vec2) {
            self.joystick.pointer_up(id);
        }

        /// Next level, or back to level 1 after the last one
        fn continue_game(&mut self) {
            let result = if self.state.game_finished() {
                self.state.request_restart()
            } else {
                self.state.request_next_level()
            };
            if let Err(e) = result {
                log::warn!("Cannot continue: {e}");
            }
        }

        fn resize(&mut self) {
            let (width, height) = fit_canvas(&self.canvas, self.dpr);
            self.viewport = Viewport::fit(width as f32, height as f32);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(width, height);
            }
        }

        fn on_hidden(&mut self) {
            if !self.settings.mute_on_blur {
                return;
            }
            self.muted = true;
            if let Some(voice) = &self.voice {
                voice.silence();
            }
        }

        fn on_visible(&mut self) {
            self.muted = false;
            self.clock.reset();
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    /// Size the canvas backing store to its CSS size times the pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement, dpr: f32) -> (u32, u32) {
        let width = ((canvas.client_width() as f32 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f32 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }

    async fn init_renderer(canvas: &HtmlCanvasElement) -> Option<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return None;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {e}");
                return None;
            }
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, canvas.width(), canvas.height()).await {
            Ok(render_state) => Some(render_state),
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hive Flight starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio() as f32;
        fit_canvas(&canvas, dpr);

        let game = match Game::new(Settings::load(), canvas.clone(), dpr) {
            Ok(game) => Rc::new(RefCell::new(game)),
            Err(e) => {
                log::error!("Failed to start: {e}");
                return;
            }
        };

        let render_state = init_renderer(&canvas).await;
        if render_state.is_none() {
            log::warn!("Rendering disabled");
        }
        game.borrow_mut().render_state = render_state;

        setup_pointer_handlers(game.clone());
        setup_window_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Hive Flight running!");
    }

    fn on_pointer(name: &str, game: Rc<RefCell<Game>>, handler: fn(&mut Game, i32, Vec2)) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            handler(&mut game.borrow_mut(), event.pointer_id(), client);
        });
        let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pointer_handlers(game: Rc<RefCell<Game>>) {
        on_pointer("pointerdown", game.clone(), Game::pointer_down);
        on_pointer("pointermove", game.clone(), Game::pointer_move);
        on_pointer("pointerup", game.clone(), Game::pointer_up);
        on_pointer("pointercancel", game, Game::pointer_up);

        // Keep touches from scrolling or zooming the page
        let window = web_sys::window().expect("no window");
        for name in ["touchstart", "touchmove", "contextmenu"] {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_window_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    g.on_hidden();
                    log::info!("Muted (tab hidden)");
                } else {
                    g.on_visible();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur / focus
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().on_hidden();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().on_visible();
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Hive Flight (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let snapshot = demo::run()?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use hive_flight::Settings;
    use hive_flight::audio::BuzzModel;
    use hive_flight::sim::{FINAL_LEVEL, GameEvent, GameState, SessionError, TickInput, WorldSnapshot, tick};
    use hive_flight::ui;

    /// Fixed demo step
    const DT: f32 = 1.0 / 60.0;
    /// Give up on a level after this long
    const LEVEL_TIMEOUT_SECS: f32 = 120.0;

    /// Fly every level on autopilot. Returns the last snapshot taken.
    pub fn run() -> Result<WorldSnapshot, SessionError> {
        let settings = Settings::load();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut state = GameState::new(1)?;
        let mut buzz = BuzzModel::default();
        let mut completed = 0;

        loop {
            let mut snapshot = WorldSnapshot::capture(&mut state);
            let max_ticks = (LEVEL_TIMEOUT_SECS / DT) as u32;
            for _ in 0..max_ticks {
                tick(&mut state, &input, DT);
                snapshot = WorldSnapshot::capture(&mut state);
                buzz.update(&snapshot, 1.0, settings.buzz_volume());
                for event in &snapshot.events {
                    match event {
                        GameEvent::PlayerHit { .. } | GameEvent::PlayerKnockedOut => {
                            log::info!("{event:?} ({})", ui::hp_text(&snapshot))
                        }
                        _ => log::debug!("{event:?}"),
                    }
                }
                if snapshot.level_complete || snapshot.player.dead {
                    break;
                }
            }

            if snapshot.player.dead {
                log::warn!("Knocked out on level {}", snapshot.level);
                return Ok(snapshot);
            }
            if !snapshot.level_complete {
                log::warn!("Level {} timed out at x={:.0}", snapshot.level, snapshot.player.pos.x);
                return Ok(snapshot);
            }

            completed += 1;
            log::info!(
                "{} in {:.1}s (buzz {:.0} Hz)",
                ui::level_text(&snapshot),
                state.time_ticks as f32 * DT,
                buzz.frequency
            );
            if state.game_finished() {
                log::info!("All {FINAL_LEVEL} levels completed ({completed} flown)");
                return Ok(snapshot);
            }
            state.request_next_level()?;
        }
    }
}
