//! Logo Catcher entry point
//!
//! Browser: wires DOM input, audio and the WebGPU canvas to the simulation
//! and runs the animation-frame loop.
//! Native: runs a seeded session headlessly and prints the report.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use logo_catcher::audio::{AudioManager, SoundEffect, effective_volume};
    use logo_catcher::consts::FRAME_MS;
    use logo_catcher::renderer::{RenderState, scene};
    use logo_catcher::sim::{
        CountdownDisplay, GameEvent, GamePhase, GameState, PlayArea, TickInput, tick,
    };
    use logo_catcher::ui::{self, Panels};
    use logo_catcher::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        audio: AudioManager,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        last_time: f64,
        input: TickInput,
        /// Left mouse button held over the play area
        dragging: bool,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, canvas: HtmlCanvasElement) -> Self {
            let settings = Settings::default();
            let mut audio = AudioManager::new();
            audio.set_volume(effective_volume(&settings));
            Self {
                state: GameState::new(seed, tuning),
                settings,
                audio,
                render_state: None,
                canvas,
                last_time: 0.0,
                input: TickInput::default(),
                dragging: false,
                last_phase: GamePhase::Start,
            }
        }

        /// Pointer x (client coords) to a catcher target
        fn aim(&mut self, client_x: f64) {
            let rect = self.canvas.get_bounding_client_rect();
            if let Some(percent) = ui::pointer_percent(client_x, rect.left(), rect.width()) {
                self.input.catcher_target = Some(percent);
            }
        }

        /// Canvas changed size: update backing store, play area and surface
        fn fit_canvas(&mut self) {
            let (width, height, area) = canvas_size(&self.canvas);
            self.state.set_play_area(area.width, area.height);
            if let Some(render_state) = &mut self.render_state {
                render_state.resize(width, height, area);
            }
        }

        fn toggle_sound(&mut self) {
            let enabled = self.settings.toggle_sound();
            self.audio.set_volume(effective_volume(&self.settings));
            if let Some(el) = document().and_then(|d| d.get_element_by_id("soundToggle")) {
                let _ = el.set_attribute("title", ui::sound_toggle_title(enabled));
                let _ = el.set_attribute("aria-pressed", if enabled { "false" } else { "true" });
            }
        }

        /// One animation frame
        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                FRAME_MS
            };
            self.last_time = time;

            let events = tick(&mut self.state, &self.input, elapsed);

            // One-shot inputs are consumed by the tick that saw them
            self.input.start = false;
            self.input.replay = false;
            self.input.nudge = 0;
            self.input.catcher_target = None;

            for event in &events {
                self.audio.play(SoundEffect::for_event(event));
            }

            self.render(time);
            self.update_hud(&events);
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let view = self.state.view();
            let shaking = view.shaking && self.settings.effective_screen_shake();
            let vertices = scene::build(&view, &self.state.area, &self.state.tuning);
            let offset = scene::shake_offset(shaking, time);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, offset) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let area = render_state.area;
                        render_state.resize(w, h, area);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, events: &[GameEvent]) {
            let Some(document) = document() else { return };
            let view = self.state.view();

            // Show/hide screens on phase change
            if view.phase != self.last_phase {
                let panels = Panels::for_phase(view.phase);
                for (id, visible) in [
                    ("startScreen", panels.start),
                    ("countdown", panels.countdown),
                    ("gameHeader", panels.hud),
                    ("gameOverScreen", panels.game_over),
                ] {
                    if let Some(el) = document.get_element_by_id(id) {
                        let _ = el.class_list().toggle_with_force("hidden", !visible);
                    }
                }
                self.last_phase = view.phase;
            }

            if let Some(el) = document.get_element_by_id("scoreValue") {
                el.set_text_content(Some(&view.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("livesContainer") {
                el.set_text_content(Some(&ui::lives_pips(view.lives)));
            }
            if let (Some(display), Some(el)) =
                (view.countdown, document.get_element_by_id("countdownValue"))
            {
                let class = match display {
                    CountdownDisplay::Go => "go",
                    CountdownDisplay::Count(_) => "count",
                };
                let _ = el.set_attribute("class", class);
                el.set_text_content(Some(&ui::countdown_label(display)));
            }

            // Tooltip follows the last catch
            if let Some(el) = document
                .get_element_by_id("tooltip")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                match &view.tooltip {
                    Some(tooltip) => {
                        el.set_text_content(Some(tooltip.text));
                        let style = el.style();
                        let _ = style.set_property("left", &format!("{}px", tooltip.x));
                        let _ = style.set_property("top", &format!("{}px", tooltip.y));
                        let _ = el.class_list().toggle_with_force("hidden", false);
                    }
                    None => {
                        let _ = el.class_list().toggle_with_force("hidden", true);
                    }
                }
            }

            let final_score = events.iter().find_map(|event| match event {
                GameEvent::GameOver { score } => Some(*score),
                _ => None,
            });
            if let (Some(score), Some(el)) = (final_score, document.get_element_by_id("finalScore"))
            {
                el.set_text_content(Some(&score.to_string()));
            }
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Size the canvas backing store to its CSS size times the pixel ratio
    fn canvas_size(canvas: &HtmlCanvasElement) -> (u32, u32, PlayArea) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let area = PlayArea {
            width: client_w as f32,
            height: client_h as f32,
        };
        (width, height, area)
    }

    /// Inline `<script id="tuning" type="application/json">` overrides
    fn read_tuning(document: &web_sys::Document) -> Tuning {
        let json = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());
        Tuning::from_json_or_default(json.as_deref())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Logo Catcher starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let (width, height, area) = canvas_size(&canvas);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let tuning = read_tuning(&document);
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, canvas.clone())));
        game.borrow_mut().state.set_play_area(area.width, area.height);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU; without it the DOM overlay still works
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, area).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::warn!("No GPU device, rendering disabled: {:?}", e),
                        }
                    }
                    Err(e) => log::warn!("No GPU adapter, rendering disabled: {:?}", e),
                }
            }
            Err(e) => log::warn!("Failed to create surface: {:?}", e),
        }

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Set up screen buttons
        setup_buttons(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Logo Catcher running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        // Mouse down - start dragging (left button only)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut g = game.borrow_mut();
                g.dragging = true;
                g.aim(event.client_x() as f64);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - follow while dragging
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.dragging {
                    g.aim(event.client_x() as f64);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up anywhere ends the drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().dragging = false;
                }
            });
            let _ = document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move
        for name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().aim(touch.client_x() as f64);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => {
                        event.prevent_default();
                        g.input.nudge -= 1;
                    }
                    "ArrowRight" => {
                        event.prevent_default();
                        g.input.nudge += 1;
                    }
                    "i" | "I" => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().fit_canvas();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(id: &str, mut handler: impl FnMut() + 'static) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("Missing #{} button", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| handler());
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            on_click("startButton", move || {
                let mut g = game.borrow_mut();
                // First user gesture: the only place audio may be unlocked
                g.audio.unlock();
                g.input.start = true;
            });
        }
        {
            let game = game.clone();
            on_click("replayButton", move || game.borrow_mut().input.replay = true);
        }
        {
            let game = game.clone();
            on_click("soundToggle", move || game.borrow_mut().toggle_sound());
        }
        {
            let game = game.clone();
            on_click("shareScoreButton", move || share_score(game.borrow().state.score()));
        }
        on_click("workshopButton", || {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(ui::WORKSHOP_URL, "_blank");
            }
        });
    }

    /// Web Share API when available, else a tweet intent in a new tab
    fn share_score(score: u64) {
        let Some(window) = web_sys::window() else { return };
        let url = window.location().href().unwrap_or_default();
        let text = ui::share_text(score, &url);
        let navigator = window.navigator();

        let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

        if let Some(share) = share {
            let data = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&data, &"text".into(), &text.as_str().into());
            match share
                .call1(&navigator, &data)
                .and_then(|p| p.dyn_into::<js_sys::Promise>())
            {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        log::warn!("Error sharing: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("Error sharing: {:?}", e),
            }
        } else {
            let encoded: String = js_sys::encode_uri_component(&text).into();
            let intent = format!("{}{}", ui::TWITTER_INTENT, encoded);
            if let Err(e) = window.open_with_url_and_target(&intent, "_blank") {
                log::warn!("Could not open share window: {:?}", e);
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
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

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use logo_catcher::consts::{DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH};
    use logo_catcher::headless::{self, RunConfig};
    use logo_catcher::{Settings, Tuning};

    /// Run a seeded Logo Catcher session without a browser
    #[derive(Debug, Parser)]
    #[command(name = "logo-catcher", version, about)]
    pub struct Cli {
        /// RNG seed; the same seed replays the same run
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Simulated seconds at 60 fps, countdown included
        #[arg(long, default_value_t = 60.0)]
        seconds: f64,
        /// Let the autopilot steer the catcher
        #[arg(long)]
        autopilot: bool,
        /// JSON file overriding gameplay tuning
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Play area width (px)
        #[arg(long, default_value_t = DEFAULT_AREA_WIDTH)]
        width: f32,
        /// Play area height (px)
        #[arg(long, default_value_t = DEFAULT_AREA_HEIGHT)]
        height: f32,
        /// Run with sound muted
        #[arg(long)]
        mute: bool,
        /// Master volume, 0.0 - 1.0
        #[arg(long, default_value_t = 0.8)]
        volume: f32,
    }

    fn load_tuning(path: Option<&PathBuf>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => Tuning::from_json_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Cannot read {}: {}; using default tuning", path.display(), e);
                Tuning::default()
            }
        }
    }

    pub fn main() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let cli = Cli::parse();

        let tuning = load_tuning(cli.tuning.as_ref());
        let mut settings = Settings {
            sound_enabled: !cli.mute,
            ..Default::default()
        };
        settings.set_master_volume(cli.volume);
        let config = RunConfig {
            seed: cli.seed,
            seconds: cli.seconds,
            autopilot: cli.autopilot,
            width: cli.width,
            height: cli.height,
            settings,
        };

        let report = headless::run(&config, tuning);
        log::info!(
            "Final score {} ({} lives, difficulty {:.2}) after {} frames",
            report.score,
            report.lives,
            report.difficulty,
            report.frames
        );
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize report: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
