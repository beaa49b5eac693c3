//! Browser bindings
//!
//! The page owns layout, animation, and audio. It holds one `LuckyApp` and
//! calls into it on user actions; results come back as JSON strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::draw::DrawEngine;
use crate::error::DrawError;
use crate::games::GameConfig;
use crate::history::HistoryLedger;
use crate::persistence::LocalStore;
use crate::platform;
use crate::ritual::{FortuneRitual, TICK_INTERVAL_MS};
use crate::settings::Settings;
use crate::ui;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger not initialized: {}", e).into());
    }
    log::info!("Lucky Lots starting...");
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn draw_error(e: DrawError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Page-facing application state
#[wasm_bindgen]
pub struct LuckyApp {
    engine: DrawEngine,
    history: HistoryLedger<LocalStore>,
    settings: Settings,
    ritual: FortuneRitual,
}

impl Default for LuckyApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LuckyApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: DrawEngine::from_entropy(),
            history: HistoryLedger::load(LocalStore::new()),
            settings: Settings::load(&LocalStore::new()),
            ritual: FortuneRitual::new(),
        }
    }

    /// Preset games, in display order
    pub fn games_json(&self) -> Result<String, JsValue> {
        to_json(&GameConfig::presets())
    }

    /// Draw a preset game and record it. Returns the history entry.
    pub fn draw(&mut self, game_id: &str) -> Result<String, JsValue> {
        let game = GameConfig::preset(game_id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown game '{}'", game_id)))?;
        self.draw_and_record(&game)
    }

    /// Rolling numbers for the reveal animation (not recorded)
    pub fn preview(&mut self, game_id: &str) -> Result<String, JsValue> {
        let game = GameConfig::preset(game_id)
            .ok_or_else(|| JsValue::from_str(&format!("unknown game '{}'", game_id)))?;
        let result = self.engine.preview(&game).map_err(draw_error)?;
        to_json(&result)
    }

    /// Whether the custom form may enable its draw button
    pub fn custom_range_valid(min: i32, max: i32) -> bool {
        min <= max
    }

    /// Draw a custom range, remember the form values, and record the result
    pub fn draw_custom(&mut self, min: i32, max: i32, count: u32) -> Result<String, JsValue> {
        let game = GameConfig::custom(min, max, count as usize).map_err(draw_error)?;
        self.settings.custom = game.primary;
        self.settings.save(&mut LocalStore::new());
        self.draw_and_record(&game)
    }

    pub fn history_json(&self) -> Result<String, JsValue> {
        to_json(self.history.entries())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Share message for a history entry
    pub fn share_text(&self, entry_id: u64) -> Option<String> {
        self.history
            .entries()
            .iter()
            .find(|e| e.id == entry_id)
            .map(|e| ui::share_text(&e.label, &e.result()))
    }

    /// Relative label for a history timestamp
    pub fn format_time(&self, timestamp: f64) -> String {
        ui::format_relative(platform::now_ms(), timestamp)
    }

    // === Settings ===

    pub fn settings_json(&self) -> Result<String, JsValue> {
        to_json(&self.settings)
    }

    pub fn set_sfx_muted(&mut self, muted: bool) {
        self.settings.sfx_muted = muted;
        self.settings.save(&mut LocalStore::new());
    }

    pub fn set_bgm_enabled(&mut self, enabled: bool) {
        self.settings.bgm_enabled = enabled;
        self.settings.save(&mut LocalStore::new());
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.settings.reduced_motion = reduced;
        self.settings.save(&mut LocalStore::new());
    }

    pub fn reveal_delay_ms(&self) -> u32 {
        self.settings.effective_reveal_delay_ms()
    }

    // === Fortune ritual ===

    pub fn ritual_press(&mut self) {
        self.ritual.press();
    }

    /// Advance the hold. Returns the poem JSON on the tick that reveals it.
    pub fn ritual_tick(&mut self) -> Option<String> {
        let poem = self.ritual.tick(self.engine.rng_mut())?;
        serde_json::to_string(poem).ok()
    }

    pub fn ritual_release(&mut self) {
        self.ritual.release();
    }

    pub fn ritual_reset(&mut self) {
        self.ritual.reset();
    }

    pub fn ritual_progress(&self) -> u8 {
        self.ritual.progress()
    }

    /// How often the page should call `ritual_tick` while held
    pub fn ritual_tick_interval_ms() -> u32 {
        TICK_INTERVAL_MS
    }
}

impl LuckyApp {
    fn draw_and_record(&mut self, game: &GameConfig) -> Result<String, JsValue> {
        let result = self.engine.draw_game(game).map_err(draw_error)?;
        let entry = self.history.record(game.name.as_str(), &result, platform::now_ms());
        to_json(entry)
    }
}
