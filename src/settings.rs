//! User preferences
//!
//! Persisted separately from draw history, under its own key.

use serde::{Deserialize, Serialize};

use crate::draw::DrawRequest;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// Page preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects muted (pages start muted until the user opts in)
    pub sfx_muted: bool,
    /// Background music
    pub bgm_enabled: bool,

    // === Presentation ===
    /// Skip rolling animations and particle effects
    pub reduced_motion: bool,
    /// How long the page rolls preview numbers before revealing a draw
    pub reveal_delay_ms: u32,

    // === Custom game ===
    /// Last range/count used on the custom pick form
    pub custom: DrawRequest,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_muted: true,
            bgm_enabled: false,

            reduced_motion: false,
            reveal_delay_ms: 1200,

            custom: DrawRequest {
                range: crate::draw::Range { min: 1, max: 49 },
                count: 6,
            },
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "lucky_lots_settings";

    /// Effective reveal delay (respects reduced_motion)
    pub fn effective_reveal_delay_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.reveal_delay_ms
        }
    }

    /// Load settings, falling back to defaults
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match load_json::<Self, _>(store, Self::STORAGE_KEY) {
            Some(settings) if settings.custom.range.validate().is_ok() => {
                log::info!("Loaded settings");
                settings
            }
            Some(_) => {
                log::warn!("Stored custom range is invalid, using default settings");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings (failures are logged)
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        match save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}
