//! Lucky Lots - A festival lottery number picker
//!
//! Core modules:
//! - `draw`: Bounded random draws (unique primary zone, optional bonus zone)
//! - `games`: Preset and custom game definitions
//! - `history`: Recency-bounded ledger of past draws
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `ritual`: Long-press fortune poem mini-game
//! - `settings`: User preferences
//! - `web`: Browser bindings (wasm32 only)

pub mod draw;
pub mod error;
pub mod games;
pub mod history;
pub mod persistence;
pub mod platform;
pub mod ritual;
pub mod settings;
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use draw::{DrawEngine, DrawRequest, DrawResult, Range};
pub use error::{DrawError, StoreError};
pub use games::GameConfig;
pub use history::{HistoryEntry, HistoryLedger};
pub use ritual::{FortunePoem, FortuneRitual};
pub use settings::Settings;
