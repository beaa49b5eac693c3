//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time
//! - RNG seeding

/// Current Unix time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current Unix time in milliseconds
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Seed for a fresh draw engine (getrandom; `wasm_js` backend on the web)
pub fn entropy_seed() -> u64 {
    rand::random()
}
