//! Draw engine module
//!
//! Pure, synchronous number drawing. No I/O and no shared state: callers own
//! an engine and decide how (and whether) to reveal its results.

pub mod engine;
pub mod range;

pub use engine::DrawEngine;
pub use range::{DrawRequest, DrawResult, Range};
