//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (requestAnimationFrame on web)
//! - Input coordinate mapping
//! - Canvas sizing

#[cfg(target_arch = "wasm32")]
pub mod frame;
pub mod input;

pub use input::{ClientRect, fit_to_container, pointer_to_field};
