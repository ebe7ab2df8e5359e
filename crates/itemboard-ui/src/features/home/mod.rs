//! Home page: API health probe.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
