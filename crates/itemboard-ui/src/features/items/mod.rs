//! Items list feature wiring.
//!
//! # Design
//! - All list behaviour lives in `ItemsState`; the view only renders and dispatches.
//! - HTTP calls are issued by the view's effect runner through the shared client.
//! - Search, sort, order and page are mirrored into the address bar.

pub mod actions;
pub mod loader;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
