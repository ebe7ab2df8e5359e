//! Standalone add-item page.
//!
//! # Design
//! - Validate the name client-side before calling the API.
//! - Navigate back to the list once the item exists.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
