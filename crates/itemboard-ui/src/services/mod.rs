//! HTTP client helpers (REST).
//!
//! Request planning and error normalisation are DOM-free; only the transport
//! in `api` needs a browser.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
pub mod request;
