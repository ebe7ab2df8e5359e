//! Core, DOM-free primitives and helpers for the Web UI.
pub mod debounce;
pub mod logic;
pub mod store;
