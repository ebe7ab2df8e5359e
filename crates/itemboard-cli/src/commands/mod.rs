//! Command handlers grouped by resource.

pub(crate) mod health;
pub(crate) mod items;
