//! Reusable Yew components.

pub(crate) mod atoms;
pub(crate) mod item_row;
pub(crate) mod pagination;
