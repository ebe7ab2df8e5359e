//! Feature slices: one folder per page.

pub mod add_item;
pub mod home;
pub mod items;
