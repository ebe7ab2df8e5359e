//! Small building blocks shared across pages.

pub(crate) mod empty_state;
