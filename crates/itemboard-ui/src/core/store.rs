//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep page state in one store so the effect runner and views share it.
//! - Each page owns a slice; reducers touch only their slice.

use crate::features::add_item::state::AddItemForm;
use crate::features::home::state::HealthStatus;
use crate::features::items::state::ItemsState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Items list page.
    pub items: ItemsState,
    /// Home page health probe.
    pub home: HealthStatus,
    /// Standalone add form.
    pub add_item: AddItemForm,
}
