//! Pure view derivations for the items page.

use crate::features::items::state::ItemsState;
use itemboard_api_models::Item;

/// Interaction mode of a single row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowMode {
    /// Name with Edit/Delete buttons.
    Viewing,
    /// Inline rename input.
    Editing,
    /// Delete confirmation prompt.
    ConfirmingDelete,
}

/// Everything the row component renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Current mode.
    pub mode: RowMode,
    /// Rename in flight.
    pub saving: bool,
    /// Delete in flight.
    pub deleting: bool,
    /// Save button enabled.
    pub can_save: bool,
    /// Edit input value; empty outside edit mode.
    pub draft: String,
}

/// Derive the view of `item` from page state.
#[must_use]
pub fn row_view(state: &ItemsState, item: &Item) -> RowView {
    let saving = state.is_saving(item.id);
    let deleting = state.is_deleting(item.id);
    match state.editing.as_ref().filter(|edit| edit.id == item.id) {
        Some(edit) => RowView {
            mode: RowMode::Editing,
            saving,
            deleting,
            can_save: edit.can_save() && !saving,
            draft: edit.draft.clone(),
        },
        None => RowView {
            mode: if state.confirming == Some(item.id) {
                RowMode::ConfirmingDelete
            } else {
                RowMode::Viewing
            },
            saving,
            deleting,
            can_save: false,
            draft: String::new(),
        },
    }
}

/// Pagination footer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    /// Current page.
    pub page: u32,
    /// Total pages (at least 1).
    pub pages: u32,
    /// Total matching items.
    pub total: u64,
    /// Prev button enabled.
    pub can_prev: bool,
    /// Next button enabled.
    pub can_next: bool,
}

impl PaginationView {
    /// Summary text, e.g. `Page 2 of 3 (21 items)`.
    #[must_use]
    pub fn label(&self) -> String {
        let noun = if self.total == 1 { "item" } else { "items" };
        format!("Page {} of {} ({} {noun})", self.page, self.pages, self.total)
    }
}

/// Derive the pagination footer from page state.
#[must_use]
pub fn pagination_view(state: &ItemsState) -> PaginationView {
    let pages = state.meta().pages.max(1);
    let page = state.params.page;
    PaginationView {
        page,
        pages,
        total: state.meta().total,
        can_prev: page > 1,
        can_next: page < pages,
    }
}

/// Whether the loaded page violates `items <= limit` or `page <= pages`.
#[must_use]
pub fn page_is_inconsistent(state: &ItemsState) -> bool {
    let meta = state.meta();
    state.data.items.len() > meta.limit as usize || meta.page > meta.pages.max(1)
}
