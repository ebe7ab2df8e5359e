//! Items page actions and the side effects they request.

use crate::core::debounce::DebounceTicket;
use crate::features::items::loader::{FetchRequest, LoadToken};
use crate::services::error::ApiError;
use itemboard_api_models::{Item, ItemListResponse, ListParams, SortKey, SortOrder};

/// Inputs to the items state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemsAction {
    /// Page mounted with the given `location.search`.
    Mount {
        /// Raw query string of the address bar.
        search: String,
    },
    /// Page unmounted.
    Unmount,
    /// Search input changed.
    SetQuery(String),
    /// Debounce timer for `generation` elapsed.
    QuerySettled(u64),
    /// Sort key selected.
    SetSort(SortKey),
    /// Sort order selected.
    SetOrder(SortOrder),
    /// Previous page requested.
    PrevPage,
    /// Next page requested.
    NextPage,
    /// Retry the current load.
    Reload,
    /// Enter edit mode for a row.
    StartEdit(i64),
    /// Edit input changed.
    EditDraft(String),
    /// Key pressed in the edit input.
    EditKey(String),
    /// Save the active edit.
    SaveEdit,
    /// Leave edit mode without saving.
    CancelEdit,
    /// Ask to delete a row.
    AskDelete(i64),
    /// Dismiss the delete prompt.
    CancelDelete,
    /// Confirm deletion of a row.
    ConfirmDelete(i64),
    /// Add input changed.
    SetNewName(String),
    /// Submit the add form.
    SubmitNew,
    /// List fetch settled.
    Loaded {
        /// Token captured when the fetch started.
        token: LoadToken,
        /// Server response.
        result: Result<ItemListResponse, ApiError>,
    },
    /// Rename settled.
    Saved {
        /// Edited row.
        id: i64,
        /// Updated item.
        result: Result<Item, ApiError>,
    },
    /// Delete settled.
    Deleted {
        /// Deleted row.
        id: i64,
        /// Outcome.
        result: Result<(), ApiError>,
    },
    /// Create settled.
    Created {
        /// Created item.
        result: Result<Item, ApiError>,
    },
}

/// Work requested by a transition, executed by the page runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsEffect {
    /// `GET /api/items` and report `Loaded`.
    Fetch(FetchRequest),
    /// `POST /api/items` and report `Created`.
    Create {
        /// Trimmed name.
        name: String,
    },
    /// `PUT /api/items/{id}` and report `Saved`.
    Update {
        /// Row id.
        id: i64,
        /// Trimmed name.
        name: String,
    },
    /// `DELETE /api/items/{id}` and report `Deleted`.
    Delete {
        /// Row id.
        id: i64,
    },
    /// Mirror params into the address bar (history replace).
    ReplaceUrl(ListParams),
    /// Arm the search debounce timer.
    ArmDebounce(DebounceTicket),
    /// Focus the add input.
    FocusAddInput,
}
