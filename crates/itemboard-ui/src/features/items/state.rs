//! Items page state machine.
//!
//! # Design
//! - `ItemsState` is the single source of truth for the list page; views render
//!   from it and never mutate it directly.
//! - Transitions are pure: `apply` mutates state and returns the effects the
//!   wasm runner must execute (fetches, mutations, URL writes, timers).
//! - Deletes are optimistic; each in-flight delete keeps the row, its
//!   position and the load it was removed from. A failure puts the row back
//!   only while that load is still shown, otherwise the page is refetched.
//! - Completions arriving after `Unmount` are ignored; nothing the list page
//!   started may touch the address bar of another route.

use crate::core::debounce::Debouncer;
use crate::core::logic::{EditKeyOutcome, interpret_edit_key, parse_url_query};
use crate::features::items::actions::{ItemsAction, ItemsEffect};
use crate::features::items::loader::{ItemsData, LoadOutcome, PageMeta};
use crate::services::error::ApiError;
use itemboard_api_models::{Item, ListParams, SortKey, SortOrder};
use std::collections::{BTreeMap, BTreeSet};

/// Quiet period before a typed search is applied.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

const SAVE_FAILED: &str = "Failed to save item";
const DELETE_FAILED: &str = "Failed to delete item";
const ADD_FAILED: &str = "Failed to add item";

/// Inline rename in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    /// Row being edited.
    pub id: i64,
    /// Name when editing started.
    pub original: String,
    /// Current input value.
    pub draft: String,
}

impl EditDraft {
    /// Draft with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.draft.trim()
    }

    /// Whether the draft differs from the original and is not blank.
    #[must_use]
    pub fn can_save(&self) -> bool {
        let trimmed = self.trimmed();
        !trimmed.is_empty() && trimmed != self.original
    }
}

/// Add form on the list page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddDraft {
    /// Typed name.
    pub name: String,
    /// A create request is in flight.
    pub submitting: bool,
}

impl AddDraft {
    /// Whether the Add button is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.name.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DeleteSnapshot {
    index: usize,
    item: Item,
    generation: u64,
}

/// List page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsState {
    /// Parameters mirrored into the address bar.
    pub params: ListParams,
    /// Raw search input, ahead of the debounced `params.query`.
    pub search_input: String,
    /// Loaded page and fetch status.
    pub data: ItemsData,
    /// Active inline rename.
    pub editing: Option<EditDraft>,
    /// Row showing the delete confirmation prompt.
    pub confirming: Option<i64>,
    /// Add form.
    pub adding: AddDraft,
    search: Debouncer<String>,
    saving: BTreeSet<i64>,
    deleting: BTreeMap<i64, DeleteSnapshot>,
    mounted: bool,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            params: ListParams::default(),
            search_input: String::new(),
            data: ItemsData::default(),
            editing: None,
            confirming: None,
            adding: AddDraft::default(),
            search: Debouncer::new(String::new(), SEARCH_DEBOUNCE_MS),
            saving: BTreeSet::new(),
            deleting: BTreeMap::new(),
            mounted: false,
        }
    }
}

impl ItemsState {
    /// Apply `action`, returning the effects to execute.
    pub fn apply(&mut self, action: ItemsAction) -> Vec<ItemsEffect> {
        match action {
            ItemsAction::Mount { search } => self.mount(&search),
            ItemsAction::Unmount => {
                self.unmount();
                Vec::new()
            }
            ItemsAction::Saved { .. } | ItemsAction::Deleted { .. } | ItemsAction::Created { .. }
                if !self.mounted =>
            {
                Vec::new()
            }
            ItemsAction::SetQuery(text) => self.set_query(text),
            ItemsAction::QuerySettled(generation) => match self.search.fire(generation) {
                Some(value) => self.settle_query(value),
                None => Vec::new(),
            },
            ItemsAction::SetSort(sort) => self.set_sort(sort),
            ItemsAction::SetOrder(order) => self.set_order(order),
            ItemsAction::PrevPage => {
                if self.params.page <= 1 {
                    return Vec::new();
                }
                self.params.page -= 1;
                self.refresh()
            }
            ItemsAction::NextPage => {
                if self.params.page >= self.data.meta.pages {
                    return Vec::new();
                }
                self.params.page += 1;
                self.refresh()
            }
            ItemsAction::Reload => vec![self.reload()],
            ItemsAction::StartEdit(id) => {
                self.start_edit(id);
                Vec::new()
            }
            ItemsAction::EditDraft(text) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.draft = text;
                }
                Vec::new()
            }
            ItemsAction::EditKey(key) => match interpret_edit_key(&key) {
                Some(EditKeyOutcome::Save) => self.save_edit(),
                Some(EditKeyOutcome::Cancel) => {
                    self.editing = None;
                    Vec::new()
                }
                None => Vec::new(),
            },
            ItemsAction::SaveEdit => self.save_edit(),
            ItemsAction::CancelEdit => {
                self.editing = None;
                Vec::new()
            }
            ItemsAction::AskDelete(id) => {
                if self.data.items.iter().any(|item| item.id == id) {
                    self.confirming = Some(id);
                    self.editing = None;
                }
                Vec::new()
            }
            ItemsAction::CancelDelete => {
                self.confirming = None;
                Vec::new()
            }
            ItemsAction::ConfirmDelete(id) => self.confirm_delete(id),
            ItemsAction::SetNewName(name) => {
                self.adding.name = name;
                Vec::new()
            }
            ItemsAction::SubmitNew => self.submit_new(),
            ItemsAction::Loaded { token, result } => {
                if self.data.complete(token, result) == LoadOutcome::Applied {
                    self.drop_vanished_rows();
                }
                Vec::new()
            }
            ItemsAction::Saved { id, result } => {
                self.saved(id, result);
                Vec::new()
            }
            ItemsAction::Deleted { id, result } => self.deleted(id, result),
            ItemsAction::Created { result } => self.created(result),
        }
    }

    /// Whether a rename is in flight for `id`.
    #[must_use]
    pub fn is_saving(&self, id: i64) -> bool {
        self.saving.contains(&id)
    }

    /// Whether a delete is in flight for `id`.
    #[must_use]
    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.contains_key(&id)
    }

    /// Whether typed search text is still waiting for its quiet period.
    #[must_use]
    pub const fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    fn mount(&mut self, search: &str) -> Vec<ItemsEffect> {
        self.mounted = true;
        self.params = parse_url_query(search);
        self.search_input.clone_from(&self.params.query);
        self.search.reset(self.params.query.clone());
        self.editing = None;
        self.confirming = None;
        let fetch = self.data.force(self.params.to_query());
        vec![
            ItemsEffect::ReplaceUrl(self.params.clone()),
            ItemsEffect::Fetch(fetch),
        ]
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.search.cancel();
        self.data.abandon();
        self.saving.clear();
        self.deleting.clear();
        self.adding.submitting = false;
    }

    fn set_query(&mut self, text: String) -> Vec<ItemsEffect> {
        self.search_input.clone_from(&text);
        match self.search.input(text) {
            Some(ticket) => vec![ItemsEffect::ArmDebounce(ticket)],
            None => {
                let value = self.search.output().clone();
                self.settle_query(value)
            }
        }
    }

    fn settle_query(&mut self, value: String) -> Vec<ItemsEffect> {
        if value == self.params.query {
            return Vec::new();
        }
        self.params.query = value;
        self.params.page = 1;
        self.refresh()
    }

    fn set_sort(&mut self, sort: SortKey) -> Vec<ItemsEffect> {
        if sort == self.params.sort {
            return Vec::new();
        }
        self.params.sort = sort;
        self.params.page = 1;
        self.refresh()
    }

    fn set_order(&mut self, order: SortOrder) -> Vec<ItemsEffect> {
        if order == self.params.order {
            return Vec::new();
        }
        self.params.order = order;
        self.params.page = 1;
        self.refresh()
    }

    fn refresh(&mut self) -> Vec<ItemsEffect> {
        let mut effects = vec![ItemsEffect::ReplaceUrl(self.params.clone())];
        if let Some(fetch) = self.data.request(self.params.to_query()) {
            effects.push(ItemsEffect::Fetch(fetch));
        }
        effects
    }

    fn reload(&mut self) -> ItemsEffect {
        let fetch = self
            .data
            .reload()
            .unwrap_or_else(|| self.data.force(self.params.to_query()));
        ItemsEffect::Fetch(fetch)
    }

    fn start_edit(&mut self, id: i64) {
        let Some(item) = self.data.items.iter().find(|item| item.id == id) else {
            return;
        };
        self.editing = Some(EditDraft {
            id,
            original: item.name.clone(),
            draft: item.name.clone(),
        });
        self.confirming = None;
    }

    fn save_edit(&mut self) -> Vec<ItemsEffect> {
        let Some(edit) = self.editing.as_ref() else {
            return Vec::new();
        };
        if !edit.can_save() || self.saving.contains(&edit.id) {
            return Vec::new();
        }
        let id = edit.id;
        let name = edit.trimmed().to_string();
        self.saving.insert(id);
        vec![ItemsEffect::Update { id, name }]
    }

    fn saved(&mut self, id: i64, result: Result<Item, ApiError>) {
        self.saving.remove(&id);
        match result {
            Ok(updated) => {
                if let Some(slot) = self.data.items.iter_mut().find(|item| item.id == id) {
                    *slot = updated;
                }
                if self.editing.as_ref().is_some_and(|edit| edit.id == id) {
                    self.editing = None;
                }
            }
            Err(err) => self.data.error = Some(err.banner(SAVE_FAILED)),
        }
    }

    fn confirm_delete(&mut self, id: i64) -> Vec<ItemsEffect> {
        if self.deleting.contains_key(&id) {
            return Vec::new();
        }
        let Some(index) = self.data.items.iter().position(|item| item.id == id) else {
            return Vec::new();
        };
        let item = self.data.items.remove(index);
        self.data.meta.total = self.data.meta.total.saturating_sub(1);
        let generation = self.data.applied();
        self.deleting.insert(
            id,
            DeleteSnapshot {
                index,
                item,
                generation,
            },
        );
        if self.confirming == Some(id) {
            self.confirming = None;
        }
        vec![ItemsEffect::Delete { id }]
    }

    fn deleted(&mut self, id: i64, result: Result<(), ApiError>) -> Vec<ItemsEffect> {
        let Some(snapshot) = self.deleting.remove(&id) else {
            return Vec::new();
        };
        match result {
            Ok(()) if self.data.items.is_empty() => {
                if self.params.page > 1 {
                    self.params.page -= 1;
                    self.refresh()
                } else {
                    vec![self.reload()]
                }
            }
            Ok(()) => Vec::new(),
            Err(err) => {
                let effects = if snapshot.generation == self.data.applied() {
                    self.restore(snapshot);
                    self.confirming = Some(id);
                    Vec::new()
                } else {
                    vec![self.reload()]
                };
                self.data.error = Some(err.banner(DELETE_FAILED));
                effects
            }
        }
    }

    fn restore(&mut self, snapshot: DeleteSnapshot) {
        let DeleteSnapshot { index, item, .. } = snapshot;
        if self.data.items.iter().any(|current| current.id == item.id) {
            return;
        }
        let index = index.min(self.data.items.len());
        self.data.items.insert(index, item);
        self.data.meta.total = self.data.meta.total.saturating_add(1);
    }

    fn submit_new(&mut self) -> Vec<ItemsEffect> {
        if !self.adding.can_submit() {
            return Vec::new();
        }
        self.adding.submitting = true;
        vec![ItemsEffect::Create {
            name: self.adding.name.trim().to_string(),
        }]
    }

    fn created(&mut self, result: Result<Item, ApiError>) -> Vec<ItemsEffect> {
        self.adding.submitting = false;
        match result {
            Ok(_) => {
                self.adding.name.clear();
                vec![ItemsEffect::FocusAddInput, self.reload()]
            }
            Err(err) => {
                self.data.error = Some(err.banner(ADD_FAILED));
                Vec::new()
            }
        }
    }

    fn drop_vanished_rows(&mut self) {
        let present = |id: i64| self.data.items.iter().any(|item| item.id == id);
        if self.editing.as_ref().is_some_and(|edit| !present(edit.id)) {
            self.editing = None;
        }
        if self.confirming.is_some_and(|id| !present(id)) {
            self.confirming = None;
        }
    }

    /// Pagination metadata of the loaded page.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.data.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::items::loader::FetchRequest;
    use chrono::{TimeZone, Utc};
    use itemboard_api_models::ItemListResponse;

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn fetch_of(effects: &[ItemsEffect]) -> FetchRequest {
        effects
            .iter()
            .find_map(|effect| match effect {
                ItemsEffect::Fetch(fetch) => Some(fetch.clone()),
                _ => None,
            })
            .expect("fetch effect")
    }

    fn has_fetch(effects: &[ItemsEffect]) -> bool {
        effects
            .iter()
            .any(|effect| matches!(effect, ItemsEffect::Fetch(_)))
    }

    fn respond(state: &mut ItemsState, fetch: &FetchRequest, items: Vec<Item>, pages: u32, total: u64) {
        let response = ItemListResponse {
            items,
            page: fetch.query.page,
            pages,
            total,
            limit: fetch.query.limit,
        };
        state.apply(ItemsAction::Loaded {
            token: fetch.token,
            result: Ok(response),
        });
    }

    fn mounted(search: &str, items: Vec<Item>, pages: u32, total: u64) -> ItemsState {
        let mut state = ItemsState::default();
        let effects = state.apply(ItemsAction::Mount {
            search: search.to_string(),
        });
        respond(&mut state, &fetch_of(&effects), items, pages, total);
        state
    }

    #[test]
    fn mount_reads_url_and_fetches_once() {
        let mut state = ItemsState::default();
        assert!(state.data.loading);
        let effects = state.apply(ItemsAction::Mount {
            search: "?q=be&page=2&sort=name&order=asc".into(),
        });
        assert_eq!(state.params.query, "be");
        assert_eq!(state.search_input, "be");
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], ItemsEffect::ReplaceUrl(state.params.clone()));
        let fetch = fetch_of(&effects);
        assert_eq!(fetch.query.page, 2);
        assert_eq!(fetch.query.sort, SortKey::Name);
        assert_eq!(fetch.query.order, SortOrder::Asc);
        assert_eq!(fetch.query.limit, 10);
    }

    #[test]
    fn initial_load_shows_server_items_in_order() {
        let state = mounted("", vec![item(2, "Beta"), item(1, "Alpha")], 1, 2);
        assert!(!state.data.loading);
        let names: Vec<_> = state.data.items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Beta", "Alpha"]);
        assert_eq!(state.meta().total, 2);
        assert!(state.data.items.len() <= state.meta().limit as usize);
        assert!(state.meta().page <= state.meta().pages);
    }

    #[test]
    fn failed_load_surfaces_message_and_keeps_items() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        let effects = state.apply(ItemsAction::Reload);
        let fetch = fetch_of(&effects);
        state.apply(ItemsAction::Loaded {
            token: fetch.token,
            result: Err(ApiError::Network("Network down".into())),
        });
        assert_eq!(state.data.error.as_deref(), Some("Network down"));
        assert_eq!(state.data.items.len(), 1);
        assert!(!state.data.loading);
    }

    #[test]
    fn search_is_debounced_and_resets_page() {
        let mut state = mounted("?page=3", vec![item(1, "Alpha")], 3, 21);
        let first = state.apply(ItemsAction::SetQuery("b".into()));
        let second = state.apply(ItemsAction::SetQuery("be".into()));
        let [ItemsEffect::ArmDebounce(stale)] = first.as_slice() else {
            panic!("expected debounce ticket, got {first:?}");
        };
        let [ItemsEffect::ArmDebounce(current)] = second.as_slice() else {
            panic!("expected debounce ticket, got {second:?}");
        };
        assert_eq!(current.delay_ms, SEARCH_DEBOUNCE_MS);
        assert!(state.search_pending());
        assert!(state.apply(ItemsAction::QuerySettled(stale.generation)).is_empty());
        assert_eq!(state.params.page, 3);

        let effects = state.apply(ItemsAction::QuerySettled(current.generation));
        assert_eq!(state.params.query, "be");
        assert_eq!(state.params.page, 1);
        assert_eq!(effects[0], ItemsEffect::ReplaceUrl(state.params.clone()));
        assert_eq!(fetch_of(&effects).query.q, "be");
    }

    #[test]
    fn sort_and_order_changes_reset_page() {
        let mut state = mounted("?page=2", vec![item(1, "Alpha")], 2, 11);
        assert!(state.apply(ItemsAction::SetSort(SortKey::Id)).is_empty());
        let effects = state.apply(ItemsAction::SetSort(SortKey::CreatedAt));
        assert_eq!(state.params.page, 1);
        assert_eq!(fetch_of(&effects).query.sort, SortKey::CreatedAt);

        state.params.page = 2;
        let effects = state.apply(ItemsAction::SetOrder(SortOrder::Asc));
        assert_eq!(state.params.page, 1);
        assert_eq!(fetch_of(&effects).query.order, SortOrder::Asc);
    }

    #[test]
    fn paging_stops_at_bounds() {
        let mut state = mounted("", vec![item(1, "Alpha")], 2, 11);
        assert!(state.apply(ItemsAction::PrevPage).is_empty());
        let effects = state.apply(ItemsAction::NextPage);
        assert_eq!(state.params.page, 2);
        let fetch = fetch_of(&effects);
        respond(&mut state, &fetch, vec![item(11, "K")], 2, 11);
        assert!(state.apply(ItemsAction::NextPage).is_empty());
        assert!(has_fetch(&state.apply(ItemsAction::PrevPage)));
        assert_eq!(state.params.page, 1);
    }

    #[test]
    fn editing_one_row_clears_other_row_modes() {
        let mut state = mounted("", vec![item(1, "Alpha"), item(2, "Beta")], 1, 2);
        state.apply(ItemsAction::AskDelete(2));
        assert_eq!(state.confirming, Some(2));
        state.apply(ItemsAction::StartEdit(1));
        assert_eq!(state.confirming, None);
        assert_eq!(state.editing.as_ref().map(|edit| edit.id), Some(1));
        assert_eq!(state.editing.as_ref().map(|edit| edit.draft.as_str()), Some("Alpha"));

        state.apply(ItemsAction::AskDelete(2));
        assert!(state.editing.is_none());
        assert_eq!(state.confirming, Some(2));
        state.apply(ItemsAction::StartEdit(2));
        assert_eq!(state.editing.as_ref().map(|edit| edit.id), Some(2));
        assert!(state.confirming.is_none());
    }

    #[test]
    fn save_skips_blank_or_unchanged_drafts() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        state.apply(ItemsAction::StartEdit(1));
        assert!(state.apply(ItemsAction::SaveEdit).is_empty());
        state.apply(ItemsAction::EditDraft("  Alpha ".into()));
        assert!(state.apply(ItemsAction::SaveEdit).is_empty());
        state.apply(ItemsAction::EditDraft("   ".into()));
        assert!(state.apply(ItemsAction::EditKey("Enter".into())).is_empty());
        assert!(state.editing.is_some());
    }

    #[test]
    fn save_patches_only_the_edited_row() {
        let mut state = mounted("", vec![item(1, "Alpha"), item(2, "Beta")], 1, 2);
        state.apply(ItemsAction::StartEdit(1));
        state.apply(ItemsAction::EditDraft(" Alpha v2 ".into()));
        let effects = state.apply(ItemsAction::EditKey("Enter".into()));
        assert_eq!(
            effects,
            vec![ItemsEffect::Update {
                id: 1,
                name: "Alpha v2".into()
            }]
        );
        assert!(state.is_saving(1));
        assert!(state.apply(ItemsAction::SaveEdit).is_empty());

        state.apply(ItemsAction::Saved {
            id: 1,
            result: Ok(item(1, "Alpha v2")),
        });
        assert!(!state.is_saving(1));
        assert!(state.editing.is_none());
        assert_eq!(state.data.items[0].name, "Alpha v2");
        assert_eq!(state.data.items[1].name, "Beta");
    }

    #[test]
    fn failed_save_stays_editing_with_banner() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        state.apply(ItemsAction::StartEdit(1));
        state.apply(ItemsAction::EditDraft("Gamma".into()));
        state.apply(ItemsAction::SaveEdit);
        state.apply(ItemsAction::Saved {
            id: 1,
            result: Err(ApiError::from_response(409, br#"{"error":"duplicate name"}"#)),
        });
        assert_eq!(state.data.error.as_deref(), Some("duplicate name"));
        assert_eq!(state.editing.as_ref().map(|edit| edit.draft.as_str()), Some("Gamma"));
        assert_eq!(state.data.items[0].name, "Alpha");
    }

    #[test]
    fn escape_cancels_edit() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        state.apply(ItemsAction::StartEdit(1));
        state.apply(ItemsAction::EditKey("Escape".into()));
        assert!(state.editing.is_none());
    }

    #[test]
    fn delete_is_optimistic_and_ignores_repeat_confirms() {
        let mut state = mounted("", vec![item(1, "Alpha"), item(2, "Beta")], 1, 2);
        state.apply(ItemsAction::AskDelete(1));
        let effects = state.apply(ItemsAction::ConfirmDelete(1));
        assert_eq!(effects, vec![ItemsEffect::Delete { id: 1 }]);
        assert_eq!(state.data.items.len(), 1);
        assert_eq!(state.meta().total, 1);
        assert!(state.is_deleting(1));
        assert!(state.apply(ItemsAction::ConfirmDelete(1)).is_empty());

        let effects = state.apply(ItemsAction::Deleted {
            id: 1,
            result: Ok(()),
        });
        assert!(effects.is_empty());
        assert!(!state.is_deleting(1));
    }

    #[test]
    fn failed_delete_restores_row_position_and_total() {
        let mut state = mounted(
            "",
            vec![item(1, "Alpha"), item(2, "Beta"), item(3, "Gamma")],
            1,
            3,
        );
        state.apply(ItemsAction::AskDelete(2));
        state.apply(ItemsAction::ConfirmDelete(2));
        state.apply(ItemsAction::Deleted {
            id: 2,
            result: Err(ApiError::from_response(500, b"")),
        });
        let ids: Vec<_> = state.data.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(state.meta().total, 3);
        assert_eq!(state.confirming, Some(2));
        assert_eq!(state.data.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn failed_delete_after_page_change_refetches_instead_of_splicing() {
        let first_page: Vec<_> = (1..=10).map(|id| item(id, "Row")).collect();
        let mut state = mounted("", first_page, 2, 11);
        state.apply(ItemsAction::ConfirmDelete(5));
        let effects = state.apply(ItemsAction::NextPage);
        respond(&mut state, &fetch_of(&effects), vec![item(11, "K")], 2, 11);

        let effects = state.apply(ItemsAction::Deleted {
            id: 5,
            result: Err(ApiError::from_response(500, b"")),
        });
        let ids: Vec<_> = state.data.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, [11]);
        assert_eq!(state.meta().total, 11);
        assert!(state.confirming.is_none());
        assert_eq!(fetch_of(&effects).query.page, 2);
        assert!(state.data.loading);
        assert_eq!(state.data.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn emptying_a_later_page_steps_back_and_reloads() {
        let mut state = mounted("?page=2", vec![item(11, "K")], 2, 11);
        state.apply(ItemsAction::ConfirmDelete(11));
        let effects = state.apply(ItemsAction::Deleted {
            id: 11,
            result: Ok(()),
        });
        assert_eq!(state.params.page, 1);
        assert_eq!(effects[0], ItemsEffect::ReplaceUrl(state.params.clone()));
        assert_eq!(fetch_of(&effects).query.page, 1);
    }

    #[test]
    fn emptying_the_first_page_reloads_in_place() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        state.apply(ItemsAction::ConfirmDelete(1));
        let effects = state.apply(ItemsAction::Deleted {
            id: 1,
            result: Ok(()),
        });
        assert_eq!(state.params.page, 1);
        assert_eq!(effects.len(), 1);
        assert_eq!(fetch_of(&effects).query.page, 1);
        assert!(state.data.loading);
    }

    #[test]
    fn add_reloads_and_refocuses_on_success() {
        let mut state = mounted("", vec![item(1, "Alpha")], 1, 1);
        assert!(state.apply(ItemsAction::SubmitNew).is_empty());
        state.apply(ItemsAction::SetNewName("  Delta ".into()));
        let effects = state.apply(ItemsAction::SubmitNew);
        assert_eq!(
            effects,
            vec![ItemsEffect::Create {
                name: "Delta".into()
            }]
        );
        assert!(!state.adding.can_submit());
        assert!(state.apply(ItemsAction::SubmitNew).is_empty());

        let effects = state.apply(ItemsAction::Created {
            result: Ok(item(2, "Delta")),
        });
        assert_eq!(effects[0], ItemsEffect::FocusAddInput);
        assert!(has_fetch(&effects));
        assert!(state.adding.name.is_empty());
        assert!(!state.adding.submitting);
    }

    #[test]
    fn failed_add_keeps_typed_name() {
        let mut state = mounted("", Vec::new(), 1, 0);
        state.apply(ItemsAction::SetNewName("Delta".into()));
        state.apply(ItemsAction::SubmitNew);
        let effects = state.apply(ItemsAction::Created {
            result: Err(ApiError::from_response(400, br#"{"message":"too long"}"#)),
        });
        assert!(effects.is_empty());
        assert_eq!(state.adding.name, "Delta");
        assert_eq!(state.data.error.as_deref(), Some("too long"));
    }

    #[test]
    fn unmount_ignores_late_results() {
        let mut state = ItemsState::default();
        let effects = state.apply(ItemsAction::Mount {
            search: String::new(),
        });
        state.apply(ItemsAction::Unmount);
        respond(&mut state, &fetch_of(&effects), vec![item(1, "Alpha")], 1, 1);
        assert!(state.data.items.is_empty());
    }

    #[test]
    fn mutations_settling_after_unmount_emit_nothing() {
        let mut state = mounted("?page=2", vec![item(11, "K")], 2, 11);
        state.apply(ItemsAction::ConfirmDelete(11));
        state.apply(ItemsAction::SetNewName("Delta".into()));
        state.apply(ItemsAction::SubmitNew);
        state.apply(ItemsAction::Unmount);
        assert!(!state.is_deleting(11));
        assert!(!state.adding.submitting);

        let effects = state.apply(ItemsAction::Deleted {
            id: 11,
            result: Ok(()),
        });
        assert!(effects.is_empty());
        let effects = state.apply(ItemsAction::Created {
            result: Ok(item(12, "Delta")),
        });
        assert!(effects.is_empty());
        assert_eq!(state.params.page, 2);

        let effects = state.apply(ItemsAction::Mount {
            search: "?page=2".into(),
        });
        assert_eq!(fetch_of(&effects).query.page, 2);
    }

    #[test]
    fn reload_prunes_modes_for_vanished_rows() {
        let mut state = mounted("", vec![item(1, "Alpha"), item(2, "Beta")], 1, 2);
        state.apply(ItemsAction::StartEdit(1));
        let effects = state.apply(ItemsAction::Reload);
        respond(&mut state, &fetch_of(&effects), vec![item(2, "Beta")], 1, 1);
        assert!(state.editing.is_none());
    }
}
