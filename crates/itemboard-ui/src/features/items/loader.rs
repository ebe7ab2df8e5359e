//! Items-data loader: fetch bookkeeping for the list page.
//!
//! # Design
//! - Every fetch captures a `LoadToken`; starting a newer fetch supersedes it.
//! - Completions carrying a superseded token are dropped before touching state.
//! - Identical inputs are not re-requested unless `reload` forces it.

use crate::services::error::ApiError;
use itemboard_api_models::{DEFAULT_PAGE_LIMIT, Item, ItemListQuery, ItemListResponse};

/// Banner shown when a load fails without a usable message.
pub const LOAD_FAILED: &str = "Failed to load items";

/// Identity of a single list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

/// Tracks which fetch is allowed to settle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadTracker {
    issued: u64,
    current: Option<LoadToken>,
}

impl LoadTracker {
    /// Start a fetch, superseding any in flight.
    pub fn begin(&mut self) -> LoadToken {
        self.issued = self.issued.wrapping_add(1);
        let token = LoadToken(self.issued);
        self.current = Some(token);
        token
    }

    /// Whether `token` belongs to the newest outstanding fetch.
    #[must_use]
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.current == Some(token)
    }

    /// Settle `token`; returns false when it was superseded.
    pub fn settle(&mut self, token: LoadToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = None;
        true
    }

    /// Forget the outstanding fetch so its completion is ignored.
    pub const fn abandon(&mut self) {
        self.current = None;
    }
}

/// Fetch the runner must execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token to report back with the result.
    pub token: LoadToken,
    /// Parameters sent to `GET /api/items`.
    pub query: ItemListQuery,
}

/// Pagination metadata reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Current 1-based page.
    pub page: u32,
    /// Total pages.
    pub pages: u32,
    /// Total matching items.
    pub total: u64,
    /// Page size.
    pub limit: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            page: 1,
            pages: 1,
            total: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageMeta {
    /// Copy metadata from a list response.
    #[must_use]
    pub const fn from_response(response: &ItemListResponse) -> Self {
        Self {
            page: response.page,
            pages: response.pages,
            total: response.total,
            limit: response.limit,
        }
    }
}

/// How a completion affected the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items and meta were replaced.
    Applied,
    /// The error banner was set; prior items kept.
    Failed,
    /// The token was superseded; nothing changed.
    Stale,
}

/// Loaded page plus fetch status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsData {
    /// Items on the current page, in server order.
    pub items: Vec<Item>,
    /// Pagination metadata.
    pub meta: PageMeta,
    /// A fetch is outstanding.
    pub loading: bool,
    /// Page error banner.
    pub error: Option<String>,
    tracker: LoadTracker,
    requested: Option<ItemListQuery>,
    applied: u64,
}

impl Default for ItemsData {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
            loading: true,
            error: None,
            tracker: LoadTracker::default(),
            requested: None,
            applied: 0,
        }
    }
}

impl ItemsData {
    /// Request `query`, unless it is already the current input set.
    pub fn request(&mut self, query: ItemListQuery) -> Option<FetchRequest> {
        if self.requested.as_ref() == Some(&query) {
            return None;
        }
        Some(self.issue(query))
    }

    /// Re-issue the current input set.
    pub fn reload(&mut self) -> Option<FetchRequest> {
        let query = self.requested.clone()?;
        Some(self.issue(query))
    }

    /// Issue `query` regardless of the previous input set.
    pub fn force(&mut self, query: ItemListQuery) -> FetchRequest {
        self.issue(query)
    }

    fn issue(&mut self, query: ItemListQuery) -> FetchRequest {
        let token = self.tracker.begin();
        self.loading = true;
        self.error = None;
        self.requested = Some(query.clone());
        FetchRequest { token, query }
    }

    /// Apply a fetch result if `token` is still current.
    pub fn complete(
        &mut self,
        token: LoadToken,
        result: Result<ItemListResponse, ApiError>,
    ) -> LoadOutcome {
        if !self.tracker.settle(token) {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.meta = PageMeta::from_response(&response);
                self.items = response.items;
                self.applied = self.applied.wrapping_add(1);
                LoadOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err.banner(LOAD_FAILED));
                LoadOutcome::Failed
            }
        }
    }

    /// Number of responses applied so far; changes whenever `items` is replaced.
    #[must_use]
    pub const fn applied(&self) -> u64 {
        self.applied
    }

    /// Drop the outstanding fetch and the remembered inputs.
    pub fn abandon(&mut self) {
        self.tracker.abandon();
        self.requested = None;
    }
}
