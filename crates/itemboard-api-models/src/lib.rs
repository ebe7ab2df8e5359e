#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! Shared HTTP DTOs for the Itemboard items API.
//!
//! These types are re-used by the web UI and the CLI for request/response
//! encoding so both clients agree on one contract. The addressable list
//! parameters (`q`, `page`, `sort`, `order`) also live here because both
//! clients read them back from a shared UI link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page size requested by the clients when none is specified.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Item entity owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Server-assigned unique identifier.
    pub id: i64,
    /// Display name (never empty on the server).
    pub name: String,
    /// Creation timestamp. Offset-less timestamps are read as UTC.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// One page of items as returned by `GET /api/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemListResponse {
    /// Items on this page, in server order.
    pub items: Vec<Item>,
    /// Current page (1-based).
    pub page: u32,
    /// Total number of pages (at least 1).
    pub pages: u32,
    /// Total number of matching items.
    pub total: u64,
    /// Page size used by the server.
    pub limit: u32,
}

impl ItemListResponse {
    /// Whether the page honours `items.len() <= limit` and `page <= pages`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let fits = u32::try_from(self.items.len()).is_ok_and(|len| len <= self.limit);
        fits && self.page >= 1 && self.page <= self.pages.max(1)
    }
}

/// Body for `POST /api/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemCreateRequest {
    /// Name of the new item.
    pub name: String,
}

/// Body for `PUT /api/items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemUpdateRequest {
    /// Replacement name.
    pub name: String,
}

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Reported status string, e.g. `ok`.
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthResponse {
    /// Status label shown to users; `unknown` when the server omitted it.
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

/// Error document the server may attach to non-success responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Primary error message.
    #[serde(default)]
    pub error: Option<String>,
    /// Secondary message field used by some handlers.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-empty message, preferring `error` over `message`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| self.message.as_deref().filter(|value| !value.is_empty()))
    }

    /// Resolve the user-facing message for a failed response body.
    ///
    /// Falls back to `HTTP <status>` when the body is empty, is not JSON, or
    /// carries neither field.
    #[must_use]
    pub fn resolve(status: u16, body: &[u8]) -> String {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|parsed| parsed.text().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {status}"))
    }
}

/// Sort keys accepted by the list endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by identifier.
    #[default]
    Id,
    /// Sort by name.
    Name,
    /// Sort by creation time.
    CreatedAt,
}

impl SortKey {
    /// All keys in display order.
    pub const ALL: [Self; 3] = [Self::Id, Self::Name, Self::CreatedAt];

    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }

    /// Parse a wire value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Sort direction accepted by the list endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (newest ids first).
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a wire value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// View parameters for the item list, mirrored in the UI address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Free-text search query.
    pub query: String,
    /// Sort key.
    pub sort: SortKey,
    /// Sort direction.
    pub order: SortOrder,
    /// Requested page (1-based).
    pub page: u32,
    /// Page size. Not part of the address bar.
    pub limit: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortKey::default(),
            order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ListParams {
    /// Address-bar keys owned by the list view.
    pub const URL_KEYS: [&'static str; 4] = ["q", "page", "sort", "order"];

    /// Build params from decoded query pairs.
    ///
    /// The first occurrence of each key wins. Missing or invalid values fall
    /// back to the defaults (`q=""`, `sort=id`, `order=desc`, `page=1`).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = None;
        let mut page = None;
        let mut sort = None;
        let mut order = None;
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" if query.is_none() => query = Some(value.to_string()),
                "page" if page.is_none() => page = Some(parse_page(value)),
                "sort" if sort.is_none() => sort = Some(SortKey::parse(value)),
                "order" if order.is_none() => order = Some(SortOrder::parse(value)),
                _ => {}
            }
        }
        let defaults = Self::default();
        Self {
            query: query.unwrap_or(defaults.query),
            sort: sort.flatten().unwrap_or(defaults.sort),
            order: order.flatten().unwrap_or(defaults.order),
            page: page.flatten().unwrap_or(defaults.page),
            limit: defaults.limit,
        }
    }

    /// Undecoded address-bar pairs in canonical order.
    #[must_use]
    pub fn url_pairs(&self) -> [(&'static str, String); 4] {
        let [q, page, sort, order] = Self::URL_KEYS;
        [
            (q, self.query.clone()),
            (page, self.page.to_string()),
            (sort, self.sort.as_str().to_string()),
            (order, self.order.as_str().to_string()),
        ]
    }

    /// Query sent to the list endpoint for these params.
    #[must_use]
    pub fn to_query(&self) -> ItemListQuery {
        ItemListQuery {
            q: self.query.clone(),
            page: self.page,
            limit: self.limit,
            sort: self.sort,
            order: self.order,
        }
    }
}

fn parse_page(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

/// Query string of `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListQuery {
    /// Search text (may be empty).
    pub q: String,
    /// Requested page.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Sort key.
    pub sort: SortKey,
    /// Sort direction.
    pub order: SortOrder,
}

impl ItemListQuery {
    /// Undecoded pairs in wire order (`q`, `page`, `limit`, `sort`, `order`).
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            ("q", self.q.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
        ]
    }
}

mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(super) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|err| D::Error::custom(format!("invalid timestamp '{raw}': {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn item_accepts_rfc3339_and_naive_timestamps() {
        let zulu: Item = serde_json::from_value(json!({
            "id": 1, "name": "Alpha", "created_at": "2025-01-01T12:00:00Z"
        }))
        .unwrap();
        let naive: Item = serde_json::from_value(json!({
            "id": 1, "name": "Alpha", "created_at": "2025-01-01T12:00:00.000000"
        }))
        .unwrap();
        assert_eq!(zulu, item(1, "Alpha"));
        assert_eq!(naive.created_at, zulu.created_at);
    }

    #[test]
    fn item_rejects_garbage_timestamp() {
        let err = serde_json::from_value::<Item>(json!({
            "id": 1, "name": "Alpha", "created_at": "yesterday"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn list_response_consistency_checks_limit_and_pages() {
        let mut page = ItemListResponse {
            items: vec![item(1, "Alpha"), item(2, "Beta")],
            page: 1,
            pages: 1,
            total: 2,
            limit: 10,
        };
        assert!(page.is_consistent());
        page.limit = 1;
        assert!(!page.is_consistent());
        page.limit = 10;
        page.page = 3;
        assert!(!page.is_consistent());
    }

    #[test]
    fn error_body_prefers_error_then_message_then_status() {
        assert_eq!(
            ErrorBody::resolve(400, br#"{"error":"name is required","message":"x"}"#),
            "name is required"
        );
        assert_eq!(
            ErrorBody::resolve(409, br#"{"error":"","message":"duplicate"}"#),
            "duplicate"
        );
        assert_eq!(ErrorBody::resolve(500, b"<html>oops</html>"), "HTTP 500");
        assert_eq!(ErrorBody::resolve(502, b""), "HTTP 502");
        assert_eq!(ErrorBody::resolve(404, b"{}"), "HTTP 404");
    }

    #[test]
    fn health_label_defaults_to_unknown() {
        let parsed: HealthResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.status_label(), "unknown");
        let ok: HealthResponse = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert_eq!(ok.status_label(), "ok");
    }

    #[test]
    fn list_params_default_when_pairs_missing_or_invalid() {
        let params = ListParams::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(params, ListParams::default());
        assert_eq!(params.sort, SortKey::Id);
        assert_eq!(params.order, SortOrder::Desc);

        let params = ListParams::from_pairs([
            ("page", "0"),
            ("sort", "price"),
            ("order", "sideways"),
        ]);
        assert_eq!(params.page, 1);
        assert_eq!(params.sort, SortKey::Id);
        assert_eq!(params.order, SortOrder::Desc);
    }

    #[test]
    fn list_params_first_value_wins() {
        let params = ListParams::from_pairs([
            ("q", "alpha"),
            ("page", "3"),
            ("sort", "created_at"),
            ("order", "asc"),
            ("q", "beta"),
            ("page", "9"),
        ]);
        assert_eq!(params.query, "alpha");
        assert_eq!(params.page, 3);
        assert_eq!(params.sort, SortKey::CreatedAt);
        assert_eq!(params.order, SortOrder::Asc);
        assert_eq!(params.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn list_query_pairs_follow_wire_order() {
        let params = ListParams {
            query: "a b".into(),
            page: 2,
            sort: SortKey::Name,
            ..ListParams::default()
        };
        let pairs = params.to_query().pairs();
        let keys: Vec<&str> = pairs.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["q", "page", "limit", "sort", "order"]);
        assert_eq!(pairs[0].1, "a b");
        assert_eq!(pairs[2].1, "10");
        assert_eq!(pairs[3].1, "name");
    }

    #[test]
    fn url_pairs_cover_exactly_the_owned_keys() {
        let params = ListParams {
            page: 3,
            ..ListParams::default()
        };
        let pairs = params.url_pairs();
        let keys: Vec<_> = pairs.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ListParams::URL_KEYS);
        assert_eq!(ListParams::from_pairs(pairs), params);
    }

    #[test]
    fn sort_enums_serialize_as_snake_case() {
        assert_eq!(json!(SortKey::CreatedAt), json!("created_at"));
        assert_eq!(json!(SortOrder::Asc), json!("asc"));
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }
}
