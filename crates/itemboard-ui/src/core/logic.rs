//! Pure UI helpers extracted from components for non-wasm testing.

use itemboard_api_models::{ItemListQuery, ListParams};

/// Base path of the items resource.
pub const ITEMS_PATH: &str = "/api/items";
/// Health probe path.
pub const HEALTH_PATH: &str = "/api/health";

/// Outcome of a key press inside the inline edit input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKeyOutcome {
    /// Submit the draft.
    Save,
    /// Abandon the draft.
    Cancel,
}

/// Map a key press in the edit input to an edit outcome.
#[must_use]
pub fn interpret_edit_key(key: &str) -> Option<EditKeyOutcome> {
    match key {
        "Enter" => Some(EditKeyOutcome::Save),
        "Escape" | "Esc" => Some(EditKeyOutcome::Cancel),
        _ => None,
    }
}

/// Build the list path (`/api/items?q=..&page=..&limit=..&sort=..&order=..`).
#[must_use]
pub fn build_items_path(query: &ItemListQuery) -> String {
    let encoded: Vec<String> = query
        .pairs()
        .iter()
        .map(|(key, value)| encode_pair(key, value))
        .collect();
    format!("{ITEMS_PATH}?{}", encoded.join("&"))
}

/// Path of a single item resource.
#[must_use]
pub fn item_path(id: i64) -> String {
    format!("{ITEMS_PATH}/{id}")
}

/// Decode a `location.search` string into key/value pairs.
///
/// Accepts an optional leading `?`; `+` decodes to a space.
#[must_use]
pub fn decode_query_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}

/// Read list params from the address bar query string.
#[must_use]
pub fn parse_url_query(search: &str) -> ListParams {
    ListParams::from_pairs(decode_query_pairs(search))
}

/// Rewrite `search` so it mirrors `params`.
///
/// Keys owned by the list view are replaced in place (duplicates dropped) and
/// appended when missing; unrelated pairs keep their original encoding and
/// position. Returns the new query string including the leading `?`.
#[must_use]
pub fn merge_url_query(search: &str, params: &ListParams) -> String {
    let owned = params.url_pairs();
    let mut emitted = [false; ListParams::URL_KEYS.len()];
    let mut segments: Vec<String> = Vec::new();

    for segment in search.trim_start_matches('?').split('&') {
        if segment.is_empty() {
            continue;
        }
        let raw_key = segment.split_once('=').map_or(segment, |(key, _)| key);
        let key = decode_component(raw_key);
        match ListParams::URL_KEYS.iter().position(|name| *name == key) {
            Some(slot) if !emitted[slot] => {
                emitted[slot] = true;
                segments.push(encode_pair(owned[slot].0, &owned[slot].1));
            }
            Some(_) => {}
            None => segments.push(segment.to_string()),
        }
    }

    for (slot, (key, value)) in owned.iter().enumerate() {
        if !emitted[slot] {
            segments.push(encode_pair(key, value));
        }
    }

    format!("?{}", segments.join("&"))
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{key}={}", urlencoding::encode(value))
}
