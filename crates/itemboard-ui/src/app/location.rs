//! Address bar access for list parameters.

use crate::core::logic::merge_url_query;
use gloo::console;
use gloo::utils::window;
use itemboard_api_models::ListParams;
use wasm_bindgen::JsValue;

/// Current `location.search`, or empty when unavailable.
pub(crate) fn current_search() -> String {
    window().location().search().unwrap_or_default()
}

/// Mirror `params` into the address bar without adding a history entry.
pub(crate) fn replace_list_params(params: &ListParams) {
    let location = window().location();
    let search = merge_url_query(&location.search().unwrap_or_default(), params);
    let path = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let url = format!("{path}{search}{hash}");
    let result = window()
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = result {
        console::warn!("failed to update address bar", err);
    }
}
