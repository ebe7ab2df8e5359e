//! Environment helpers for the app shell.

use gloo::utils::window;
use web_sys::Url;

/// Build-time API base URL override.
const API_URL_OVERRIDE: Option<&str> = option_env!("ITEMBOARD_API_URL");

pub(crate) fn api_base_url() -> String {
    if let Some(url) = API_URL_OVERRIDE.map(str::trim).filter(|url| !url.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:5001".to_string());

    if let Ok(url) = Url::new(&href) {
        let mut base = format!("{}//{}", url.protocol(), url.hostname());
        let port = url.port();
        if !port.is_empty() {
            base.push(':');
            base.push_str(&port);
        }
        return base;
    }

    "http://localhost:5001".to_string()
}
