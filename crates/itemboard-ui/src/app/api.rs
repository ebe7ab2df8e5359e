//! Items API client handed down the component tree.
//!
//! # Design
//! - The root component resolves the base URL once and builds the client.
//! - Pages outside the provider fall back to their own client.
//! - Equality is pointer identity, so re-providing the same context is free.

use crate::app::preferences::api_base_url;
use crate::services::api::ApiClient;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Client for the base URL configured at build time or derived from the page.
    pub(crate) fn resolve() -> Self {
        Self {
            client: Rc::new(ApiClient::new(api_base_url())),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
