//! Browser transport for the items API.

use crate::core::logic::{HEALTH_PATH, ITEMS_PATH, build_items_path, item_path};
use crate::services::error::ApiError;
use crate::services::request::{
    HttpMethod, RequestOptions, decode_payload, parse_body, plan_request,
};
use gloo_net::http::{Method, Request};
use itemboard_api_models::{
    HealthResponse, Item, ItemCreateRequest, ItemListQuery, ItemListResponse, ItemUpdateRequest,
};
use serde_json::Value;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue a request and return the parsed body (`None` when empty or not JSON).
    pub(crate) async fn call(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let planned = plan_request(&self.base_url, path, &options);
        let mut req = Request::new(&planned.url).method(match planned.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        });
        for (name, value) in &planned.headers {
            req = req.header(name, value);
        }
        if let Some(body) = planned.body {
            req = req.body(body);
        }
        let response = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !response.ok() {
            return Err(ApiError::from_response(status, text.as_bytes()));
        }
        Ok(parse_body(&text))
    }

    pub(crate) async fn list_items(
        &self,
        query: &ItemListQuery,
    ) -> Result<ItemListResponse, ApiError> {
        let body = self
            .call(&build_items_path(query), RequestOptions::default())
            .await?;
        decode_payload(body, "list items")
    }

    pub(crate) async fn create_item(&self, name: &str) -> Result<Item, ApiError> {
        let payload = ItemCreateRequest {
            name: name.to_string(),
        };
        let body = self
            .call(ITEMS_PATH, RequestOptions::json(HttpMethod::Post, &payload)?)
            .await?;
        decode_payload(body, "create item")
    }

    pub(crate) async fn update_item(&self, id: i64, name: &str) -> Result<Item, ApiError> {
        let payload = ItemUpdateRequest {
            name: name.to_string(),
        };
        let body = self
            .call(&item_path(id), RequestOptions::json(HttpMethod::Put, &payload)?)
            .await?;
        decode_payload(body, "update item")
    }

    pub(crate) async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        self.call(&item_path(id), RequestOptions::new(HttpMethod::Delete))
            .await
            .map(|_| ())
    }

    pub(crate) async fn health(&self) -> Result<HealthResponse, ApiError> {
        let body = self.call(HEALTH_PATH, RequestOptions::default()).await?;
        Ok(body
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default())
    }
}
