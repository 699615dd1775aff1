//! HTTP implementation of [`ArticleApi`] on top of reqwest.
//!
//! On `wasm32` reqwest delegates to the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::ArticleApi;
use crate::error::{ApiError, ErrorBody};
use crate::model::{Article, ArticleId, ListResponse, Page};
use crate::payload::{AmountChange, AmountPayload, ArticlePayload};
use crate::query::ArticleQuery;

#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    client: Client,
    base_url: String,
}

impl HttpArticleApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body text of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: ErrorBody::parse(&text),
            });
        }
        Ok(text)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[async_trait(?Send)]
impl ArticleApi for HttpArticleApi {
    async fn list(&self, query: &ArticleQuery) -> Result<Page, ApiError> {
        debug!(?query, "GET /articles");
        let request = self.client.get(self.url("/articles")).query(&query.to_params());
        let response: ListResponse = self.send_json(request).await?;
        Ok(response.into())
    }

    async fn list_low_amount(&self) -> Result<Vec<Article>, ApiError> {
        debug!("GET /articles/lowAmount");
        let request = self.client.get(self.url("/articles/lowAmount"));
        let response: ListResponse = self.send_json(request).await?;
        Ok(response.into())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        debug!(id, "DELETE /articles/{{id}}");
        let request = self.client.delete(self.url(&format!("/articles/{id}")));
        self.send(request).await.map(|_| ())
    }

    async fn change_amount(&self, id: ArticleId, change: AmountChange, amount: i64) -> Result<(), ApiError> {
        let path = format!("/articles/{id}/changeAmount/{}", change.path_segment());
        debug!(%path, amount, "PATCH");
        let request = self.client.patch(self.url(&path)).json(&AmountPayload { amount });
        self.send(request).await.map(|_| ())
    }

    async fn create(&self, payload: &ArticlePayload) -> Result<(), ApiError> {
        debug!(name = %payload.name, "POST /articles");
        let request = self.client.post(self.url("/articles")).json(payload);
        self.send(request).await.map(|_| ())
    }

    async fn update(&self, id: ArticleId, payload: &ArticlePayload) -> Result<(), ApiError> {
        debug!(id, "PUT /articles/{{id}}");
        let request = self.client.put(self.url(&format!("/articles/{id}"))).json(payload);
        self.send(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://localhost:8080/ "), "http://localhost:8080");
        assert_eq!(normalize_base_url("https://stock.example.org/api//"), "https://stock.example.org/api");
    }

    #[test]
    fn test_url_join() {
        let api = HttpArticleApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("/articles/lowAmount"), "http://localhost:8080/articles/lowAmount");
    }
}
