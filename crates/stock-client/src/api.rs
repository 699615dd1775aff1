//! Backend Boundary
//!
//! One method per REST endpoint the dashboard consumes.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Article, ArticleId, Page};
use crate::payload::{AmountChange, ArticlePayload};
use crate::query::ArticleQuery;

/// Inventory backend operations.
///
/// Futures are not `Send`: in the browser every request runs on the UI thread.
#[async_trait(?Send)]
pub trait ArticleApi {
    /// `GET /articles`
    async fn list(&self, query: &ArticleQuery) -> Result<Page, ApiError>;

    /// `GET /articles/lowAmount`
    async fn list_low_amount(&self) -> Result<Vec<Article>, ApiError>;

    /// `DELETE /articles/{id}`
    async fn delete(&self, id: ArticleId) -> Result<(), ApiError>;

    /// `PATCH /articles/{id}/changeAmount/{add|subtract}`
    async fn change_amount(&self, id: ArticleId, change: AmountChange, amount: i64) -> Result<(), ApiError>;

    /// `POST /articles`
    async fn create(&self, payload: &ArticlePayload) -> Result<(), ApiError>;

    /// `PUT /articles/{id}`
    async fn update(&self, id: ArticleId, payload: &ArticlePayload) -> Result<(), ApiError>;
}
