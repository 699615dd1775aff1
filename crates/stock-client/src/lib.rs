//! Stock Client
//!
//! REST bindings and list operations for the inventory backend.
//! Holds no UI code so every operation can be exercised natively.

pub mod model;
pub mod query;
pub mod payload;
pub mod error;
pub mod api;
pub mod http;
pub mod ops;
pub mod sequence;

#[cfg(test)]
mod fake;

pub use api::ArticleApi;
pub use error::{ApiError, ErrorBody};
pub use http::{normalize_base_url, HttpArticleApi};
pub use model::{Article, ArticleId, Category, Page, Timestamp, Unit};
pub use payload::{AmountChange, AmountPayload, ArticleDraft, ArticlePayload};
pub use query::{ArticleQuery, Sort, SortDirection, SortField};
pub use sequence::{FetchSequencer, FetchTicket};
