//! List Operations
//!
//! What the dashboard does with the backend, independent of rendering.

use tracing::{debug, error, info};

use crate::api::ArticleApi;
use crate::error::ApiError;
use crate::model::{Article, ArticleId, Page};
use crate::payload::{AmountChange, ArticleDraft};
use crate::query::ArticleQuery;

/// Fetch one page with the given parameters.
pub async fn fetch_articles<A: ArticleApi>(api: &A, query: &ArticleQuery) -> Result<Page, ApiError> {
    match api.list(query).await {
        Ok(page) => {
            debug!(page = query.page, rows = page.content.len(), total = page.total_items, "articles fetched");
            Ok(page)
        }
        Err(e) => {
            error!(error = %e, "fetching articles failed");
            Err(e)
        }
    }
}

/// Page to show after deleting a row from `page`, which held `rows_on_page` rows.
pub fn page_after_delete(page: u32, rows_on_page: usize) -> u32 {
    if rows_on_page <= 1 && page > 0 {
        page - 1
    } else {
        page
    }
}

/// `DELETE /articles/{id}`. No local row is removed; callers resynchronize.
pub async fn delete_article<A: ArticleApi>(api: &A, id: ArticleId) -> Result<(), ApiError> {
    api.delete(id).await.map_err(|e| {
        error!(id, error = %e, "deleting article failed");
        e
    })?;
    info!(id, "article deleted");
    Ok(())
}

/// Refetch after a delete so the visible page matches the backend.
///
/// `rows_on_page` is the row count the view showed before the delete.
/// Returns the (possibly moved) query together with the fresh page.
pub async fn resync_after_delete<A: ArticleApi>(
    api: &A,
    query: &ArticleQuery,
    rows_on_page: usize,
) -> Result<(ArticleQuery, Page), ApiError> {
    let mut next = query.clone();
    next.change_page(page_after_delete(query.page, rows_on_page));
    let mut page = fetch_articles(api, &next).await?;

    // Someone else may have shrunk the collection meanwhile.
    if page.is_empty() && next.page > 0 && next.page >= page.total_pages {
        next.change_page(page.last_page_index());
        page = fetch_articles(api, &next).await?;
    }
    Ok((next, page))
}

/// Add to or subtract from an article's amount. A zero delta never reaches the backend.
pub async fn adjust_amount<A: ArticleApi>(
    api: &A,
    id: ArticleId,
    delta: i64,
    change: AmountChange,
) -> Result<(), ApiError> {
    if delta == 0 {
        debug!(id, "rejecting zero amount change");
        return Err(ApiError::ZeroAmount);
    }
    api.change_amount(id, change, delta).await.map_err(|e| {
        error!(id, delta, ?change, error = %e, "changing amount failed");
        e
    })?;
    info!(id, delta, ?change, "amount changed");
    Ok(())
}

pub async fn create_article<A: ArticleApi>(api: &A, draft: &ArticleDraft) -> Result<(), ApiError> {
    api.create(&draft.to_payload()).await.map_err(|e| {
        error!(error = %e, details = ?e.details(), "creating article failed");
        e
    })?;
    info!(name = %draft.name, "article created");
    Ok(())
}

/// Replace every field of an existing article.
pub async fn update_article<A: ArticleApi>(api: &A, id: ArticleId, draft: &ArticleDraft) -> Result<(), ApiError> {
    api.update(id, &draft.to_payload()).await.map_err(|e| {
        error!(id, error = %e, details = ?e.details(), "updating article failed");
        e
    })?;
    info!(id, "article updated");
    Ok(())
}

/// Articles below their minimum, from the legacy `lowAmount` endpoint.
pub async fn low_stock_articles<A: ArticleApi>(api: &A) -> Result<Vec<Article>, ApiError> {
    api.list_low_amount().await.map_err(|e| {
        error!(error = %e, "fetching low-stock articles failed");
        e
    })
}
