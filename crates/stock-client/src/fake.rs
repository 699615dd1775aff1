//! In-memory backend used by the tests.
//!
//! Mirrors the server's behaviour closely enough to exercise the list
//! operations: filtering, sorting, pagination and a server-side low-stock flag.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

use async_trait::async_trait;

use crate::api::ArticleApi;
use crate::error::{ApiError, ErrorBody};
use crate::model::{Article, ArticleId, Page, Unit};
use crate::payload::{AmountChange, ArticlePayload};
use crate::query::{ArticleQuery, SortDirection, SortField};

/// A request received by the fake, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ArticleQuery),
    LowAmount,
    Delete(ArticleId),
    ChangeAmount(ArticleId, AmountChange, i64),
    Create(ArticlePayload),
    Update(ArticleId, ArticlePayload),
}

pub struct FakeBackend {
    articles: RefCell<Vec<Article>>,
    next_id: Cell<ArticleId>,
    page_size: usize,
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<ApiError>>,
}

impl FakeBackend {
    pub fn new(page_size: usize) -> Self {
        Self {
            articles: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            page_size,
            calls: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
        }
    }

    /// Seed an article directly, bypassing the request log.
    pub fn seed(&self, name: &str, amount: i64, minimum_amount: i64) -> ArticleId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.articles.borrow_mut().push(Article {
            id,
            name: name.to_string(),
            amount,
            minimum_amount,
            unit: Unit::Pieces,
            category: None,
            low_stock: amount < minimum_amount,
            created_at: None,
            updated_at: None,
        });
        id
    }

    pub fn get(&self, id: ArticleId) -> Option<Article> {
        self.articles.borrow().iter().find(|a| a.id == id).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Make the next request fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found(id: ArticleId) -> ApiError {
        ApiError::Status {
            status: 404,
            body: ErrorBody { message: Some(format!("Article {id} not found")), details: Vec::new() },
        }
    }

    fn validate(payload: &ArticlePayload) -> Result<(String, i64, i64, Unit), ApiError> {
        let mut details = Vec::new();
        if payload.name.trim().is_empty() {
            details.push("name must not be blank".to_string());
        }
        if payload.amount.is_none() {
            details.push("amount is required".to_string());
        }
        if payload.minimum_amount.is_none() {
            details.push("minimumAmount is required".to_string());
        }
        if payload.unit.is_none() {
            details.push("unit is required".to_string());
        }
        match (payload.amount, payload.minimum_amount, payload.unit) {
            (Some(amount), Some(minimum), Some(unit)) if details.is_empty() => {
                Ok((payload.name.clone(), amount, minimum, unit))
            }
            _ => Err(ApiError::Status { status: 400, body: ErrorBody { message: None, details } }),
        }
    }
}

fn compare(a: &Article, b: &Article, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::MinimumAmount => a.minimum_amount.cmp(&b.minimum_amount),
        SortField::Unit => a.unit.as_str().cmp(b.unit.as_str()),
        SortField::Category => a.category.map(|c| c.as_str()).cmp(&b.category.map(|c| c.as_str())),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

#[async_trait(?Send)]
impl ArticleApi for FakeBackend {
    async fn list(&self, query: &ArticleQuery) -> Result<Page, ApiError> {
        self.record(Call::List(query.clone()))?;
        let needle = query.search.trim().to_lowercase();
        let mut matching: Vec<Article> = self
            .articles
            .borrow()
            .iter()
            .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
            .filter(|a| query.category.is_none() || a.category == query.category)
            .filter(|a| !query.low_stock_only || a.low_stock)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort.field).then(a.id.cmp(&b.id));
            match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total_items = matching.len();
        let total_pages = total_items.div_ceil(self.page_size) as u32;
        let content = matching
            .into_iter()
            .skip(query.page as usize * self.page_size)
            .take(self.page_size)
            .collect();
        Ok(Page { content, total_items: total_items as u64, total_pages })
    }

    async fn list_low_amount(&self) -> Result<Vec<Article>, ApiError> {
        self.record(Call::LowAmount)?;
        Ok(self.articles.borrow().iter().filter(|a| a.low_stock).cloned().collect())
    }

    async fn delete(&self, id: ArticleId) -> Result<(), ApiError> {
        self.record(Call::Delete(id))?;
        let mut articles = self.articles.borrow_mut();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn change_amount(&self, id: ArticleId, change: AmountChange, amount: i64) -> Result<(), ApiError> {
        self.record(Call::ChangeAmount(id, change, amount))?;
        let mut articles = self.articles.borrow_mut();
        let article = articles.iter_mut().find(|a| a.id == id).ok_or_else(|| Self::not_found(id))?;
        let updated = match change {
            AmountChange::Add => article.amount + amount,
            AmountChange::Subtract => article.amount - amount,
        };
        if updated < 0 {
            return Err(ApiError::Status {
                status: 400,
                body: ErrorBody { message: Some("Not enough stock".to_string()), details: Vec::new() },
            });
        }
        article.amount = updated;
        article.low_stock = article.amount < article.minimum_amount;
        Ok(())
    }

    async fn create(&self, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.record(Call::Create(payload.clone()))?;
        let (name, amount, minimum_amount, unit) = Self::validate(payload)?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.articles.borrow_mut().push(Article {
            id,
            name,
            amount,
            minimum_amount,
            unit,
            category: payload.category,
            low_stock: amount < minimum_amount,
            created_at: None,
            updated_at: None,
        });
        Ok(())
    }

    async fn update(&self, id: ArticleId, payload: &ArticlePayload) -> Result<(), ApiError> {
        self.record(Call::Update(id, payload.clone()))?;
        let (name, amount, minimum_amount, unit) = Self::validate(payload)?;
        let mut articles = self.articles.borrow_mut();
        let article = articles.iter_mut().find(|a| a.id == id).ok_or_else(|| Self::not_found(id))?;
        article.name = name;
        article.amount = amount;
        article.minimum_amount = minimum_amount;
        article.unit = unit;
        article.category = payload.category;
        article.low_stock = amount < minimum_amount;
        Ok(())
    }
}
