//! Request Bodies
//!
//! Form state and the JSON bodies built from it.

use serde::Serialize;

use crate::model::{Article, Category, Unit};

/// Raw values of the create/update form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDraft {
    pub name: String,
    pub amount: String,
    pub minimum_amount: String,
    pub unit: String,
    pub category: String,
}

impl ArticleDraft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            name: article.name.clone(),
            amount: article.amount.to_string(),
            minimum_amount: article.minimum_amount.to_string(),
            unit: article.unit.as_str().to_string(),
            category: article
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Build the request body. Nothing is validated here: values that do
    /// not parse are sent as `null` and the backend reports the problem.
    pub fn to_payload(&self) -> ArticlePayload {
        ArticlePayload {
            name: self.name.clone(),
            amount: parse_quantity(&self.amount),
            minimum_amount: parse_quantity(&self.minimum_amount),
            unit: Unit::parse(&self.unit),
            category: Category::parse(&self.category),
        }
    }
}

fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Body of `POST /articles` and `PUT /articles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub name: String,
    pub amount: Option<i64>,
    pub minimum_amount: Option<i64>,
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Direction of an inline amount change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountChange {
    Add,
    Subtract,
}

impl AmountChange {
    pub fn path_segment(&self) -> &'static str {
        match self {
            AmountChange::Add => "add",
            AmountChange::Subtract => "subtract",
        }
    }
}

/// Body of `PATCH /articles/{id}/changeAmount/{add|subtract}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmountPayload {
    pub amount: i64,
}
