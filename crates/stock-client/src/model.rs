//! Inventory Models
//!
//! Data structures matching the backend's article resources.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend ids are numeric (a database sequence); string ids fail to decode.
pub type ArticleId = u64;

/// Unit of measure for an article's amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Pieces,
    Milliliters,
    Grams,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Pieces, Unit::Milliliters, Unit::Grams];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Pieces => "PIECES",
            Unit::Milliliters => "MILLILITERS",
            Unit::Grams => "GRAMS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Pieces => "Pieces",
            Unit::Milliliters => "Milliliters",
            Unit::Grams => "Grams",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == s)
    }
}

/// Article category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Medication,
    Equipment,
    Consumable,
    Cleaning,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Medication,
        Category::Equipment,
        Category::Consumable,
        Category::Cleaning,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medication => "MEDICATION",
            Category::Equipment => "EQUIPMENT",
            Category::Consumable => "CONSUMABLE",
            Category::Cleaning => "CLEANING",
            Category::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Medication => "Medication",
            Category::Equipment => "Equipment",
            Category::Consumable => "Consumable",
            Category::Cleaning => "Cleaning",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == s)
    }
}

/// Point in time reported by the backend.
///
/// Accepts RFC 3339 strings (normalized to UTC) as well as zone-less
/// local date-times such as `2024-05-01T10:00:00.123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl Timestamp {
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(with_zone) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(with_zone.naive_utc()));
        }
        NaiveDateTime::parse_from_str(s, LOCAL_FORMAT).ok().map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(LOCAL_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// Article data structure (matches backend)
///
/// `low_stock` is computed by the backend and trusted as delivered;
/// the client never compares `amount` and `minimum_amount` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub amount: i64,
    pub minimum_amount: i64,
    pub unit: Unit,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub low_stock: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// One slice of the article collection plus pagination metadata
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub content: Vec<Article>,
    pub total_items: u64,
    pub total_pages: u32,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Index of the last existing page (0 when there are no pages)
    pub fn last_page_index(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageEnvelope {
    content: Vec<Article>,
    #[serde(default)]
    total_items: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

/// List responses come either enveloped or, from older backends, as a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse {
    Envelope(PageEnvelope),
    Bare(Vec<Article>),
}

impl From<ListResponse> for Page {
    fn from(response: ListResponse) -> Self {
        match response {
            ListResponse::Envelope(envelope) => {
                let total_items = envelope
                    .total_items
                    .unwrap_or(envelope.content.len() as u64);
                let total_pages = envelope
                    .total_pages
                    .unwrap_or(if envelope.content.is_empty() { 0 } else { 1 });
                Page { content: envelope.content, total_items, total_pages }
            }
            ListResponse::Bare(content) => Page {
                total_items: content.len() as u64,
                total_pages: if content.is_empty() { 0 } else { 1 },
                content,
            },
        }
    }
}

impl From<ListResponse> for Vec<Article> {
    fn from(response: ListResponse) -> Self {
        match response {
            ListResponse::Envelope(envelope) => envelope.content,
            ListResponse::Bare(content) => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAUZE: &str = r#"{
        "id": 7,
        "name": "Gauze",
        "amount": 50,
        "minimumAmount": 10,
        "unit": "PIECES",
        "category": "CONSUMABLE",
        "lowStock": false,
        "createdAt": "2024-05-01T10:00:00",
        "updatedAt": "2024-05-02T08:30:15.250Z"
    }"#;

    #[test]
    fn test_string_id_is_rejected() {
        let json = r#"{"id":"a-17","name":"Gauze","amount":1,"minimumAmount":0,"unit":"PIECES"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn test_decode_article() {
        let article: Article = serde_json::from_str(GAUZE).unwrap();
        assert_eq!(article.id, 7);
        assert_eq!(article.minimum_amount, 10);
        assert_eq!(article.unit, Unit::Pieces);
        assert_eq!(article.category, Some(Category::Consumable));
        assert!(!article.low_stock);
        assert_eq!(article.created_at.unwrap().to_string(), "2024-05-01 10:00");
        assert_eq!(article.updated_at.unwrap().to_string(), "2024-05-02 08:30");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":1,"name":"Saline","amount":3,"minimumAmount":5,"unit":"MILLILITERS"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.category, None);
        assert!(!article.low_stock);
        assert!(article.created_at.is_none());
    }

    #[test]
    fn test_page_from_envelope() {
        let json = format!(r#"{{"content":[{GAUZE}],"totalItems":21,"totalPages":3}}"#);
        let response: ListResponse = serde_json::from_str(&json).unwrap();
        let page = Page::from(response);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_items, 21);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.last_page_index(), 2);
    }

    #[test]
    fn test_page_from_bare_array() {
        let json = format!("[{GAUZE}]");
        let page = Page::from(serde_json::from_str::<ListResponse>(&json).unwrap());
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);

        let empty = Page::from(serde_json::from_str::<ListResponse>("[]").unwrap());
        assert!(empty.is_empty());
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.last_page_index(), 0);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(Unit::parse("GRAMS"), Some(Unit::Grams));
        assert_eq!(Unit::parse("grams"), None);
        assert_eq!(Category::parse("CLEANING"), Some(Category::Cleaning));
        assert_eq!(serde_json::to_string(&Category::Medication).unwrap(), r#""MEDICATION""#);
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        assert!(Timestamp::parse("yesterday").is_none());
        assert!(serde_json::from_str::<Timestamp>(r#""2024-13-01T00:00:00""#).is_err());
    }
}
