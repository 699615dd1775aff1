//! List Query Parameters
//!
//! The independent axes of the article list: page, search text,
//! category, low-stock filter and sort order.

use crate::model::Category;

/// Columns the backend can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Name,
    Amount,
    MinimumAmount,
    Unit,
    Category,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Amount => "amount",
            SortField::MinimumAmount => "minimumAmount",
            SortField::Unit => "unit",
            SortField::Category => "category",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    /// Clicking the sorted column flips direction, any other column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Direction if the list is currently sorted by `field`
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

/// Query parameters of `GET /articles`
///
/// Each setter touches exactly one axis; the others keep their current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleQuery {
    /// 0-based page index
    pub page: u32,
    pub search: String,
    pub category: Option<Category>,
    pub low_stock_only: bool,
    pub sort: Sort,
}

impl ArticleQuery {
    pub fn change_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn change_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn change_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn toggle_low_stock_only(&mut self) {
        self.low_stock_only = !self.low_stock_only;
    }

    pub fn change_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("onlyLowStockArticles", self.low_stock_only.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let Some(category) = self.category {
            params.push(("categoryFilter", category.as_str().to_string()));
        }
        params.push(("sortBy", self.sort.field.as_str().to_string()));
        params.push(("sortDir", self.sort.direction.as_str().to_string()));
        params
    }
}
