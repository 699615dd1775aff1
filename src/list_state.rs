//! Article List State
//!
//! Everything the list view shows, kept outside the component so the rules
//! can be tested without a browser:
//! - a fetch result is applied only if no newer fetch was started
//! - a failed fetch keeps the previous page on screen
//! - changing any query axis closes the amount editor
//! - an empty page past the end is clamped back to the last existing page

use stock_client::{
    ApiError, Article, ArticleQuery, Category, FetchSequencer, FetchTicket, Page, SortField,
};

use crate::components::amount_editor::{AmountEditorState, PopupAnchor};

/// What happened to a finished fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// Prior page kept; the error is for the caller to report.
    Failed(ApiError),
    /// A newer fetch is in flight; nothing changed.
    Superseded,
    /// The requested page no longer exists. The query now points at the
    /// last existing page and must be fetched again.
    Clamped { from: u32, to: u32 },
}

#[derive(Debug, Default)]
pub struct ArticleListState {
    pub query: ArticleQuery,
    pub page: Page,
    pub loading: bool,
    pub editor: Option<AmountEditorState>,
    sequencer: FetchSequencer,
}

impl ArticleListState {
    /// Start a fetch of the current query.
    pub fn begin_fetch(&mut self) -> (FetchTicket, ArticleQuery) {
        self.loading = true;
        (self.sequencer.issue(), self.query.clone())
    }

    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Page, ApiError>) -> FetchOutcome {
        if !self.sequencer.is_latest(ticket) {
            return FetchOutcome::Superseded;
        }
        match result {
            Ok(page) if page.is_empty() && self.query.page > 0 && self.query.page >= page.total_pages => {
                let from = self.query.page;
                let to = page.last_page_index();
                self.query.change_page(to);
                self.editor = None;
                FetchOutcome::Clamped { from, to }
            }
            Ok(page) => {
                self.page = page;
                self.loading = false;
                FetchOutcome::Applied
            }
            Err(e) => {
                self.loading = false;
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Apply the refetch that follows a delete; the query may have moved back a page.
    pub fn apply_resync(
        &mut self,
        ticket: FetchTicket,
        result: Result<(ArticleQuery, Page), ApiError>,
    ) -> FetchOutcome {
        if !self.sequencer.is_latest(ticket) {
            return FetchOutcome::Superseded;
        }
        self.loading = false;
        match result {
            Ok((query, page)) => {
                if query.page != self.query.page {
                    self.editor = None;
                }
                self.query = query;
                self.page = page;
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    pub fn rows_on_page(&self) -> usize {
        self.page.content.len()
    }

    pub fn change_sort(&mut self, field: SortField) {
        self.editor = None;
        self.query.change_sort(field);
    }

    pub fn change_page(&mut self, index: u32) {
        self.editor = None;
        self.query.change_page(index);
    }

    pub fn change_category(&mut self, category: Option<Category>) {
        self.editor = None;
        self.query.change_category(category);
    }

    pub fn toggle_low_stock_only(&mut self) {
        self.editor = None;
        self.query.toggle_low_stock_only();
    }

    pub fn change_search(&mut self, text: String) {
        self.editor = None;
        self.query.change_search(text);
    }

    pub fn open_editor(&mut self, article: Article, anchor: PopupAnchor) {
        self.editor = Some(AmountEditorState { article, anchor });
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_client::{ErrorBody, SortDirection, Unit};

    fn article(id: u64) -> Article {
        Article {
            id,
            name: format!("Article {id}"),
            amount: 10,
            minimum_amount: 2,
            unit: Unit::Pieces,
            category: None,
            low_stock: false,
            created_at: None,
            updated_at: None,
        }
    }

    fn page_of(ids: &[u64], total_pages: u32) -> Page {
        Page {
            content: ids.iter().copied().map(article).collect(),
            total_items: ids.len() as u64,
            total_pages,
        }
    }

    fn with_editor() -> ArticleListState {
        let mut state = ArticleListState::default();
        state.open_editor(article(1), PopupAnchor::default());
        state
    }

    #[test]
    fn test_successful_fetch_replaces_page() {
        let mut state = ArticleListState::default();
        let (ticket, query) = state.begin_fetch();
        assert!(state.loading);
        assert_eq!(query, ArticleQuery::default());

        assert_eq!(state.apply_fetch(ticket, Ok(page_of(&[1, 2], 1))), FetchOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.rows_on_page(), 2);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_page() {
        let mut state = ArticleListState::default();
        let (ticket, _) = state.begin_fetch();
        state.apply_fetch(ticket, Ok(page_of(&[1, 2, 3], 1)));

        let (ticket, _) = state.begin_fetch();
        let error = ApiError::Status { status: 500, body: ErrorBody::default() };
        assert_eq!(state.apply_fetch(ticket, Err(error.clone())), FetchOutcome::Failed(error));
        assert!(!state.loading);
        assert_eq!(state.page, page_of(&[1, 2, 3], 1));
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut state = ArticleListState::default();
        let (first, _) = state.begin_fetch();
        state.change_sort(SortField::Amount);
        let (second, query) = state.begin_fetch();
        assert_eq!(query.sort.field, SortField::Amount);

        assert_eq!(state.apply_fetch(first, Ok(page_of(&[9], 1))), FetchOutcome::Superseded);
        assert!(state.loading);
        assert!(state.page.is_empty());

        assert_eq!(state.apply_fetch(second, Ok(page_of(&[1], 1))), FetchOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.page.content[0].id, 1);
    }

    #[test]
    fn test_superseded_failure_is_silent() {
        let mut state = ArticleListState::default();
        let (first, _) = state.begin_fetch();
        let (_second, _) = state.begin_fetch();
        let outcome = state.apply_fetch(first, Err(ApiError::Transport("offline".into())));
        assert_eq!(outcome, FetchOutcome::Superseded);
        assert!(state.loading);
    }

    #[test]
    fn test_query_changes_close_editor() {
        let mut state = with_editor();
        state.change_page(2);
        assert!(state.editor.is_none());

        let mut state = with_editor();
        state.change_sort(SortField::Name);
        assert!(state.editor.is_none());
        assert_eq!(state.query.sort.direction, SortDirection::Desc);

        let mut state = with_editor();
        state.change_category(Some(Category::Medication));
        assert!(state.editor.is_none());

        let mut state = with_editor();
        state.toggle_low_stock_only();
        assert!(state.editor.is_none());
        assert!(state.query.low_stock_only);

        let mut state = with_editor();
        state.change_search("gauze".to_string());
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_filter_change_keeps_other_axes() {
        let mut state = ArticleListState::default();
        state.change_page(3);
        state.change_sort(SortField::Amount);
        state.toggle_low_stock_only();
        assert_eq!(state.query.page, 3);
        assert_eq!(state.query.sort.field, SortField::Amount);
    }

    #[test]
    fn test_empty_page_past_the_end_is_clamped() {
        let mut state = ArticleListState::default();
        state.change_page(3);
        state.toggle_low_stock_only();
        let (ticket, _) = state.begin_fetch();

        let outcome = state.apply_fetch(ticket, Ok(page_of(&[], 1)));
        assert_eq!(outcome, FetchOutcome::Clamped { from: 3, to: 0 });
        assert_eq!(state.query.page, 0);
        assert!(state.loading);

        let (ticket, query) = state.begin_fetch();
        assert_eq!(query.page, 0);
        assert!(query.low_stock_only);
        assert_eq!(state.apply_fetch(ticket, Ok(page_of(&[4], 1))), FetchOutcome::Applied);
        assert_eq!(state.rows_on_page(), 1);
    }

    #[test]
    fn test_empty_first_page_is_not_clamped() {
        let mut state = ArticleListState::default();
        let (ticket, _) = state.begin_fetch();
        assert_eq!(state.apply_fetch(ticket, Ok(page_of(&[], 0))), FetchOutcome::Applied);
        assert!(!state.loading);
    }

    #[test]
    fn test_resync_moves_back_and_closes_editor() {
        let mut state = with_editor();
        state.query.change_page(2);
        let (ticket, query) = state.begin_fetch();

        let mut moved = query.clone();
        moved.change_page(1);
        assert_eq!(state.apply_resync(ticket, Ok((moved, page_of(&[5], 2)))), FetchOutcome::Applied);
        assert_eq!(state.query.page, 1);
        assert!(state.editor.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_resync_is_dropped_when_user_moved_on() {
        let mut state = ArticleListState::default();
        state.query.change_page(2);
        let (resync, query) = state.begin_fetch();
        let (_newer, _) = state.begin_fetch();

        let mut moved = query;
        moved.change_page(1);
        assert_eq!(state.apply_resync(resync, Ok((moved, page_of(&[5], 2)))), FetchOutcome::Superseded);
        assert_eq!(state.query.page, 2);
    }
}
