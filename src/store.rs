//! Dashboard State Store
//!
//! Which form is open, which article is selected and the list refresh
//! counter. Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use stock_client::Article;

/// The side panel. One enum, so the create and update forms can never be
/// open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPanel {
    #[default]
    Closed,
    Create,
    Update,
}

impl FormPanel {
    pub fn is_open(&self) -> bool {
        *self != FormPanel::Closed
    }

    /// "Add Article" and the create form's close button both toggle.
    pub fn toggled_create(self) -> Self {
        match self {
            FormPanel::Create => FormPanel::Closed,
            _ => FormPanel::Create,
        }
    }

    /// Clicking the article already shown in the open update form closes it;
    /// any other click opens the form.
    pub fn after_selecting(self, same_article: bool) -> Self {
        if same_article && self == FormPanel::Update {
            FormPanel::Closed
        } else {
            FormPanel::Update
        }
    }
}

/// Shared state of the home page
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Bumped after every create/update; the list refetches when it changes
    pub refresh_trigger: u32,
    pub panel: FormPanel,
    /// Article shown in the update form
    pub selected_article: Option<Article>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Dashboard transitions.
///
/// Every action writes only the fields it changes, never the whole store,
/// so readers of one field are not woken by changes to another.
pub trait DashboardActions: Copy {
    fn toggle_create_form(self);
    fn show_update_form(self, article: Article);
    fn article_created(self);
    fn article_updated(self);
    /// The refresh counter as a memo: dependents rerun only when the
    /// number itself changes.
    fn refresh_counter(self) -> Memo<u32>;
}

impl DashboardActions for DashboardStore {
    fn toggle_create_form(self) {
        self.panel().update(|panel| *panel = panel.toggled_create());
    }

    fn show_update_form(self, article: Article) {
        let same = self
            .selected_article()
            .with_untracked(|selected| selected.as_ref().map(|a| a.id))
            == Some(article.id);
        self.panel().update(|panel| *panel = panel.after_selecting(same));
        self.selected_article().set(Some(article));
    }

    fn article_created(self) {
        self.refresh_trigger().update(|n| *n = n.wrapping_add(1));
        if self.panel().get_untracked() == FormPanel::Create {
            self.panel().set(FormPanel::Closed);
        }
    }

    fn article_updated(self) {
        self.refresh_trigger().update(|n| *n = n.wrapping_add(1));
        if self.panel().get_untracked() == FormPanel::Update {
            self.panel().set(FormPanel::Closed);
        }
        self.selected_article().set(None);
    }

    fn refresh_counter(self) -> Memo<u32> {
        Memo::new(move |_| self.refresh_trigger().get())
    }
}
