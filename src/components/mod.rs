//! UI Components
//!
//! Leptos components of the inventory dashboard.

mod home_page;
mod article_list;
mod article_row;
pub mod amount_editor;
mod article_fields;
mod create_article_form;
mod update_article_form;
mod filter_bar;
mod sort_header;
mod pagination;
mod low_stock_banner;
mod delete_confirm_button;
mod toaster;

pub use home_page::HomePage;
pub use article_list::ArticleListView;
pub use article_row::ArticleRow;
pub use create_article_form::CreateArticleForm;
pub use update_article_form::UpdateArticleForm;
pub use filter_bar::FilterBar;
pub use sort_header::SortHeader;
pub use pagination::Pagination;
pub use low_stock_banner::LowStockBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use toaster::Toaster;
