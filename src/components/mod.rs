//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod toast;
mod product_card;
mod product_grid;
mod product_detail;
mod category_bar;
mod header;
mod password_update_form;
mod question_board;
mod question_detail;
mod company_page;
mod document_downloads;

pub use delete_confirm_button::DeleteConfirmButton;
pub use toast::Toast;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use product_detail::ProductDetail;
pub use category_bar::CategoryBar;
pub use header::Header;
pub use password_update_form::PasswordUpdateForm;
pub use question_board::QuestionBoard;
pub use question_detail::QuestionDetailView;
pub use company_page::CompanyPage;
pub use document_downloads::DocumentDownloads;
