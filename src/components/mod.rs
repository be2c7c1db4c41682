//! UI Components
//!
//! The navigation bar and one component per screen.

mod nav_bar;
mod home_page;
mod article_card;
mod search_page;
mod create_page;
mod article_detail_page;
mod feedback_page;

pub use nav_bar::NavBar;
pub use home_page::HomePage;
pub use article_card::ArticleCard;
pub use search_page::SearchPage;
pub use create_page::CreatePage;
pub use article_detail_page::ArticleDetailPage;
pub use feedback_page::FeedbackPage;
