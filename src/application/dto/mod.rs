pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;
pub mod serde_time;

pub use articles::ArticleDto;
pub use auth::AuthenticatedUser;
pub use categories::CategoryDto;
pub use pagination::CursorPage;
