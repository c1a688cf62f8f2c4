use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleListCursor, ArticleSlug};
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the update only when the row still carries
    /// `update.original_updated_at`; a lost race surfaces as `Conflict`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest-first keyset page; `include_pending` widens the listing to
    /// unreviewed submissions.
    async fn list_page(
        &self,
        include_pending: bool,
        category: Option<CategoryId>,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)>;
    /// The review queue, oldest submission first.
    async fn list_pending(&self) -> DomainResult<Vec<Article>>;
}
