// tests/article_query_unit.rs
//! Visibility and listing rules for article queries.

mod support;

use std::sync::Arc;

use newsroom_core::application::error::ApplicationError;
use newsroom_core::application::queries::articles::{
    ArticleQueryService, GetArticleBySlugQuery, ListArticlesQuery,
};
use newsroom_core::domain::article::ArticleReadRepository;
use newsroom_core::domain::user::Role;

use support::{ArticleBuilder, InMemoryArticleReadRepo, InMemoryStore, actor};

fn seeded_queries() -> (Arc<InMemoryStore>, ArticleQueryService) {
    let store = InMemoryStore::new();
    {
        let mut articles = store.articles.lock().unwrap();
        articles.insert(
            1,
            ArticleBuilder::new()
                .id(1)
                .title("Public Piece")
                .slug("public-piece")
                .author_id(3)
                .published()
                .build(),
        );
        articles.insert(
            2,
            ArticleBuilder::new()
                .id(2)
                .title("Secret Draft")
                .slug("secret-draft")
                .author_id(3)
                .build(),
        );
    }
    let read: Arc<dyn ArticleReadRepository> =
        Arc::new(InMemoryArticleReadRepo(Arc::clone(&store)));
    (store, ArticleQueryService::new(read))
}

fn list_query(include_pending: bool) -> ListArticlesQuery {
    ListArticlesQuery {
        include_pending,
        category_id: None,
        limit: 0,
        cursor: None,
    }
}

#[tokio::test]
async fn published_articles_are_public() {
    let (_store, queries) = seeded_queries();
    let dto = queries
        .get_article_by_slug(
            None,
            GetArticleBySlugQuery {
                slug: "public-piece".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(dto.slug, "public-piece");
}

#[tokio::test]
async fn pending_articles_read_as_missing_to_guests_and_strangers() {
    let (_store, queries) = seeded_queries();

    let err = queries
        .get_article_by_slug(
            None,
            GetArticleBySlugQuery {
                slug: "secret-draft".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let stranger = actor(4, "rob", &[Role::Reporter]);
    let err = queries
        .get_article_by_slug(
            Some(&stranger),
            GetArticleBySlugQuery {
                slug: "secret-draft".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn pending_articles_are_visible_to_author_and_editorial() {
    let (_store, queries) = seeded_queries();

    for viewer in [
        actor(3, "rita", &[Role::Reporter]),
        actor(2, "edgar", &[Role::Editor]),
        actor(1, "alice", &[Role::Admin]),
    ] {
        let dto = queries
            .get_article_by_slug(
                Some(&viewer),
                GetArticleBySlugQuery {
                    slug: "secret-draft".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(dto.status, "pending");
    }
}

#[tokio::test]
async fn public_listing_excludes_pending_articles() {
    let (_store, queries) = seeded_queries();
    let page = queries.list_articles(None, list_query(false)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "public-piece");
    assert!(!page.has_more);
}

#[tokio::test]
async fn pending_listing_requires_an_editorial_role() {
    let (_store, queries) = seeded_queries();

    let err = queries
        .list_articles(None, list_query(true))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let reporter = actor(3, "rita", &[Role::Reporter]);
    let err = queries
        .list_articles(Some(&reporter), list_query(true))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let editor = actor(2, "edgar", &[Role::Editor]);
    let page = queries
        .list_articles(Some(&editor), list_query(true))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn listing_filters_by_category() {
    let store = InMemoryStore::new();
    {
        let mut articles = store.articles.lock().unwrap();
        articles.insert(
            1,
            ArticleBuilder::new()
                .id(1)
                .slug("politics-piece")
                .category_id(10)
                .published()
                .build(),
        );
        articles.insert(
            2,
            ArticleBuilder::new()
                .id(2)
                .slug("sports-piece")
                .category_id(11)
                .published()
                .build(),
        );
    }
    let read: Arc<dyn ArticleReadRepository> =
        Arc::new(InMemoryArticleReadRepo(Arc::clone(&store)));
    let queries = ArticleQueryService::new(read);

    let mut query = list_query(false);
    query.category_id = Some(10);
    let page = queries.list_articles(None, query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].slug, "politics-piece");
}

#[tokio::test]
async fn review_queue_is_editorial_only_and_oldest_first() {
    let store = InMemoryStore::new();
    {
        let mut articles = store.articles.lock().unwrap();
        let older = ArticleBuilder::new().id(1).slug("first-in").build();
        let mut newer = ArticleBuilder::new().id(2).slug("second-in").build();
        newer.created_at = older.created_at + chrono::Duration::seconds(30);
        articles.insert(1, older);
        articles.insert(2, newer);
        articles.insert(
            3,
            ArticleBuilder::new().id(3).slug("already-live").published().build(),
        );
    }
    let read: Arc<dyn ArticleReadRepository> =
        Arc::new(InMemoryArticleReadRepo(Arc::clone(&store)));
    let queries = ArticleQueryService::new(read);

    let reporter = actor(3, "rita", &[Role::Reporter]);
    let err = queries.review_queue(&reporter).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let editor = actor(2, "edgar", &[Role::Editor]);
    let queue = queries.review_queue(&editor).await.unwrap();
    let slugs: Vec<_> = queue.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, ["first-in", "second-in"]);
}

#[tokio::test]
async fn malformed_cursors_are_rejected_as_validation_errors() {
    let (_store, queries) = seeded_queries();
    let mut query = list_query(false);
    query.cursor = Some("???definitely-not-a-cursor".into());
    let err = queries.list_articles(None, query).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}
