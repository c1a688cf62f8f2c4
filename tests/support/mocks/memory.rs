// tests/support/mocks/memory.rs
//! In-memory stand-ins for the Postgres repositories, close enough to the
//! real ones to exercise slug uniqueness, the optimistic update guard, and
//! category nulling.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use newsroom_core::domain::article::{
    Article, ArticleId, ArticleListCursor, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use newsroom_core::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
};
use newsroom_core::domain::errors::{DomainError, DomainResult};
use newsroom_core::domain::user::{User, UserId, UserRepository};

#[derive(Default)]
pub struct InMemoryStore {
    pub articles: Mutex<HashMap<i64, Article>>,
    pub categories: Mutex<HashMap<i64, Category>>,
    next_article_id: AtomicI64,
    next_category_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            articles: Mutex::new(HashMap::new()),
            categories: Mutex::new(HashMap::new()),
            next_article_id: AtomicI64::new(1),
            next_category_id: AtomicI64::new(1),
        })
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().get(&id).cloned()
    }

    pub fn article_by_slug(&self, slug: &str) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .values()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn seed_category(&self, name: &str) -> Category {
        let id = self.next_category_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            description: None,
        };
        self.categories
            .lock()
            .unwrap()
            .insert(id, category.clone());
        category
    }
}

pub struct InMemoryArticleWriteRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.0.articles.lock().unwrap();
        if articles
            .values()
            .any(|existing| existing.slug == article.slug)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = self.0.next_article_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            body: article.body,
            image_ref: article.image_ref,
            status: article.status,
            author_id: article.author_id,
            category_id: article.category_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.0.articles.lock().unwrap();
        let stored = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if stored.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            stored.title = title;
        }
        if let Some(body) = update.body {
            stored.body = body;
        }
        if let Some(image_ref) = update.image_ref {
            stored.image_ref = image_ref;
        }
        if let Some(category_id) = update.category_id {
            stored.category_id = category_id;
        }
        if let Some(status) = update.status {
            stored.status = status;
        }
        stored.updated_at = update.updated_at;

        Ok(stored.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.0.articles.lock().unwrap();
        articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

pub struct InMemoryArticleReadRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl ArticleReadRepository for InMemoryArticleReadRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.0.article(i64::from(id)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.0.article_by_slug(slug.as_str()))
    }

    async fn list_page(
        &self,
        include_pending: bool,
        category: Option<CategoryId>,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let mut matching: Vec<Article> = self
            .0
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| include_pending || a.status == ArticleStatus::Published)
            .filter(|a| category.is_none() || a.category_id == category)
            .filter(|a| match &cursor {
                Some(cursor) => {
                    (a.created_at, i64::from(a.id))
                        < (cursor.created_at, i64::from(cursor.article_id))
                }
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let limit = limit.clamp(1, 100) as usize;
        let has_more = matching.len() > limit;
        matching.truncate(limit);
        let next_cursor = if has_more {
            matching
                .last()
                .map(|last| ArticleListCursor::from_parts(last.created_at, last.id))
        } else {
            None
        };

        Ok((matching, next_cursor))
    }

    async fn list_pending(&self) -> DomainResult<Vec<Article>> {
        let mut pending: Vec<Article> = self
            .0
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.status == ArticleStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(pending)
    }
}

pub struct InMemoryCategoryRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.0.categories.lock().unwrap();
        if categories
            .values()
            .any(|existing| existing.name == category.name)
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }

        let id = self.0.next_category_id.fetch_add(1, Ordering::SeqCst);
        let stored = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            description: category.description,
        };
        categories.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut categories = self.0.categories.lock().unwrap();
        let stored = categories
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        if let Some(name) = update.name {
            stored.name = name;
        }
        if let Some(description) = update.description {
            stored.description = description;
        }

        Ok(stored.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut categories = self.0.categories.lock().unwrap();
        categories
            .remove(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        drop(categories);

        // Mirror ON DELETE SET NULL on articles.category_id.
        let mut articles = self.0.articles.lock().unwrap();
        for article in articles.values_mut() {
            if article.category_id == Some(id) {
                article.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.0.categories.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        Ok(self
            .0
            .categories
            .lock()
            .unwrap()
            .values()
            .find(|c| c.name == *name)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.0.categories.lock().unwrap().values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|u| (i64::from(u.id), u))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }
}
