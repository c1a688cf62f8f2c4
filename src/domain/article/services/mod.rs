// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Longest slug derived from a title. Collision suffixes may extend past
/// this, the base never does.
const SLUG_MAX_LEN: usize = 50;

/// Domain service deriving the one slug an article will carry for life.
/// Titles may repeat; slugs may not, so collisions get a numeric suffix.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn derive_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let mut base = self.generator.slugify(title.as_str());
        base.truncate(SLUG_MAX_LEN);
        let base = base.trim_end_matches('-').to_string();
        let base_slug = if base.is_empty() {
            format!("article-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate)?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
