// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{notify::{PublicationNotice, PublicationNotifier}, time::Clock},
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService,
        },
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) notifier: Arc<dyn PublicationNotifier>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) public_base_url: String,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        notifier: Arc<dyn PublicationNotifier>,
        clock: Arc<dyn Clock>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_service,
            notifier,
            clock,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Tell the author their article went live. Runs after the new state is
    /// committed; any failure here is logged and swallowed so it can never
    /// undo or fail the transition that triggered it.
    pub(super) async fn dispatch_publication_notice(&self, article: &Article) {
        let author = match self.user_repo.find_by_id(article.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::warn!(
                    article_id = i64::from(article.id),
                    author_id = i64::from(article.author_id),
                    "author missing, skipping publication notice"
                );
                return;
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    article_id = i64::from(article.id),
                    "author lookup failed, skipping publication notice"
                );
                return;
            }
        };

        self.notifier.notify_published(PublicationNotice {
            recipient: author.email.to_string(),
            author_name: author.display_name_or_username().to_string(),
            title: article.title.to_string(),
            link: format!("{}/article/{}/", self.public_base_url, article.slug),
        });
    }
}
