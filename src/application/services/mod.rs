// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, categories::CategoryCommandService},
        ports::{
            auth::PrincipalResolver, notify::PublicationNotifier, time::Clock, util::SlugGenerator,
        },
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::CategoryRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    principal_resolver: Arc<dyn PrincipalResolver>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        principal_resolver: Arc<dyn PrincipalResolver>,
        notifier: Arc<dyn PublicationNotifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            slug_service,
            Arc::clone(&notifier),
            Arc::clone(&clock),
            public_base_url,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            principal_resolver,
        }
    }

    pub fn principal_resolver(&self) -> Arc<dyn PrincipalResolver> {
        Arc::clone(&self.principal_resolver)
    }
}
