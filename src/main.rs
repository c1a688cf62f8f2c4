use anyhow::Result;
use newsroom_core::application::{
    ports::{
        auth::PrincipalResolver, notify::PublicationNotifier, time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    user::UserRepository,
};
use newsroom_core::infrastructure::{
    database,
    notify::{EmailConfig, EmailDelivery, QueuedPublicationNotifier},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCategoryRepository,
        PostgresUserRepository,
    },
    security::PostgresPrincipalResolver,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let principal_resolver: Arc<dyn PrincipalResolver> =
        Arc::new(PostgresPrincipalResolver::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let delivery = EmailConfig::from_env().map(EmailDelivery::new);
    if delivery.is_none() {
        tracing::info!("SMTP_HOST not set, publication notices will only be logged");
    }
    let notifier: Arc<dyn PublicationNotifier> = Arc::new(QueuedPublicationNotifier::spawn(
        config.notify_queue_depth(),
        delivery,
    ));

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        category_repo,
        user_repo,
        principal_resolver,
        notifier,
        clock,
        slugger,
        config.public_base_url(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
