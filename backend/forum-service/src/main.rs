use actix_web::{App, HttpServer};
use std::io;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Forum Service
///
/// Serves the feed page, accepts post submissions and handles sign-up and
/// login, backed by a single SQLite file.
///
/// # Routes
///
/// - `/` - feed page, `?page=N` for older posts
/// - `/post`, `/api/post` - submit a message
/// - `/api/signUp`, `/api/login` - account forms
/// - `/static/*` - static assets
/// - `/health`, `/metrics` - operations
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match forum_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting forum-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let state = match forum_service::build_state(&config).await {
        Ok(state) => actix_web::web::Data::new(state),
        Err(e) => {
            tracing::error!("Startup failed: {:#}", e);
            eprintln!("ERROR: Failed to initialize forum-service: {:#}", e);
            std::process::exit(1);
        }
    };

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!(
        page_counter = state.counter.current(),
        "Starting HTTP server at {}",
        bind_address
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| forum_service::handlers::configure(cfg, state))
    })
    .bind(&bind_address)?
    .workers(config.app.workers)
    .run()
    .await?;

    tracing::info!("Forum-service shutting down");
    Ok(())
}
