use axum::{routing::get, Router};
use solrgate::{SolrClient, SolrConfig};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{get_filters, health, search, suggest, AppState};
use crate::openapi::ApiDoc;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Everything the server needs at startup, resolved by the caller.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub solr: SolrConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            solr: SolrConfig::default(),
        }
    }
}

/// All routes, with CORS and request tracing applied.
pub fn router(state: Arc<AppState>) -> Router {
    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let api = Router::new()
        .route("/search", get(search))
        .route("/search/", get(search))
        .route("/suggest", get(suggest))
        .route("/suggest/", get(suggest))
        .route("/filters", get(get_filters))
        .route("/filters/", get(get_filters))
        .route("/health", get(health))
        .with_state(state);

    Router::new()
        .merge(swagger)
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive().max_age(std::time::Duration::from_secs(86400)))
}

pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let startup_start = std::time::Instant::now();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let solr = SolrClient::new(&config.solr)?;
    tracing::info!(
        select_url = %solr.select_url(),
        timeout_secs = config.solr.timeout_secs,
        "Search backend configured"
    );

    match solr.ping().await {
        Ok(()) => tracing::info!("Search backend reachable"),
        Err(e) => tracing::warn!("Search backend not reachable yet: {}", e),
    }

    let state = Arc::new(AppState::new(solr));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    print_startup_banner(
        &local_addr.to_string(),
        &config.solr,
        startup_start.elapsed().as_millis(),
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn print_startup_banner(bind_addr: &str, solr: &SolrConfig, startup_ms: u128) {
    use colored::Colorize;

    let url = format!("http://{}", bind_addr);
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    let timing = format!("ready in {}ms", startup_ms);
    let backend = format!("{}/{}", solr.base_url.trim_end_matches('/'), solr.collection);

    println!();
    println!(
        "  {} {}  {}",
        "solrgate".bold().bright_green(),
        version.as_str().dimmed(),
        timing.as_str().dimmed(),
    );
    println!();
    println!("  {}  Local:      {}", "➜".green(), url.as_str().cyan());
    let docs = format!("{}/swagger-ui", url);
    println!("  {}  API Docs:   {}", "➜".green(), docs.as_str().cyan());
    println!("  {}  Backend:    {}", "➜".green(), backend.as_str().cyan());
    println!();
}
