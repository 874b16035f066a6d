use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod state;
mod template;
mod upload;


use pdfstash_core::config::{self, Settings};
use pdfstash_core::store;
use pdfstash_pdf_lopdf::LopdfBackend;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::resolve(&config::load_config());

    // Create the retention directory up front when raw uploads are kept.
    if let Some(dir) = &settings.upload_dir {
        std::fs::create_dir_all(dir)?;
        tracing::info!(dir = %dir.display(), "keeping raw uploads");
    }

    // Open once at startup so a missing table or unusable path surfaces
    // before the first request. Request handling opens its own connections.
    let conn = store::connect(&settings.db_path)?;
    store::init_schema(&conn)?;
    drop(conn);
    tracing::info!(path = %settings.db_path.display(), "database ready");

    let body_limit =
        axum::extract::DefaultBodyLimit::max(settings.max_upload_mb * 1024 * 1024);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let state = Arc::new(AppState {
        settings,
        backend: Arc::new(LopdfBackend::new()),
    });

    let app = router(state).layer(body_limit);

    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/upload", axum::routing::post(handlers::upload::upload))
        .with_state(state)
}
