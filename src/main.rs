use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use announcements_api::{config::Config, db, routes, services::clock::SystemClock, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let clock = Arc::new(SystemClock);

    let state = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url, config.database_max_connections).await?;
            db::run_migrations(&pool).await?;
            info!("Database connected and migrations applied");
            AppState::postgres(pool, clock)
        }
        None => {
            warn!(
                "DATABASE_URL not set; announcements are kept in memory ({} dev teachers)",
                config.dev_teachers.len()
            );
            AppState::in_memory(config.dev_teachers.clone(), clock)
        }
    };

    // Allow the app base URL, its subdomains, and localhost during development.
    let base = config.app_base_url.clone();
    let cors_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        let Ok(o) = origin.to_str() else {
            return false;
        };
        if o.starts_with("http://localhost") || o.starts_with("http://127.0.0.1") {
            return true;
        }
        if o == base {
            return true;
        }
        if let Some(idx) = base.find("://") {
            let after_scheme = &base[idx + 3..];
            let domain = after_scheme.split('/').next().unwrap_or(after_scheme);
            let domain_clean = domain.split(':').next().unwrap_or(domain);
            if o.ends_with(&format!(".{domain_clean}")) {
                return true;
            }
        }
        false
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_origin(cors_origin);

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Announcements API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
