/// Purge announcements that expired a while ago
/// Run daily (e.g., via cron job: 0 2 * * * /app/purge-announcements)
///
/// Usage: purge-announcements [--older-than-days N]
///   --older-than-days N  : Keep anything that expired within the last N days (default 30)

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use announcements_api::{db, services::clock::SystemClock, AppState};

#[derive(Parser)]
#[command(name = "purge-announcements", about = "Delete long-expired announcements")]
struct Args {
    /// Days after expiration before an announcement is removed
    #[arg(long, default_value_t = 30)]
    older_than_days: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;
    let pool = db::create_pool(&database_url, 2).await?;

    tracing::info!("Starting announcement purge...");

    let state = AppState::postgres(pool, Arc::new(SystemClock));
    let removed = state
        .announcements
        .purge_expired(args.older_than_days)
        .await?;

    tracing::info!("Announcement purge completed: {} removed", removed);
    Ok(())
}
