pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::announcement::{Announcement, NewAnnouncement};

pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Run the migrations embedded in ./migrations/
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Persistent collection of announcements.
///
/// Every method is a single store call; callers validate before writing.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Announcements whose window contains `today`, by ascending expiration date.
    async fn list_active(&self, today: NaiveDate) -> anyhow::Result<Vec<Announcement>>;

    /// Every announcement by expiration date, then start date (absent first), then creation order.
    async fn list_all(&self) -> anyhow::Result<Vec<Announcement>>;

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement>;

    /// Overwrite message and dates in place. `None` when no record has `id`.
    async fn update(&self, id: Uuid, new: NewAnnouncement) -> anyhow::Result<Option<Announcement>>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Remove announcements that expired strictly before `before`.
    async fn purge_expired(&self, before: NaiveDate) -> anyhow::Result<u64>;

    async fn ping(&self) -> anyhow::Result<()>;
}

/// Lookup of known teacher usernames.
#[async_trait]
pub trait TeacherDirectory: Send + Sync {
    async fn exists(&self, username: &str) -> anyhow::Result<bool>;
}
