use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::{AnnouncementStore, TeacherDirectory};
use crate::models::announcement::{Announcement, NewAnnouncement};

const COLUMNS: &str = "id, message, start_date, expiration_date";

#[derive(Clone)]
pub struct PgAnnouncementStore {
    pool: PgPool,
}

impl PgAnnouncementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for PgAnnouncementStore {
    async fn list_active(&self, today: NaiveDate) -> anyhow::Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {COLUMNS} FROM announcements
             WHERE expiration_date >= $1
               AND (start_date IS NULL OR start_date <= $1)
             ORDER BY expiration_date, created_at"
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {COLUMNS} FROM announcements
             ORDER BY expiration_date, start_date NULLS FIRST, created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement> {
        let row = sqlx::query_as::<_, Announcement>(&format!(
            "INSERT INTO announcements (id, message, start_date, expiration_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&new.message)
        .bind(new.start_date)
        .bind(new.expiration_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, new: NewAnnouncement) -> anyhow::Result<Option<Announcement>> {
        let row = sqlx::query_as::<_, Announcement>(&format!(
            "UPDATE announcements
             SET message = $1, start_date = $2, expiration_date = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING {COLUMNS}"
        ))
        .bind(&new.message)
        .bind(new.start_date)
        .bind(new.expiration_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired(&self, before: NaiveDate) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM announcements WHERE expiration_date < $1")
            .bind(before)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgTeacherDirectory {
    pool: PgPool,
}

impl PgTeacherDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherDirectory for PgTeacherDirectory {
    async fn exists(&self, username: &str) -> anyhow::Result<bool> {
        let found: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM teachers WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;
        Ok(found)
    }
}
