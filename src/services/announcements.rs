use std::sync::Arc;

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::{
    db::AnnouncementStore,
    error::{AppError, AppResult},
    models::announcement::{Announcement, AnnouncementParams, NewAnnouncement},
    services::clock::Clock,
};

/// Parse an optional `YYYY-MM-DD` value. Missing and empty text both mean "no date".
pub fn parse_date_or_none(value: Option<&str>, field: &'static str) -> AppResult<Option<NaiveDate>> {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(AppError::InvalidDateFormat(field));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::InvalidDateFormat(field))
}

/// Apply the create/update rules: trimmed non-empty message, required
/// expiration date, start date not after expiration.
pub fn validate(params: &AnnouncementParams) -> AppResult<NewAnnouncement> {
    let message = params.message.as_deref().unwrap_or_default().trim();
    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let start_date = parse_date_or_none(params.start_date.as_deref(), "start_date")?;
    let expiration_date = parse_date_or_none(params.expiration_date.as_deref(), "expiration_date")?
        .ok_or(AppError::MissingExpiration)?;

    if matches!(start_date, Some(start) if start > expiration_date) {
        return Err(AppError::InvalidDateRange);
    }

    Ok(NewAnnouncement {
        message: message.to_string(),
        start_date,
        expiration_date,
    })
}

pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidIdentifier)
}

#[derive(Clone)]
pub struct AnnouncementService {
    store: Arc<dyn AnnouncementStore>,
    clock: Arc<dyn Clock>,
}

impl AnnouncementService {
    pub fn new(store: Arc<dyn AnnouncementStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.store.ping().await
    }

    pub async fn list_active(&self) -> AppResult<Vec<Announcement>> {
        Ok(self.store.list_active(self.clock.today()).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Announcement>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn create(&self, params: &AnnouncementParams) -> AppResult<Announcement> {
        let new = validate(params)?;
        let announcement = self.store.insert(new).await?;
        tracing::info!("Created announcement {}", announcement.id);
        Ok(announcement)
    }

    pub async fn update(&self, raw_id: &str, params: &AnnouncementParams) -> AppResult<Announcement> {
        let new = validate(params)?;
        let id = parse_id(raw_id)?;
        let announcement = self.store.update(id, new).await?.ok_or(AppError::NotFound)?;
        tracing::info!("Updated announcement {}", id);
        Ok(announcement)
    }

    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_id(raw_id)?;
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!("Deleted announcement {}", id);
        Ok(())
    }

    /// Drop announcements that expired more than `older_than_days` days ago.
    pub async fn purge_expired(&self, older_than_days: u32) -> AppResult<u64> {
        let cutoff = self
            .clock
            .today()
            .checked_sub_days(Days::new(u64::from(older_than_days)))
            .ok_or(AppError::RetentionOutOfRange(older_than_days))?;
        let removed = self.store.purge_expired(cutoff).await?;
        tracing::info!("Purged {} announcements expired before {}", removed, cutoff);
        Ok(removed)
    }
}
