use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A message shown to the school between an optional start date and its expiration date.
///
/// Dates serialize as `YYYY-MM-DD`; an absent start date serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    pub id: Uuid,
    pub message: String,
    pub start_date: Option<NaiveDate>,
    pub expiration_date: NaiveDate,
}

/// Validated fields for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub message: String,
    pub start_date: Option<NaiveDate>,
    pub expiration_date: NaiveDate,
}

impl NewAnnouncement {
    pub fn into_announcement(self, id: Uuid) -> Announcement {
        Announcement {
            id,
            message: self.message,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
        }
    }
}

/// Query params for POST /announcements and PUT /announcements/{id}.
///
/// Everything is optional text here; validation decides what a missing value means.
#[derive(Debug, Default, Deserialize)]
pub struct AnnouncementParams {
    pub message: Option<String>,
    pub expiration_date: Option<String>,
    pub start_date: Option<String>,
}
