use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AnnouncementStore, TeacherDirectory};
use crate::models::announcement::{Announcement, NewAnnouncement};

/// Process-local announcement store. Records are kept in insertion order so
/// that ties in the date ordering fall back to creation order, as in PostgreSQL.
#[derive(Debug, Default)]
pub struct MemoryAnnouncementStore {
    records: RwLock<Vec<Announcement>>,
}

impl MemoryAnnouncementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnnouncementStore for MemoryAnnouncementStore {
    async fn list_active(&self, today: NaiveDate) -> anyhow::Result<Vec<Announcement>> {
        let records = self.records.read().await;
        let mut active: Vec<Announcement> = records
            .iter()
            .filter(|a| a.expiration_date >= today)
            .filter(|a| a.start_date.map_or(true, |start| start <= today))
            .cloned()
            .collect();
        active.sort_by_key(|a| a.expiration_date);
        Ok(active)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Announcement>> {
        let mut all = self.records.read().await.clone();
        // Option orders None before Some, so absent start dates come first.
        all.sort_by_key(|a| (a.expiration_date, a.start_date));
        Ok(all)
    }

    async fn insert(&self, new: NewAnnouncement) -> anyhow::Result<Announcement> {
        let announcement = new.into_announcement(Uuid::new_v4());
        self.records.write().await.push(announcement.clone());
        Ok(announcement)
    }

    async fn update(&self, id: Uuid, new: NewAnnouncement) -> anyhow::Result<Option<Announcement>> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|a| a.id == id).map(|existing| {
            *existing = new.into_announcement(id);
            existing.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|a| a.id != id);
        Ok(records.len() < before)
    }

    async fn purge_expired(&self, before: NaiveDate) -> anyhow::Result<u64> {
        let mut records = self.records.write().await;
        let count = records.len();
        records.retain(|a| a.expiration_date >= before);
        Ok((count - records.len()) as u64)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTeacherDirectory {
    usernames: RwLock<HashSet<String>>,
}

impl MemoryTeacherDirectory {
    pub fn new<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            usernames: RwLock::new(usernames.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl TeacherDirectory for MemoryTeacherDirectory {
    async fn exists(&self, username: &str) -> anyhow::Result<bool> {
        Ok(self.usernames.read().await.contains(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn new(message: &str, start: Option<&str>, expiration: &str) -> NewAnnouncement {
        NewAnnouncement {
            message: message.to_string(),
            start_date: start.map(date),
            expiration_date: date(expiration),
        }
    }

    #[tokio::test]
    async fn test_list_all_puts_absent_start_first() {
        let store = MemoryAnnouncementStore::new();
        store.insert(new("late", None, "2025-07-01")).await.unwrap();
        store.insert(new("dated", Some("2025-05-01"), "2025-06-01")).await.unwrap();
        store.insert(new("open", None, "2025-06-01")).await.unwrap();

        let messages: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.message)
            .collect();
        assert_eq!(messages, vec!["open", "dated", "late"]);
    }

    #[tokio::test]
    async fn test_list_active_window_is_inclusive() {
        let store = MemoryAnnouncementStore::new();
        store.insert(new("ends today", None, "2025-06-01")).await.unwrap();
        store.insert(new("starts today", Some("2025-06-01"), "2025-06-10")).await.unwrap();
        store.insert(new("starts tomorrow", Some("2025-06-02"), "2025-06-10")).await.unwrap();
        store.insert(new("ended yesterday", None, "2025-05-31")).await.unwrap();

        let messages: Vec<String> = store
            .list_active(date("2025-06-01"))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.message)
            .collect();
        assert_eq!(messages, vec!["ends today", "starts today"]);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_boundary() {
        let store = MemoryAnnouncementStore::new();
        store.insert(new("old", None, "2025-01-01")).await.unwrap();
        store.insert(new("boundary", None, "2025-02-01")).await.unwrap();

        assert_eq!(store.purge_expired(date("2025-02-01")).await.unwrap(), 1);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_teacher_directory_lookup() {
        let directory = MemoryTeacherDirectory::new(["mrodriguez"]);
        assert!(directory.exists("mrodriguez").await.unwrap());
        assert!(!directory.exists("mchen").await.unwrap());
        assert!(!directory.exists("").await.unwrap());
    }
}
