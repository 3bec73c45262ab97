// Library exports for binary tools and tests
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;

use db::{
    memory::{MemoryAnnouncementStore, MemoryTeacherDirectory},
    postgres::{PgAnnouncementStore, PgTeacherDirectory},
    AnnouncementStore, TeacherDirectory,
};
use services::{
    announcements::AnnouncementService,
    auth::{AuthGuard, TeacherDirectoryGuard},
    clock::Clock,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub announcements: AnnouncementService,
    pub auth: Arc<dyn AuthGuard>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn AnnouncementStore>,
        directory: Arc<dyn TeacherDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            announcements: AnnouncementService::new(store, clock),
            auth: Arc::new(TeacherDirectoryGuard::new(directory)),
        }
    }

    pub fn postgres(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(PgAnnouncementStore::new(pool.clone())),
            Arc::new(PgTeacherDirectory::new(pool)),
            clock,
        )
    }

    pub fn in_memory<I, S>(teachers: I, clock: Arc<dyn Clock>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Arc::new(MemoryAnnouncementStore::new()),
            Arc::new(MemoryTeacherDirectory::new(teachers)),
            clock,
        )
    }
}
