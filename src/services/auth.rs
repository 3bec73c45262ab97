use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    db::TeacherDirectory,
    error::{AppError, AppResult},
    models::teacher::AuthenticatedTeacher,
};

/// Decides whether a caller may manage announcements.
#[async_trait]
pub trait AuthGuard: Send + Sync {
    async fn authorize(&self, teacher_username: Option<&str>) -> AppResult<AuthenticatedTeacher>;
}

/// Accepts any username that exists in the teacher directory.
/// There is no password or token check behind this.
pub struct TeacherDirectoryGuard {
    directory: Arc<dyn TeacherDirectory>,
}

impl TeacherDirectoryGuard {
    pub fn new(directory: Arc<dyn TeacherDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl AuthGuard for TeacherDirectoryGuard {
    async fn authorize(&self, teacher_username: Option<&str>) -> AppResult<AuthenticatedTeacher> {
        let username = teacher_username
            .filter(|u| !u.is_empty())
            .ok_or(AppError::Unauthenticated)?;

        if !self.directory.exists(username).await? {
            tracing::warn!("Rejected unknown teacher username: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        Ok(AuthenticatedTeacher {
            username: username.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryTeacherDirectory;

    fn guard() -> TeacherDirectoryGuard {
        TeacherDirectoryGuard::new(Arc::new(MemoryTeacherDirectory::new(["mrodriguez"])))
    }

    #[tokio::test]
    async fn test_missing_or_empty_username_is_unauthenticated() {
        let guard = guard();
        assert!(matches!(guard.authorize(None).await, Err(AppError::Unauthenticated)));
        assert!(matches!(guard.authorize(Some("")).await, Err(AppError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_unknown_username_is_invalid_credentials() {
        let result = guard().authorize(Some("intruder")).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_known_username_is_authorized() {
        let teacher = guard().authorize(Some("mrodriguez")).await.unwrap();
        assert_eq!(teacher.username, "mrodriguez");
    }
}
