use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::{
    error::AppError,
    models::teacher::{AuthenticatedTeacher, TeacherQuery},
    AppState,
};

/// Extractor that resolves the `teacher_username` query parameter through the
/// configured auth guard. Runs before any body or field validation.
#[derive(Debug, Clone)]
pub struct TeacherAuth(pub AuthenticatedTeacher);

impl FromRequestParts<AppState> for TeacherAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let query = Query::<TeacherQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        let teacher = state
            .auth
            .authorize(query.teacher_username.as_deref())
            .await?;
        Ok(TeacherAuth(teacher))
    }
}
