use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::teacher::TeacherAuth,
    models::{
        announcement::{Announcement, AnnouncementParams},
        teacher::AuthenticatedTeacher,
    },
    AppState,
};

/// GET /announcements — public, currently active announcements by expiration date.
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Announcement>>> {
    state.announcements.list_active().await.map(Json)
}

/// GET /announcements/manage?teacher_username=… — every announcement, expired included.
pub async fn list_all(
    State(state): State<AppState>,
    _teacher: TeacherAuth,
) -> AppResult<Json<Vec<Announcement>>> {
    state.announcements.list_all().await.map(Json)
}

/// POST /announcements?teacher_username=…&message=…&expiration_date=…[&start_date=…]
pub async fn create_announcement(
    State(state): State<AppState>,
    TeacherAuth(teacher): TeacherAuth,
    Query(params): Query<AnnouncementParams>,
) -> AppResult<Json<Announcement>> {
    tracing::debug!("Announcement create requested by {}", teacher.username);
    state.announcements.create(&params).await.map(Json)
}

/// PUT /announcements/{announcement_id} — same fields as create, full overwrite.
pub async fn update_announcement(
    State(state): State<AppState>,
    TeacherAuth(teacher): TeacherAuth,
    Path(announcement_id): Path<String>,
    Query(params): Query<AnnouncementParams>,
) -> AppResult<Json<Announcement>> {
    update(&state, &teacher, &announcement_id, &params).await
}

/// PUT /announcements/manage
pub async fn update_manage_segment(
    State(state): State<AppState>,
    TeacherAuth(teacher): TeacherAuth,
    Query(params): Query<AnnouncementParams>,
) -> AppResult<Json<Announcement>> {
    update(&state, &teacher, "manage", &params).await
}

/// DELETE /announcements/{announcement_id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    TeacherAuth(teacher): TeacherAuth,
    Path(announcement_id): Path<String>,
) -> AppResult<Json<Value>> {
    delete(&state, &teacher, &announcement_id).await
}

/// DELETE /announcements/manage
pub async fn delete_manage_segment(
    State(state): State<AppState>,
    TeacherAuth(teacher): TeacherAuth,
) -> AppResult<Json<Value>> {
    delete(&state, &teacher, "manage").await
}

async fn update(
    state: &AppState,
    teacher: &AuthenticatedTeacher,
    announcement_id: &str,
    params: &AnnouncementParams,
) -> AppResult<Json<Announcement>> {
    tracing::debug!("Announcement {} update requested by {}", announcement_id, teacher.username);
    state
        .announcements
        .update(announcement_id, params)
        .await
        .map(Json)
}

async fn delete(
    state: &AppState,
    teacher: &AuthenticatedTeacher,
    announcement_id: &str,
) -> AppResult<Json<Value>> {
    tracing::debug!("Announcement {} delete requested by {}", announcement_id, teacher.username);
    state.announcements.delete(announcement_id).await?;
    Ok(Json(json!({ "message": "Announcement deleted" })))
}
