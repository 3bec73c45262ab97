pub mod announcements;
pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/announcements",
            get(announcements::list_active).post(announcements::create_announcement),
        )
        // The literal segment shadows `{announcement_id}`, so writes to it are
        // forwarded to the id handlers and fail there like any other bad id.
        .route(
            "/announcements/manage",
            get(announcements::list_all)
                .put(announcements::update_manage_segment)
                .delete(announcements::delete_manage_segment),
        )
        .route(
            "/announcements/{announcement_id}",
            put(announcements::update_announcement).delete(announcements::delete_announcement),
        )
        .with_state(state)
}
