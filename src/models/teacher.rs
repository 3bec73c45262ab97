use serde::Deserialize;

/// Query params carrying the caller's teacher identifier.
#[derive(Debug, Default, Deserialize)]
pub struct TeacherQuery {
    pub teacher_username: Option<String>,
}

/// Marker produced once the caller has been resolved against the teacher directory.
#[derive(Debug, Clone)]
pub struct AuthenticatedTeacher {
    pub username: String,
}
