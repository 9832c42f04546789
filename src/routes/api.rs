use crate::{
    data::student::{Student, StudentDraft},
    error::RosterError,
    state::RosterState,
};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Everything the API can answer with instead of a student, always rendered as JSON.
#[derive(Debug)]
pub enum ApiError {
    Roster(RosterError),
    Rejected { status: StatusCode, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<RosterError> for ApiError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::Rejected {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Self::Roster(error) => {
                let status_code = error.status_code();
                if status_code.is_server_error() {
                    error!(?error, "Error!");
                } else {
                    warn!(?error, "Rejected API request");
                }
                (status_code, error.to_string())
            }
            Self::Rejected { status, message } => {
                warn!(?status, %message, "Rejected malformed API request");
                (status, message)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

/// [`Json`] body whose rejections come back as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// [`Path`] parameters whose rejections come back as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

pub async fn get_students(State(state): State<RosterState>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.store().all().await?))
}

pub async fn post_student(
    State(state): State<RosterState>,
    ApiJson(draft): ApiJson<StudentDraft>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    draft.validate()?;
    let student = state.store().insert(draft).await?;
    info!(id = student.id, "Created student");
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn put_student(
    State(state): State<RosterState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(draft): ApiJson<StudentDraft>,
) -> ApiResult<Json<Student>> {
    draft.validate()?;
    let student = state.store().update(id, draft).await?;
    info!(id, "Updated student");
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.store().remove(id).await?;
    info!(id, "Deleted student");
    Ok(StatusCode::OK)
}
