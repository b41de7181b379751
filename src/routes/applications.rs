use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::application_dto::AppliedResponse,
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    post,
    path = "/users/{username}/jobs/{id}",
    params(
        ("username" = String, Path, description = "Applicant username"),
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 201, description = "Application recorded", body = Json<AppliedResponse>),
        (status = 403, description = "Token belongs to another non-admin user"),
        (status = 404, description = "User or job not found"),
        (status = 409, description = "Already applied")
    )
)]
#[axum::debug_handler]
pub async fn apply_for_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((username, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse> {
    if !claims.may_act_for(&username) {
        return Err(Error::Forbidden(
            "Cannot apply on behalf of another user".into(),
        ));
    }
    let application = state.application_repository.create(&username, id).await?;
    Ok((StatusCode::CREATED, Json(AppliedResponse::from(application))))
}
