use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    database::filter::FilterCriteria,
    dto::job_dto::{
        CreateJobPayload, DeletedResponse, JobListResponse, JobResponse, JobSearchQuery,
        UpdateJobPayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Duplicate job title for this company")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_repository.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

#[utoipa::path(
    get,
    path = "/jobs",
    params(
        ("title" = Option<String>, Query, description = "Case-insensitive title substring"),
        ("minSalary" = Option<i32>, Query, description = "Inclusive minimum salary"),
        ("hasEquity" = Option<String>, Query, description = "\"true\" keeps jobs with equity > 0")
    ),
    responses(
        (status = 200, description = "List of jobs", body = Json<JobListResponse>),
        (status = 400, description = "Invalid query")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let filters = FilterCriteria::from(query);
    let jobs = state.job_repository.find_all(&filters).await?;
    Ok(Json(JobListResponse::from(jobs)))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let job = state.job_repository.get(id).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid or empty payload"),
        (status = 404, description = "Job or company not found"),
        (status = 409, description = "Duplicate job title for this company")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_repository.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted successfully", body = Json<DeletedResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.job_repository.remove(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}
