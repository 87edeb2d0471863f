use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::job_dto::{JobListQuery, JobSearchQuery},
    error::{Error, Result},
    models::{Job, JobSearchResponse},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("page" = Option<usize>, Query, description = "Page number, clamped to the available range"),
        ("page_size" = Option<usize>, Query, description = "Jobs per page (1-100)")
    ),
    responses(
        (status = 200, description = "One page of jobs", body = Json<JobSearchResponse>),
        (status = 400, description = "Invalid page size")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let response = state
        .jobs
        .get_paginated_jobs(query.page(), query.page_size())
        .await;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/jobs/all",
    responses(
        (status = 200, description = "Every job", body = Json<Vec<Job>>)
    )
)]
#[axum::debug_handler]
pub async fn list_all_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.jobs.get_jobs().await))
}

#[utoipa::path(
    get,
    path = "/api/jobs/search",
    params(
        ("q" = Option<String>, Query, description = "Matched against title, description and organisation"),
        ("profession" = Option<String>, Query, description = "Comma-separated profession labels"),
        ("assignment_type" = Option<String>, Query, description = "Comma-separated contract type labels"),
        ("grade" = Option<String>, Query, description = "Comma-separated grade labels")
    ),
    responses(
        (status = 200, description = "Matching jobs", body = Json<JobSearchResponse>)
    )
)]
#[axum::debug_handler]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let response = state
        .jobs
        .search_jobs(query.query(), &query.filters())
        .await;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<Job>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job = find_job(&state, &id).await?;
    Ok(Json(job))
}

pub(crate) async fn find_job(state: &AppState, id: &str) -> Result<Job> {
    state
        .jobs
        .get_job_by_id(id)
        .await
        .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
}
