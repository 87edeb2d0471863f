use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        job_dto::{JobDetailResponse, JobListQuery, JobSearchQuery},
        view_dto::{FiltersView, JobAlertView, ResultsPageView},
    },
    error::Result,
    routes::jobs::find_job,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/views/jobs",
    params(
        ("page" = Option<usize>, Query, description = "Page number"),
        ("page_size" = Option<usize>, Query, description = "Jobs per page (1-100)")
    ),
    responses(
        (status = 200, description = "Results page of job cards", body = Json<ResultsPageView>),
        (status = 400, description = "Invalid page size")
    )
)]
#[axum::debug_handler]
pub async fn results_page(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let response = state
        .jobs
        .get_paginated_jobs(query.page(), query.page_size())
        .await;
    Ok(Json(ResultsPageView::from(&response)))
}

#[utoipa::path(
    get,
    path = "/api/views/jobs/search",
    params(
        ("q" = Option<String>, Query, description = "Free-text query"),
        ("profession" = Option<String>, Query, description = "Comma-separated profession labels"),
        ("assignment_type" = Option<String>, Query, description = "Comma-separated contract type labels"),
        ("grade" = Option<String>, Query, description = "Comma-separated grade labels")
    ),
    responses(
        (status = 200, description = "Search results as job cards", body = Json<ResultsPageView>)
    )
)]
#[axum::debug_handler]
pub async fn search_results_page(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let response = state
        .jobs
        .search_jobs(query.query(), &query.filters())
        .await;
    Ok(Json(ResultsPageView::from(&response)))
}

#[utoipa::path(
    get,
    path = "/api/views/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Details and advert views", body = Json<JobDetailResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job = find_job(&state, &id).await?;
    Ok(Json(JobDetailResponse::from(&job)))
}

#[utoipa::path(
    get,
    path = "/api/views/jobs/{id}/alert",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Alert view", body = Json<JobAlertView>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job = find_job(&state, &id).await?;
    Ok(Json(JobAlertView::from(&job)))
}

#[utoipa::path(
    get,
    path = "/api/views/filters",
    responses(
        (status = 200, description = "Filter facets with counts", body = Json<FiltersView>)
    )
)]
#[axum::debug_handler]
pub async fn filters(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.jobs.get_jobs().await;
    Ok(Json(FiltersView::from_jobs(&jobs)))
}
