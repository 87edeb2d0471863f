pub mod health;
pub mod jobs;
pub mod places;
pub mod views;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let base_routes = Router::new().route("/health", get(health::health));

    let jobs_api = Router::new()
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/all", get(jobs::list_all_jobs))
        .route("/api/jobs/search", get(jobs::search_jobs))
        .route("/api/jobs/:id", get(jobs::get_job));

    let views_api = Router::new()
        .route("/api/views/jobs", get(views::results_page))
        .route("/api/views/jobs/search", get(views::search_results_page))
        .route("/api/views/jobs/:id", get(views::job_page))
        .route("/api/views/jobs/:id/alert", get(views::job_alert))
        .route("/api/views/filters", get(views::filters));

    let places_api = Router::new().route("/api/places", get(places::suggest_places));

    base_routes
        .merge(jobs_api)
        .merge(views_api)
        .merge(places_api)
        .with_state(state)
}
