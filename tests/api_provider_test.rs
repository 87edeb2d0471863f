use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use jobs_board_backend::{
    models::{AssignmentType, SearchFilters},
    services::{api_provider::ApiJobProvider, job_provider::JobProvider},
};
use reqwest::Client;
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;

fn contract_job(id: &str, title: &str) -> JsonValue {
    json!({
        "job_id": id,
        "approach_type": "EXTERNAL",
        "job_title": title,
        "job_description": "Keep the lights on",
        "organisation_name": "Cabinet Office",
        "locations": [{ "type": "uk", "post_town": "York", "postcode": "YO1 7HH" }],
        "grade_level": "Grade 7 Equivalent",
        "assignment_type": "LOAN",
        "personal_specification": "Calm under pressure",
        "application_details": "Apply online",
        "closing_date": "2025-12-31T23:59:59.000Z",
        "profession_type": "Project Delivery",
        "recruitment_email": "jobs@cabinetoffice.gov.uk",
        "salary_info": { "min_amount": 50000, "currency_code": "GBP", "currency_symbol": "£" }
    })
}

async fn job_by_id(Path(id): Path<String>, headers: HeaderMap) -> impl IntoResponse {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer secret") {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    match id.as_str() {
        "cab-001" => (StatusCode::OK, Json(contract_job("cab-001", "Delivery Manager"))),
        "bad-date" => {
            let mut job = contract_job("bad-date", "Broken");
            job["closing_date"] = json!("soon");
            (StatusCode::OK, Json(job))
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
    }
}

async fn job_page(Query(params): Query<HashMap<String, String>>) -> Json<JsonValue> {
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let page_size: usize = params.get("pageSize").and_then(|p| p.parse().ok()).unwrap_or(0);
    let mut undated = contract_job("cab-undated", "Undated");
    undated["closing_date"] = json!("");
    Json(json!({
        "jobs": [contract_job("cab-001", "Delivery Manager"), undated],
        "total_count": 41,
        "current_page": page,
        "page_size": page_size,
        "total_pages": 5,
        "search_query": null,
        "applied_filters": null
    }))
}

async fn job_search(Query(params): Query<HashMap<String, String>>) -> Json<JsonValue> {
    let query = params.get("q").cloned();
    let professions: Vec<String> = params
        .get("profession")
        .map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    Json(json!({
        "jobs": [contract_job("cab-002", "Project Lead")],
        "total_count": 1,
        "current_page": 1,
        "page_size": 1,
        "total_pages": 1,
        "search_query": query,
        "applied_filters": { "profession": professions }
    }))
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn healthy_upstream() -> ApiJobProvider {
    let app = Router::new()
        .route("/jobs", get(job_page))
        .route("/jobs/search", get(job_search))
        .route("/jobs/:id", get(job_by_id));
    let base = spawn(app).await;
    ApiJobProvider::new(Client::new(), &base, Some("secret".into())).unwrap()
}

async fn failing_upstream() -> ApiJobProvider {
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let base = spawn(app).await;
    ApiJobProvider::new(Client::new(), &base, None).unwrap()
}

#[tokio::test]
async fn fetches_and_maps_a_single_job() {
    let provider = healthy_upstream().await;
    let job = provider.get_job_by_id("cab-001").await.unwrap();
    assert_eq!(job.title, "Delivery Manager");
    assert_eq!(job.assignment_type, AssignmentType::Loan);
    assert_eq!(job.closing_date.to_rfc3339(), "2025-12-31T23:59:59+00:00");
}

#[tokio::test]
async fn missing_job_is_none() {
    let provider = healthy_upstream().await;
    assert!(provider.get_job_by_id("nope").await.is_none());
}

#[tokio::test]
async fn unmappable_job_is_none() {
    let provider = healthy_upstream().await;
    assert!(provider.get_job_by_id("bad-date").await.is_none());
}

#[tokio::test]
async fn page_request_forwards_paging_and_keeps_upstream_totals() {
    let provider = healthy_upstream().await;
    let response = provider.get_paginated_jobs(3, 5).await;
    assert_eq!(response.page, 3);
    assert_eq!(response.page_size, 5);
    assert_eq!(response.total, 41);
    assert_eq!(response.results.len(), 1);
}

#[tokio::test]
async fn page_zero_is_sent_upstream_as_page_one() {
    let provider = healthy_upstream().await;
    let response = provider.get_paginated_jobs(0, 5).await;
    assert_eq!(response.page, 1);
}

#[tokio::test]
async fn page_past_the_end_is_clamped_to_upstream_total_pages() {
    let provider = healthy_upstream().await;
    let response = provider.get_paginated_jobs(999, 5).await;
    assert_eq!(response.total_pages, 5);
    assert_eq!(response.page, 5);
}

#[tokio::test]
async fn get_jobs_requests_one_large_page() {
    let provider = healthy_upstream().await;
    let jobs = provider.get_jobs().await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "cab-001");
}

#[tokio::test]
async fn search_sends_query_and_comma_joined_filters() {
    let provider = healthy_upstream().await;
    let filters = SearchFilters {
        profession: vec!["Project Delivery".into(), "Policy".into()],
        ..SearchFilters::default()
    };
    let response = provider.search_jobs("lead", &filters).await;
    assert_eq!(response.query.as_deref(), Some("lead"));
    assert_eq!(response.applied_filters.unwrap().profession, filters.profession);
    assert_eq!(response.results[0].id, "cab-002");
}

#[tokio::test]
async fn server_error_degrades_to_empty_response() {
    let provider = failing_upstream().await;

    let page = provider.get_paginated_jobs(2, 20).await;
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 20);
    assert!(page.results.is_empty());

    let search = provider.search_jobs("engineer", &SearchFilters::default()).await;
    assert_eq!(search.total, 0);
    assert_eq!(search.query.as_deref(), Some("engineer"));
    assert!(search.applied_filters.is_none());

    assert!(provider.get_job_by_id("cab-001").await.is_none());
    assert!(provider.get_jobs().await.is_empty());
}

#[tokio::test]
async fn failed_page_requests_stay_within_page_bounds() {
    let provider = failing_upstream().await;

    for requested in [0, 1, 999] {
        let page = provider.get_paginated_jobs(requested, 10).await;
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1, "requested page {}", requested);
    }
}

#[tokio::test]
async fn unreachable_host_degrades_to_empty_response() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider =
        ApiJobProvider::new(Client::new(), &format!("http://{}", addr), None).unwrap();
    let page = provider.get_paginated_jobs(999, 10).await;
    assert_eq!(page.total, 0);
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
}
