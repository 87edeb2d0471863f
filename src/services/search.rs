//! In-process pagination and search over a job list.

use crate::models::{Job, JobSearchResponse, SearchFilters};

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Floors `page` at 1 and caps it at the last page (page 1 when there are no
/// results).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

pub fn paginate(jobs: &[Job], page: usize, page_size: usize) -> JobSearchResponse {
    let page_size = page_size.max(1);
    let total = jobs.len();
    let total_pages = total_pages(total, page_size);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * page_size;
    let results = jobs.iter().skip(start).take(page_size).cloned().collect();

    JobSearchResponse {
        results,
        total,
        page,
        page_size,
        total_pages,
        query: None,
        applied_filters: None,
    }
}

/// Text query plus exact filters. Results are returned as a single page and
/// echo the query and filters that produced them.
pub fn search(jobs: &[Job], query: &str, filters: &SearchFilters) -> JobSearchResponse {
    let needle = query.trim().to_lowercase();
    let results: Vec<Job> = jobs
        .iter()
        .filter(|job| needle.is_empty() || job.matches_text(&needle))
        .filter(|job| filters.matches(job))
        .cloned()
        .collect();
    let total = results.len();

    JobSearchResponse {
        results,
        total,
        page: 1,
        page_size: total,
        total_pages: 1,
        query: Some(query.to_string()),
        applied_filters: Some(filters.clone()),
    }
}
