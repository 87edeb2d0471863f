use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Job, JobSearchResponse, SearchFilters};
use crate::services::job_provider::JobProvider;
use crate::services::search;

const BUNDLED_JOBS: &str = include_str!("../../data/jobs.json");

/// Serves a fixed, domain-shaped job list held in memory.
#[derive(Debug, Clone)]
pub struct MockJobProvider {
    jobs: Vec<Job>,
}

impl MockJobProvider {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_JOBS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let jobs: Vec<Job> = serde_json::from_str(raw)?;
        Ok(Self::new(jobs))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobProvider for MockJobProvider {
    async fn get_jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    async fn get_job_by_id(&self, id: &str) -> Option<Job> {
        self.jobs.iter().find(|job| job.id == id).cloned()
    }

    async fn get_paginated_jobs(&self, page: usize, page_size: usize) -> JobSearchResponse {
        search::paginate(&self.jobs, page, page_size)
    }

    async fn search_jobs(&self, query: &str, filters: &SearchFilters) -> JobSearchResponse {
        search::search(&self.jobs, query, filters)
    }
}
