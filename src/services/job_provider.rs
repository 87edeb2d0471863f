use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::config::{Config, DataSource};
use crate::error::{Error, Result};
use crate::models::{Job, JobSearchResponse, SearchFilters};
use crate::services::api_provider::ApiJobProvider;
use crate::services::mock_provider::MockJobProvider;

/// Read-only source of job records.
///
/// Lookups never fail for a missing id; they return `None`. Implementations
/// that talk to a remote source degrade to empty results instead of
/// surfacing transport errors.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn get_jobs(&self) -> Vec<Job>;

    async fn get_job_by_id(&self, id: &str) -> Option<Job>;

    /// Page numbers outside `1..=total_pages` are clamped.
    async fn get_paginated_jobs(&self, page: usize, page_size: usize) -> JobSearchResponse;

    async fn search_jobs(&self, query: &str, filters: &SearchFilters) -> JobSearchResponse;
}

pub fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))
}

pub fn create_job_provider(config: &Config, client: Client) -> Result<Arc<dyn JobProvider>> {
    let provider: Arc<dyn JobProvider> = match config.data_source {
        DataSource::Mock => {
            let provider = match &config.jobs_data_file {
                Some(path) => MockJobProvider::from_file(path)?,
                None => MockJobProvider::bundled()?,
            };
            info!(jobs = provider.len(), "Using mock job provider");
            Arc::new(provider)
        }
        DataSource::Api => {
            info!(base_url = %config.jobs_api_url, "Using remote job API provider");
            Arc::new(ApiJobProvider::new(
                client,
                &config.jobs_api_url,
                config.jobs_api_key.clone(),
            )?)
        }
    };
    Ok(provider)
}
