use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::dto::contract_dto::{ContractJob, ContractJobSearchResponse};
use crate::error::{Error, Result};
use crate::models::{Job, JobSearchResponse, SearchFilters};
use crate::services::job_provider::JobProvider;
use crate::services::search;

/// Page size used when the whole catalogue is requested at once.
const ALL_JOBS_PAGE_SIZE: usize = 1000;
const FALLBACK_PAGE_SIZE: usize = 10;

/// Remote job source. Every response passes through the contract mapper;
/// failures are logged and degrade to empty results.
#[derive(Clone)]
pub struct ApiJobProvider {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ApiJobProvider {
    pub fn new(client: Client, base_url: &str, api_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("Invalid JOBS_API_URL `{}`: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "JOBS_API_URL `{}` cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "Requesting job API");
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: format!("Job API responded with {}", status),
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_job(&self, id: &str) -> Result<Option<Job>> {
        match self.fetch::<ContractJob>(self.endpoint(&["jobs", id])).await {
            Ok(contract) => Job::try_from(contract).map(Some),
            Err(Error::Upstream { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<JobSearchResponse> {
        let mut url = self.endpoint(&["jobs"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string());

        let contract = self.fetch::<ContractJobSearchResponse>(url).await?;
        let mut response = JobSearchResponse::from(contract);
        response.page = search::clamp_page(response.page, response.total_pages);
        Ok(response)
    }

    async fn fetch_search(&self, query: &str, filters: &SearchFilters) -> Result<JobSearchResponse> {
        let mut url = self.endpoint(&["jobs", "search"]);
        {
            let mut pairs = url.query_pairs_mut();
            if !query.is_empty() {
                pairs.append_pair("q", query);
            }
            for (key, values) in filters.non_empty() {
                pairs.append_pair(key, &values.join(","));
            }
        }

        let contract = self.fetch::<ContractJobSearchResponse>(url).await?;
        Ok(contract.into())
    }
}

#[async_trait]
impl JobProvider for ApiJobProvider {
    async fn get_jobs(&self) -> Vec<Job> {
        self.get_paginated_jobs(1, ALL_JOBS_PAGE_SIZE).await.results
    }

    async fn get_job_by_id(&self, id: &str) -> Option<Job> {
        self.fetch_job(id).await.unwrap_or_else(|err| {
            error!(job_id = id, error = %err, "Error fetching job");
            None
        })
    }

    async fn get_paginated_jobs(&self, page: usize, page_size: usize) -> JobSearchResponse {
        let page = page.max(1);
        self.fetch_page(page, page_size).await.unwrap_or_else(|err| {
            error!(page, page_size, error = %err, "Error fetching paginated jobs");
            JobSearchResponse::empty(search::clamp_page(page, 0), page_size)
        })
    }

    async fn search_jobs(&self, query: &str, filters: &SearchFilters) -> JobSearchResponse {
        self.fetch_search(query, filters).await.unwrap_or_else(|err| {
            error!(query, error = %err, "Error searching jobs");
            JobSearchResponse {
                query: Some(query.to_string()),
                applied_filters: (!filters.is_empty()).then(|| filters.clone()),
                ..JobSearchResponse::empty(1, FALLBACK_PAGE_SIZE)
            }
        })
    }
}
