pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use reqwest::Client;

use crate::config::{Config, DataSource};
use crate::error::Result;
use crate::services::{
    job_provider::{build_http_client, create_job_provider, JobProvider},
    places_service::PlacesService,
};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobProvider>,
    pub places: PlacesService,
    pub data_source: DataSource,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = build_http_client(config)?;
        let jobs = create_job_provider(config, http_client.clone())?;
        Ok(Self::with_provider(config, jobs, http_client))
    }

    /// State around an already-built provider; the places service still
    /// follows `config`.
    pub fn with_provider(config: &Config, jobs: Arc<dyn JobProvider>, http_client: Client) -> Self {
        Self {
            jobs,
            places: PlacesService::from_config(config, http_client),
            data_source: config.data_source,
        }
    }
}
