use reqwest::{header, Client};
use tracing::{error, instrument};
use url::Url;

use crate::config::Config;
use crate::dto::places_dto::PlacesApiResponse;
use crate::error::{Error, Result};

/// Queries shorter than this never reach the places API.
pub const MIN_QUERY_LENGTH: usize = 3;
pub const MAX_SUGGESTIONS: usize = 10;

/// Location suggestions backed by the OS Places API.
#[derive(Clone)]
pub struct PlacesService {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl PlacesService {
    pub fn new(client: Client, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        Self::new(client, config.places_api_url.clone(), config.places_api_key.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Short queries yield no suggestions without checking configuration.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        if query.chars().count() < MIN_QUERY_LENGTH {
            return Ok(Vec::new());
        }

        let Some(api_key) = self.api_key.as_deref() else {
            error!("OS_PLACES_API_KEY is not configured");
            return Err(Error::Config("API key not configured".to_string()));
        };

        let mut url = Url::parse(&self.api_url).map_err(|e| {
            error!(url = %self.api_url, error = %e, "Invalid places API url");
            internal_error()
        })?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("key", api_key)
            .append_pair("maxresults", &MAX_SUGGESTIONS.to_string())
            .append_pair("output_srs", "EPSG:4326");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching from OS Places API");
                internal_error()
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "OS Places API error");
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: "Failed to fetch suggestions".to_string(),
            });
        }

        let body = response.json::<PlacesApiResponse>().await.map_err(|e| {
            error!(error = %e, "Failed to decode OS Places response");
            internal_error()
        })?;

        Ok(extract_suggestions(&body))
    }
}

fn internal_error() -> Error {
    Error::Internal("Internal server error".to_string())
}

/// Post town, postcode and local authority of each address, in result order,
/// without duplicates and capped at [`MAX_SUGGESTIONS`].
pub fn extract_suggestions(response: &PlacesApiResponse) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    for dpa in response.results.iter().filter_map(|result| result.dpa.as_ref()) {
        let candidates = [
            &dpa.post_town,
            &dpa.postcode,
            &dpa.local_custodian_code_description,
        ];
        for candidate in candidates.into_iter().flatten() {
            if !candidate.is_empty() && !suggestions.contains(candidate) {
                suggestions.push(candidate.clone());
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
