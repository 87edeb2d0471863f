use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlacesQuery {
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Response body of the OS Places `find` endpoint. Only the fields used for
/// suggestions are modelled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlacesApiResponse {
    #[serde(default)]
    pub results: Vec<PlacesApiResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlacesApiResult {
    #[serde(rename = "DPA")]
    pub dpa: Option<DeliveryPointAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeliveryPointAddress {
    #[serde(rename = "ADDRESS", default)]
    pub address: String,
    #[serde(rename = "POST_TOWN")]
    pub post_town: Option<String>,
    #[serde(rename = "POSTCODE")]
    pub postcode: Option<String>,
    #[serde(rename = "LOCAL_CUSTODIAN_CODE_DESCRIPTION")]
    pub local_custodian_code_description: Option<String>,
}
