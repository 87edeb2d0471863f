use serde::{Deserialize, Serialize};

/// Postal (BS7666-style) address. No field is individually required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uprn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sao_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pao_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_address_search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverseasLocation {
    pub country_name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_display: Option<String>,
}

/// A job location is either overseas or fixed, never a mix of both.
///
/// The JSON form is untagged: a `country_name` key marks an overseas entry,
/// everything else is read as a postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobLocation {
    Overseas(OverseasLocation),
    Fixed(FixedLocation),
}

impl JobLocation {
    pub fn is_overseas(&self) -> bool {
        matches!(self, JobLocation::Overseas(_))
    }

    pub fn as_fixed(&self) -> Option<&FixedLocation> {
        match self {
            JobLocation::Fixed(fixed) => Some(fixed),
            JobLocation::Overseas(_) => None,
        }
    }

    pub fn as_overseas(&self) -> Option<&OverseasLocation> {
        match self {
            JobLocation::Overseas(overseas) => Some(overseas),
            JobLocation::Fixed(_) => None,
        }
    }
}

impl From<FixedLocation> for JobLocation {
    fn from(value: FixedLocation) -> Self {
        JobLocation::Fixed(value)
    }
}

impl From<OverseasLocation> for JobLocation {
    fn from(value: OverseasLocation) -> Self {
        JobLocation::Overseas(value)
    }
}
