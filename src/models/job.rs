use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::attachment::JobAttachment;
use crate::models::classification::{Approach, AssignmentType, DcStatus, Grade, Profession};
use crate::models::location::JobLocation;
use crate::models::salary::Salary;

/// Canonical job record. Contract payloads are converted into this shape at
/// the boundary and views are projected out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub approach: Approach,
    pub title: String,
    pub description: String,
    pub organisation: String,
    pub location: Vec<JobLocation>,
    pub grade: Grade,
    pub assignment_type: AssignmentType,
    pub personal_spec: String,
    pub apply_detail: String,
    pub closing_date: DateTime<Utc>,
    pub profession: Profession,
    pub recruitment_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_requirement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_numbers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_profile_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability_confident: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dc_status: Option<DcStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeployment_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prison_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veteran_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criminal_record_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complaints_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_for_the_civil_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility_check: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<JobAttachment>,
}

impl Job {
    /// Case-insensitive substring match against title, description and
    /// organisation. `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.organisation.to_lowercase().contains(needle)
    }
}
