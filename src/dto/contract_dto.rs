//! Wire shapes published by the upstream job API and their conversion into
//! domain records. Contract records live for one request only.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::Error;
use crate::models::{
    Approach, AssignmentType, DcStatus, FixedLocation, Grade, Job, JobAttachment, JobLocation,
    JobSearchResponse, OverseasLocation, Profession, Salary, SearchFilters,
};
use crate::utils::format::format_file_size;
use crate::utils::time::parse_closing_date;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractJob {
    pub job_id: String,
    pub approach_type: String,
    pub job_title: String,
    pub job_description: String,
    pub organisation_name: String,
    #[serde(default)]
    pub locations: Vec<ContractLocation>,
    pub grade_level: String,
    pub assignment_type: String,
    pub personal_specification: String,
    pub application_details: String,
    pub closing_date: String,
    pub profession_type: String,
    pub recruitment_email: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub nationality_requirement: Option<String>,
    pub job_summary: Option<String>,
    pub application_url: Option<String>,
    pub benefits_description: Option<String>,
    pub salary_info: Option<ContractSalary>,
    pub number_of_positions: Option<u32>,
    pub success_profile_details: Option<String>,
    pub diversity_statement: Option<String>,
    pub disability_confident_status: Option<String>,
    pub dc_status_level: Option<String>,
    pub redeployment_scheme_info: Option<String>,
    pub prison_scheme_info: Option<String>,
    pub veteran_scheme_info: Option<String>,
    pub criminal_record_check: Option<String>,
    pub complaints_info: Option<String>,
    pub civil_service_info: Option<String>,
    pub eligibility_check: Option<String>,
    pub job_attachments: Option<Vec<ContractAttachment>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractLocation {
    /// `uk` or `overseas`.
    #[serde(rename = "type", default)]
    pub location_type: String,
    pub uprn: Option<String>,
    pub sao_text: Option<String>,
    pub pao_text: Option<String>,
    pub street_description: Option<String>,
    pub locality: Option<String>,
    pub town_name: Option<String>,
    pub post_town: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub formatted_address: Option<String>,
    pub full_address_search: Option<String>,
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub location_display: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSalary {
    pub min_amount: Decimal,
    pub max_amount: Option<Decimal>,
    pub currency_code: String,
    pub currency_symbol: Option<String>,
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractAttachment {
    pub url: String,
    #[serde(default)]
    pub document_name: String,
    #[serde(default)]
    pub document_format: String,
    pub file_size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractJobSearchResponse {
    #[serde(default)]
    pub jobs: Vec<ContractJob>,
    pub total_count: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub search_query: Option<String>,
    pub applied_filters: Option<BTreeMap<String, Vec<String>>>,
}

impl From<ContractLocation> for JobLocation {
    fn from(value: ContractLocation) -> Self {
        if value.location_type == "overseas" {
            if let Some(country_name) = value.country_name.filter(|name| !name.is_empty()) {
                return JobLocation::Overseas(OverseasLocation {
                    country_name,
                    country_code: value.country_code.unwrap_or_default(),
                    location_display: value.location_display,
                });
            }
        }

        JobLocation::Fixed(FixedLocation {
            uprn: value.uprn,
            sao_text: value.sao_text,
            pao_text: value.pao_text,
            street_description: value.street_description,
            locality: value.locality,
            town_name: value.town_name,
            post_town: value.post_town,
            postcode: value.postcode,
            latitude: value.latitude,
            longitude: value.longitude,
            formatted_address: value.formatted_address,
            full_address_search: value.full_address_search,
        })
    }
}

impl From<ContractSalary> for Salary {
    fn from(value: ContractSalary) -> Self {
        Self {
            minimum: value.min_amount,
            maximum: value.max_amount,
            currency: value.currency_code,
            currency_symbol: value.currency_symbol,
            salary_details: value.additional_details,
        }
    }
}

impl From<ContractAttachment> for JobAttachment {
    fn from(value: ContractAttachment) -> Self {
        Self {
            href: value.url,
            doc_name: value.document_name,
            doc_format: value.document_format,
            file_size: value
                .file_size_bytes
                .filter(|bytes| *bytes > 0)
                .map(format_file_size),
        }
    }
}

impl TryFrom<ContractJob> for Job {
    type Error = Error;

    fn try_from(value: ContractJob) -> Result<Self, Self::Error> {
        let closing_date = parse_closing_date(&value.closing_date).map_err(|_| {
            Error::Mapping(format!(
                "job {} has unparseable closing date `{}`",
                value.job_id, value.closing_date
            ))
        })?;

        let approach = Approach::parse(&value.approach_type);
        if !approach.is_recognized() {
            warn!(job_id = %value.job_id, approach = %approach, "Unrecognized approach in contract job");
        }
        let assignment_type = AssignmentType::parse(&value.assignment_type);
        if !assignment_type.is_recognized() {
            warn!(job_id = %value.job_id, assignment_type = %assignment_type, "Unrecognized assignment type in contract job");
        }
        let profession = Profession::parse(&value.profession_type);
        if !profession.is_recognized() {
            warn!(job_id = %value.job_id, profession = %profession, "Unrecognized profession in contract job");
        }
        let dc_status = value
            .dc_status_level
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(DcStatus::parse);
        if let Some(status) = dc_status.as_ref().filter(|status| !status.is_recognized()) {
            warn!(job_id = %value.job_id, dc_status = %status, "Unrecognized disability confident status in contract job");
        }

        let apply_url = value
            .application_url
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match Url::parse(raw.trim()) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(job_id = %value.job_id, url = raw, error = %err, "Dropping invalid application url");
                    None
                }
            });

        Ok(Job {
            id: value.job_id,
            external_id: None,
            approach,
            title: value.job_title,
            description: value.job_description,
            organisation: value.organisation_name,
            location: value.locations.into_iter().map(Into::into).collect(),
            grade: Grade::parse(&value.grade_level),
            assignment_type,
            personal_spec: value.personal_specification,
            apply_detail: value.application_details,
            closing_date,
            profession,
            recruitment_email: value.recruitment_email,
            contact_name: value.contact_name,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            nationality_requirement: value.nationality_requirement,
            summary: value.job_summary,
            apply_url,
            benefits: value.benefits_description,
            salary: value.salary_info.map(Into::into),
            job_numbers: value.number_of_positions,
            success_profile_details: value.success_profile_details,
            diversity_statement: value.diversity_statement,
            disability_confident: value.disability_confident_status,
            dc_status,
            redeployment_scheme: value.redeployment_scheme_info,
            prison_scheme: value.prison_scheme_info,
            veteran_scheme: value.veteran_scheme_info,
            criminal_record_check: value.criminal_record_check,
            complaints_info: value.complaints_info,
            working_for_the_civil_service: value.civil_service_info,
            eligibility_check: value.eligibility_check,
            attachments: value
                .job_attachments
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}

/// Upstream filter maps use free-form keys; only the ones the job board
/// filters on survive.
pub fn filters_from_contract(raw: BTreeMap<String, Vec<String>>) -> SearchFilters {
    let mut filters = SearchFilters::default();
    for (key, values) in raw {
        match key.as_str() {
            "profession" => filters.profession = values,
            "assignmentType" | "assignment_type" => filters.assignment_type = values,
            "grade" => filters.grade = values,
            other => tracing::debug!(filter = other, "Ignoring unsupported upstream filter"),
        }
    }
    filters
}

impl From<ContractJobSearchResponse> for JobSearchResponse {
    /// Jobs that fail to map are skipped; `total` keeps the upstream count.
    fn from(value: ContractJobSearchResponse) -> Self {
        let results = value
            .jobs
            .into_iter()
            .filter_map(|job| match Job::try_from(job) {
                Ok(job) => Some(job),
                Err(err) => {
                    warn!(error = %err, "Skipping contract job that failed to map");
                    None
                }
            })
            .collect();

        Self {
            results,
            total: value.total_count,
            page: value.current_page,
            page_size: value.page_size,
            total_pages: value.total_pages,
            query: value.search_query,
            applied_filters: value.applied_filters.map(filters_from_contract),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn maps_a_uk_contract_job() {
        let job = Job::try_from(fixtures::contract_software_engineer()).unwrap();
        let expected = fixtures::software_engineer();

        assert_eq!(job.id, expected.id);
        assert_eq!(job.approach, Approach::External);
        assert_eq!(job.assignment_type, AssignmentType::Permanent);
        assert_eq!(job.grade, Grade::Grade7);
        assert_eq!(job.profession, Profession::DigitalAndData);
        assert_eq!(job.closing_date, expected.closing_date);
        assert_eq!(job.location, expected.location);
        assert_eq!(job.salary, expected.salary);
        assert_eq!(job.attachments, expected.attachments);
        assert_eq!(job.dc_status, Some(DcStatus::Leader));
        assert_eq!(
            job.apply_url.as_ref().map(Url::as_str),
            Some("https://www.civilservicejobs.service.gov.uk/apply/001")
        );
    }

    #[test]
    fn maps_an_overseas_contract_location() {
        let job = Job::try_from(fixtures::contract_embassy_manager()).unwrap();
        assert_eq!(job.location, fixtures::embassy_manager().location);
    }

    #[test]
    fn overseas_type_without_country_falls_back_to_postal() {
        let location: JobLocation = ContractLocation {
            location_type: "overseas".into(),
            postcode: Some("SW1A 2AH".into()),
            ..ContractLocation::default()
        }
        .into();
        assert_eq!(location.as_fixed().unwrap().postcode.as_deref(), Some("SW1A 2AH"));
    }

    #[test]
    fn unknown_enumerations_are_surfaced_not_replaced() {
        let contract = ContractJob {
            approach_type: "WORLDWIDE".into(),
            assignment_type: "ZERO_HOURS".into(),
            profession_type: "Astronomy".into(),
            ..fixtures::contract_software_engineer()
        };
        let job = Job::try_from(contract).unwrap();
        assert_eq!(job.approach, Approach::Unrecognized("WORLDWIDE".into()));
        assert_eq!(job.approach.effective(), Approach::External);
        assert_eq!(job.assignment_type.effective(), AssignmentType::Permanent);
        assert_eq!(job.profession.effective(), Profession::Policy);
    }

    #[test]
    fn unparseable_closing_date_is_rejected() {
        let contract = ContractJob {
            closing_date: "next Tuesday".into(),
            ..fixtures::contract_software_engineer()
        };
        let err = Job::try_from(contract).unwrap_err();
        assert!(matches!(err, Error::Mapping(msg) if msg.contains("test-job-001")));
    }

    #[test]
    fn invalid_application_url_is_dropped() {
        let contract = ContractJob {
            application_url: Some("not a url".into()),
            ..fixtures::contract_software_engineer()
        };
        assert!(Job::try_from(contract).unwrap().apply_url.is_none());
    }

    #[test]
    fn search_response_skips_bad_jobs_and_types_filters() {
        let mut applied = BTreeMap::new();
        applied.insert("profession".to_string(), vec!["Digital and Data".to_string()]);
        applied.insert("department".to_string(), vec!["GDS".to_string()]);

        let response = ContractJobSearchResponse {
            jobs: vec![
                fixtures::contract_software_engineer(),
                ContractJob {
                    closing_date: String::new(),
                    ..fixtures::contract_embassy_manager()
                },
            ],
            total_count: 2,
            current_page: 1,
            page_size: 10,
            total_pages: 1,
            search_query: Some("engineer".into()),
            applied_filters: Some(applied),
        };

        let domain = JobSearchResponse::from(response);
        assert_eq!(domain.results.len(), 1);
        assert_eq!(domain.total, 2);
        assert_eq!(domain.query.as_deref(), Some("engineer"));
        let filters = domain.applied_filters.unwrap();
        assert_eq!(filters.profession, vec!["Digital and Data".to_string()]);
        assert!(filters.grade.is_empty());
    }

    #[test]
    fn deserializes_wire_json() {
        let raw = serde_json::json!({
            "job_id": "wire-1",
            "approach_type": "INTERNAL",
            "job_title": "Analyst",
            "job_description": "Crunch numbers",
            "organisation_name": "HMRC",
            "locations": [{ "type": "uk", "postcode": "BS1 1AA" }],
            "grade_level": "Grade 7",
            "assignment_type": "LOAN",
            "personal_specification": "Numerate",
            "application_details": "Online",
            "closing_date": "2026-02-01T12:00:00Z",
            "profession_type": "Statistics",
            "recruitment_email": "jobs@hmrc.gov.uk",
            "salary_info": { "min_amount": 40000, "currency_code": "GBP" }
        });
        let contract: ContractJob = serde_json::from_value(raw).unwrap();
        let job = Job::try_from(contract).unwrap();
        assert_eq!(job.assignment_type, AssignmentType::Loan);
        assert_eq!(job.grade, Grade::Other("Grade 7".into()));
        assert_eq!(job.salary.unwrap().minimum, Decimal::from(40000));
    }
}
