//! Flattened projections of a domain job, shaped for a rendering layer.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Job, JobAttachment, JobSearchResponse};
use crate::utils::format::{format_date, format_location_display, format_salary};

const DEFAULT_ATTACHMENT_NAME: &str = "Attachment";

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn non_blank(value: &str) -> Option<String> {
    non_empty(Some(value))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub organisation: String,
    pub location: String,
    pub contract_type: String,
    pub salary: Option<String>,
    pub closing_date_display: String,
    pub href: String,
}

impl From<&Job> for JobCardView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            organisation: job.organisation.clone(),
            location: format_location_display(&job.location),
            contract_type: job.assignment_type.to_string(),
            salary: format_salary(job.salary.as_ref()),
            closing_date_display: format_date(&job.closing_date),
            href: format!("/job/{}", job.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailsView {
    pub id: String,
    pub title: String,
    pub organisation: String,
    pub location: String,
    pub salary: Option<String>,
    pub salary_details: Option<String>,
    pub contract_type: String,
    pub job_numbers: Option<u32>,
    pub profession: String,
    pub closing_date_display: String,
    pub apply_url: Option<String>,
}

impl From<&Job> for JobDetailsView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            organisation: job.organisation.clone(),
            location: format_location_display(&job.location),
            salary: format_salary(job.salary.as_ref()),
            salary_details: non_empty(
                job.salary
                    .as_ref()
                    .and_then(|salary| salary.salary_details.as_deref()),
            ),
            contract_type: job.assignment_type.to_string(),
            job_numbers: job.job_numbers,
            profession: job.profession.to_string(),
            closing_date_display: format_date(&job.closing_date),
            apply_url: job.apply_url.as_ref().map(|url| url.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentView {
    pub name: String,
    pub href: String,
    pub format: Option<String>,
    pub size: Option<String>,
}

impl From<&JobAttachment> for AttachmentView {
    fn from(attachment: &JobAttachment) -> Self {
        Self {
            name: non_blank(&attachment.doc_name)
                .unwrap_or_else(|| DEFAULT_ATTACHMENT_NAME.to_string()),
            href: attachment.href.clone(),
            format: non_blank(&attachment.doc_format),
            size: non_empty(attachment.file_size.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAdvertView {
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub personal_spec: Option<String>,
    pub benefits: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub recruitment_email: Option<String>,
    pub apply_detail: Option<String>,
    pub nationality_requirement: Option<String>,
    pub disability_confident: Option<String>,
    pub diversity_statement: Option<String>,
    pub veteran_scheme: Option<String>,
    pub prison_scheme: Option<String>,
    pub eligibility_check: Option<String>,
    pub criminal_record_check: Option<String>,
    pub working_for_the_civil_service: Option<String>,
    pub complaints_info: Option<String>,
    pub apply_url: Option<String>,
    pub attachments: Vec<AttachmentView>,
}

impl From<&Job> for JobAdvertView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            summary: non_empty(job.summary.as_deref()),
            description: non_blank(&job.description),
            personal_spec: non_blank(&job.personal_spec),
            benefits: non_empty(job.benefits.as_deref()),
            contact_name: non_empty(job.contact_name.as_deref()),
            contact_email: non_empty(job.contact_email.as_deref()),
            recruitment_email: non_blank(&job.recruitment_email),
            apply_detail: non_blank(&job.apply_detail),
            nationality_requirement: non_empty(job.nationality_requirement.as_deref()),
            disability_confident: non_empty(job.disability_confident.as_deref()),
            diversity_statement: non_empty(job.diversity_statement.as_deref()),
            veteran_scheme: non_empty(job.veteran_scheme.as_deref()),
            prison_scheme: non_empty(job.prison_scheme.as_deref()),
            eligibility_check: non_empty(job.eligibility_check.as_deref()),
            criminal_record_check: non_empty(job.criminal_record_check.as_deref()),
            working_for_the_civil_service: non_empty(
                job.working_for_the_civil_service.as_deref(),
            ),
            complaints_info: non_empty(job.complaints_info.as_deref()),
            apply_url: job.apply_url.as_ref().map(|url| url.to_string()),
            attachments: job.attachments.iter().map(AttachmentView::from).collect(),
        }
    }
}

/// Fields a job alert subscription is keyed on. Classifications are always
/// closed values so subscriptions match on a known label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAlertView {
    pub id: String,
    pub title: String,
    pub organisation: String,
    pub location: String,
    pub contract_type: String,
    pub profession: String,
    pub dc_status: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub currency: Option<String>,
}

impl From<&Job> for JobAlertView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            organisation: job.organisation.clone(),
            location: format_location_display(&job.location),
            contract_type: job.assignment_type.effective().to_string(),
            profession: job.profession.effective().to_string(),
            dc_status: job.dc_status.as_ref().map(ToString::to_string),
            salary_min: job.salary.as_ref().map(|salary| salary.minimum),
            salary_max: job.salary.as_ref().and_then(|salary| salary.maximum),
            currency: job
                .salary
                .as_ref()
                .and_then(|salary| non_blank(&salary.currency)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationView {
    pub fn new(current_page: usize, total_pages: usize, total_results: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_results,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPageView {
    pub jobs: Vec<JobCardView>,
    pub pagination: PaginationView,
    pub query: Option<String>,
}

impl From<&JobSearchResponse> for ResultsPageView {
    fn from(response: &JobSearchResponse) -> Self {
        Self {
            jobs: response.results.iter().map(JobCardView::from).collect(),
            pagination: PaginationView::new(response.page, response.total_pages, response.total),
            query: non_empty(response.query.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Query parameter the group's values are sent back under.
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    fn tally<'a>(key: &str, label: &str, values: impl Iterator<Item = &'a str>) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values.filter(|value| !value.is_empty()) {
            *counts.entry(value).or_default() += 1;
        }
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: counts
                .into_iter()
                .map(|(value, count)| FilterOption {
                    value: value.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Facets over a job set, values sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersView {
    pub groups: Vec<FilterGroup>,
}

impl FiltersView {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        Self {
            groups: vec![
                FilterGroup::tally(
                    "profession",
                    "Profession",
                    jobs.iter().map(|job| job.profession.as_str()),
                ),
                FilterGroup::tally(
                    "assignment_type",
                    "Contract type",
                    jobs.iter().map(|job| job.assignment_type.as_str()),
                ),
                FilterGroup::tally("grade", "Grade", jobs.iter().map(|job| job.grade.as_str())),
            ],
        }
    }
}
