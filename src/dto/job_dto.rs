use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::view_dto::{JobAdvertView, JobDetailsView};
use crate::models::{Job, SearchFilters};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct JobListQuery {
    /// Out-of-range pages are clamped, not rejected.
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<usize>,
}

impl JobListQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Filters arrive comma separated (`profession=Policy,Tax`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct JobSearchQuery {
    #[validate(length(max = 200))]
    pub q: Option<String>,
    pub profession: Option<String>,
    pub assignment_type: Option<String>,
    pub grade: Option<String>,
}

impl JobSearchQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            profession: split_list(self.profession.as_deref()),
            assignment_type: split_list(self.assignment_type.as_deref()),
            grade: split_list(self.grade.as_deref()),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetailResponse {
    pub details: JobDetailsView,
    pub advert: JobAdvertView,
}

impl From<&Job> for JobDetailResponse {
    fn from(job: &Job) -> Self {
        Self {
            details: JobDetailsView::from(job),
            advert: JobAdvertView::from(job),
        }
    }
}
