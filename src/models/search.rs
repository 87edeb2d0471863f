use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Exact-match constraints applied on top of a text query. An empty list
/// leaves that field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub profession: Vec<String>,
    pub assignment_type: Vec<String>,
    pub grade: Vec<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.profession.is_empty() && self.assignment_type.is_empty() && self.grade.is_empty()
    }

    pub fn matches(&self, job: &Job) -> bool {
        accepts(&self.profession, job.profession.as_str())
            && accepts(&self.assignment_type, job.assignment_type.as_str())
            && accepts(&self.grade, job.grade.as_str())
    }

    /// `(key, values)` pairs for every non-empty filter, in a stable order.
    pub fn non_empty(&self) -> Vec<(&'static str, &[String])> {
        [
            ("profession", self.profession.as_slice()),
            ("assignmentType", self.assignment_type.as_slice()),
            ("grade", self.grade.as_slice()),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .collect()
    }
}

fn accepts(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|candidate| candidate == value)
}

/// One page of jobs plus the query and filters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub results: Vec<Job>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub query: Option<String>,
    pub applied_filters: Option<SearchFilters>,
}

impl JobSearchResponse {
    /// Zero-total response used when an upstream source cannot be reached.
    pub fn empty(page: usize, page_size: usize) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page,
            page_size,
            total_pages: 0,
            query: None,
            applied_filters: None,
        }
    }
}
