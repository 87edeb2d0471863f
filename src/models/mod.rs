pub mod attachment;
pub mod classification;
pub mod job;
pub mod location;
pub mod salary;
pub mod search;

#[cfg(test)]
pub(crate) mod fixtures;

pub use attachment::JobAttachment;
pub use classification::{Approach, AssignmentType, DcStatus, Grade, Profession};
pub use job::Job;
pub use location::{FixedLocation, JobLocation, OverseasLocation};
pub use salary::Salary;
pub use search::{JobSearchResponse, SearchFilters};
