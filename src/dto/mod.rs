pub mod contract_dto;
pub mod job_dto;
pub mod places_dto;
pub mod view_dto;
