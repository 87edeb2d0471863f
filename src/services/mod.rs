pub mod api_provider;
pub mod autocomplete;
pub mod job_provider;
pub mod mock_provider;
pub mod places_service;
pub mod search;
