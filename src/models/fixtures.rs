//! Sample records shared by unit tests.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::dto::contract_dto::{ContractAttachment, ContractJob, ContractLocation, ContractSalary};
use crate::models::{
    Approach, AssignmentType, FixedLocation, Grade, Job, JobAttachment, JobLocation,
    OverseasLocation, Profession, Salary,
};

pub fn software_engineer() -> Job {
    Job {
        id: "test-job-001".into(),
        external_id: None,
        approach: Approach::External,
        title: "Senior Software Engineer".into(),
        description: "We are looking for an experienced software engineer to join our team.".into(),
        organisation: "Government Digital Service".into(),
        location: vec![JobLocation::Fixed(FixedLocation {
            pao_text: Some("10 Whitechapel High Street".into()),
            town_name: Some("London".into()),
            post_town: Some("London".into()),
            postcode: Some("E1 8QS".into()),
            latitude: Some(51.5155),
            longitude: Some(-0.0742),
            formatted_address: Some("10 Whitechapel High Street, London, E1 8QS".into()),
            ..FixedLocation::default()
        })],
        grade: Grade::Grade7,
        assignment_type: AssignmentType::Permanent,
        personal_spec: "Strong Rust skills required.".into(),
        apply_detail: "Apply online via Civil Service Jobs.".into(),
        closing_date: Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap(),
        profession: Profession::DigitalAndData,
        recruitment_email: "recruitment@gds.gov.uk".into(),
        contact_name: Some("Jane Smith".into()),
        contact_email: Some("jane.smith@gds.gov.uk".into()),
        contact_phone: None,
        nationality_requirement: None,
        summary: Some("Exciting opportunity to work on government digital services.".into()),
        apply_url: None,
        benefits: Some("Civil Service pension, flexible working, learning budget.".into()),
        salary: Some(Salary {
            minimum: Decimal::from(55000),
            maximum: Some(Decimal::from(65000)),
            currency: "GBP".into(),
            currency_symbol: Some("£".into()),
            salary_details: Some("Plus excellent benefits package".into()),
        }),
        job_numbers: Some(2),
        success_profile_details: None,
        diversity_statement: Some("We are committed to diversity and inclusion.".into()),
        disability_confident: None,
        dc_status: None,
        redeployment_scheme: None,
        prison_scheme: None,
        veteran_scheme: None,
        criminal_record_check: None,
        complaints_info: None,
        working_for_the_civil_service: None,
        eligibility_check: None,
        attachments: vec![JobAttachment {
            href: "https://example.com/role-profile.pdf".into(),
            doc_name: "Role Profile".into(),
            doc_format: "pdf".into(),
            file_size: Some("100 kb".into()),
        }],
    }
}

pub fn embassy_manager() -> Job {
    Job {
        id: "test-overseas-001".into(),
        title: "Embassy Operations Manager".into(),
        description: "Manage embassy operations in Paris.".into(),
        organisation: "Foreign, Commonwealth & Development Office".into(),
        location: vec![JobLocation::Overseas(OverseasLocation {
            country_name: "France".into(),
            country_code: "FR".into(),
            location_display: Some("British Embassy, Paris".into()),
        })],
        personal_spec: "French language skills required.".into(),
        apply_detail: "Apply via FCDO careers portal.".into(),
        closing_date: Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap(),
        profession: Profession::OperationalDelivery,
        recruitment_email: "recruitment@fco.gov.uk".into(),
        contact_name: None,
        contact_email: None,
        summary: None,
        benefits: None,
        salary: Some(Salary {
            minimum: Decimal::from(58000),
            maximum: None,
            currency: "EUR".into(),
            currency_symbol: Some("€".into()),
            salary_details: None,
        }),
        job_numbers: None,
        diversity_statement: None,
        attachments: Vec::new(),
        ..software_engineer()
    }
}

pub fn policy_advisor() -> Job {
    Job {
        id: "test-no-salary-001".into(),
        approach: Approach::Internal,
        title: "Policy Advisor".into(),
        description: "Develop policy for the department.".into(),
        organisation: "Ministry of Defence".into(),
        location: vec![JobLocation::Fixed(FixedLocation {
            town_name: Some("Bristol".into()),
            post_town: Some("Bristol".into()),
            postcode: Some("BS2 0EL".into()),
            formatted_address: Some("Bristol, BS2 0EL".into()),
            ..FixedLocation::default()
        })],
        grade: Grade::Other("Grade 6".into()),
        assignment_type: AssignmentType::FixedTermAppointment,
        personal_spec: "Policy experience required.".into(),
        apply_detail: "Apply via Civil Service Jobs.".into(),
        closing_date: Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap(),
        profession: Profession::Policy,
        recruitment_email: "recruitment@mod.gov.uk".into(),
        contact_name: None,
        contact_email: None,
        summary: None,
        benefits: None,
        salary: None,
        job_numbers: None,
        diversity_statement: None,
        attachments: Vec::new(),
        ..software_engineer()
    }
}

pub fn contract_software_engineer() -> ContractJob {
    ContractJob {
        job_id: "test-job-001".into(),
        approach_type: "EXTERNAL".into(),
        job_title: "Senior Software Engineer".into(),
        job_description: "We are looking for an experienced software engineer to join our team."
            .into(),
        organisation_name: "Government Digital Service".into(),
        locations: vec![ContractLocation {
            location_type: "uk".into(),
            pao_text: Some("10 Whitechapel High Street".into()),
            town_name: Some("London".into()),
            post_town: Some("London".into()),
            postcode: Some("E1 8QS".into()),
            latitude: Some(51.5155),
            longitude: Some(-0.0742),
            formatted_address: Some("10 Whitechapel High Street, London, E1 8QS".into()),
            ..ContractLocation::default()
        }],
        grade_level: "Grade 7 Equivalent".into(),
        assignment_type: "PERMANENT".into(),
        personal_specification: "Strong Rust skills required.".into(),
        application_details: "Apply online via Civil Service Jobs.".into(),
        closing_date: "2025-12-31T23:59:59.000Z".into(),
        profession_type: "Digital and Data".into(),
        recruitment_email: "recruitment@gds.gov.uk".into(),
        contact_name: Some("Jane Smith".into()),
        contact_email: Some("jane.smith@gds.gov.uk".into()),
        job_summary: Some("Exciting opportunity to work on government digital services.".into()),
        application_url: Some("https://www.civilservicejobs.service.gov.uk/apply/001".into()),
        benefits_description: Some("Civil Service pension, flexible working, learning budget.".into()),
        salary_info: Some(ContractSalary {
            min_amount: Decimal::from(55000),
            max_amount: Some(Decimal::from(65000)),
            currency_code: "GBP".into(),
            currency_symbol: Some("£".into()),
            additional_details: Some("Plus excellent benefits package".into()),
        }),
        number_of_positions: Some(2),
        diversity_statement: Some("We are committed to diversity and inclusion.".into()),
        dc_status_level: Some("LEADER".into()),
        job_attachments: Some(vec![ContractAttachment {
            url: "https://example.com/role-profile.pdf".into(),
            document_name: "Role Profile".into(),
            document_format: "pdf".into(),
            file_size_bytes: Some(102_400),
        }]),
        ..ContractJob::default()
    }
}

pub fn contract_embassy_manager() -> ContractJob {
    ContractJob {
        job_id: "test-overseas-001".into(),
        job_title: "Embassy Operations Manager".into(),
        job_description: "Manage embassy operations in Paris.".into(),
        organisation_name: "Foreign, Commonwealth & Development Office".into(),
        locations: vec![ContractLocation {
            location_type: "overseas".into(),
            country_name: Some("France".into()),
            country_code: Some("FR".into()),
            location_display: Some("British Embassy, Paris".into()),
            ..ContractLocation::default()
        }],
        closing_date: "2026-01-31T23:59:59.000Z".into(),
        profession_type: "Operational Delivery".into(),
        recruitment_email: "recruitment@fco.gov.uk".into(),
        salary_info: Some(ContractSalary {
            min_amount: Decimal::from(58000),
            max_amount: None,
            currency_code: "EUR".into(),
            currency_symbol: Some("€".into()),
            additional_details: None,
        }),
        application_url: None,
        job_attachments: None,
        dc_status_level: None,
        ..contract_software_engineer()
    }
}
