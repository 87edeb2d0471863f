//! Closed job classifications.
//!
//! Every enumeration deserializes from either the upstream wire code
//! (`ACROSS_GOVERNMENT`) or the display label (`Across Government`) and always
//! serializes to the display label. Values outside the known set are kept in
//! an `Unrecognized` variant instead of being replaced, so the raw value stays
//! visible in logs and responses.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Approach {
    Internal,
    AcrossGovernment,
    External,
    Unrecognized(String),
}

impl Approach {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "INTERNAL" | "Internal" => Approach::Internal,
            "ACROSS_GOVERNMENT" | "Across Government" => Approach::AcrossGovernment,
            "EXTERNAL" | "External" => Approach::External,
            other => Approach::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Approach::Internal => "Internal",
            Approach::AcrossGovernment => "Across Government",
            Approach::External => "External",
            Approach::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Approach::Unrecognized(_))
    }

    /// Closed value to use when an unrecognized approach must still be acted on.
    pub fn effective(&self) -> Approach {
        match self {
            Approach::Unrecognized(_) => Approach::External,
            known => known.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignmentType {
    Apprentice,
    FixedTermAppointment,
    Loan,
    Secondment,
    Permanent,
    Unrecognized(String),
}

impl AssignmentType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "APPRENTICE" | "Apprentice" => AssignmentType::Apprentice,
            "FIXED_TERM" | "Fixed Term Appointment (FTA)" => AssignmentType::FixedTermAppointment,
            "LOAN" | "Loan" => AssignmentType::Loan,
            "SECONDMENT" | "Secondment" => AssignmentType::Secondment,
            "PERMANENT" | "Permanent" => AssignmentType::Permanent,
            other => AssignmentType::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssignmentType::Apprentice => "Apprentice",
            AssignmentType::FixedTermAppointment => "Fixed Term Appointment (FTA)",
            AssignmentType::Loan => "Loan",
            AssignmentType::Secondment => "Secondment",
            AssignmentType::Permanent => "Permanent",
            AssignmentType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AssignmentType::Unrecognized(_))
    }

    pub fn effective(&self) -> AssignmentType {
        match self {
            AssignmentType::Unrecognized(_) => AssignmentType::Permanent,
            known => known.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Profession {
    Actuary,
    Commercial,
    Communications,
    CorporateFinance,
    CounterFraud,
    DigitalAndData,
    Economics,
    Finance,
    Geography,
    HumanResources,
    IntelligenceAnalysis,
    InternalAudit,
    InternationalTrade,
    KnowledgeAndInformationManagement,
    Legal,
    Clinical,
    OccupationalPsychology,
    OperationalDelivery,
    OperationalResearch,
    Planning,
    PlanningInspection,
    Policy,
    ProjectDelivery,
    Property,
    RiskManagement,
    ScienceAndEngineering,
    Security,
    SocialResearch,
    Statistics,
    Tax,
    Veterinary,
    Unrecognized(String),
}

impl Profession {
    pub const ALL: [Profession; 31] = [
        Profession::Actuary,
        Profession::Commercial,
        Profession::Communications,
        Profession::CorporateFinance,
        Profession::CounterFraud,
        Profession::DigitalAndData,
        Profession::Economics,
        Profession::Finance,
        Profession::Geography,
        Profession::HumanResources,
        Profession::IntelligenceAnalysis,
        Profession::InternalAudit,
        Profession::InternationalTrade,
        Profession::KnowledgeAndInformationManagement,
        Profession::Legal,
        Profession::Clinical,
        Profession::OccupationalPsychology,
        Profession::OperationalDelivery,
        Profession::OperationalResearch,
        Profession::Planning,
        Profession::PlanningInspection,
        Profession::Policy,
        Profession::ProjectDelivery,
        Profession::Property,
        Profession::RiskManagement,
        Profession::ScienceAndEngineering,
        Profession::Security,
        Profession::SocialResearch,
        Profession::Statistics,
        Profession::Tax,
        Profession::Veterinary,
    ];

    /// Professions arrive as display labels only; there is no wire code table.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::ALL
            .iter()
            .find(|known| known.as_str() == trimmed)
            .cloned()
            .unwrap_or_else(|| Profession::Unrecognized(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Profession::Actuary => "Actuary",
            Profession::Commercial => "Commercial",
            Profession::Communications => "Communications",
            Profession::CorporateFinance => "Corporate Finance",
            Profession::CounterFraud => "Counter Fraud",
            Profession::DigitalAndData => "Digital and Data",
            Profession::Economics => "Economics",
            Profession::Finance => "Finance",
            Profession::Geography => "Geography",
            Profession::HumanResources => "Human Resources",
            Profession::IntelligenceAnalysis => "Intelligence Analysis",
            Profession::InternalAudit => "Internal Audit",
            Profession::InternationalTrade => "International Trade",
            Profession::KnowledgeAndInformationManagement => "Knowledge and Information Management",
            Profession::Legal => "Legal",
            Profession::Clinical => "Clinical",
            Profession::OccupationalPsychology => "Occupational Psychology",
            Profession::OperationalDelivery => "Operational Delivery",
            Profession::OperationalResearch => "Operational Research",
            Profession::Planning => "Planning",
            Profession::PlanningInspection => "Planning Inspection",
            Profession::Policy => "Policy",
            Profession::ProjectDelivery => "Project Delivery",
            Profession::Property => "Property",
            Profession::RiskManagement => "Risk Management",
            Profession::ScienceAndEngineering => "Science and Engineering",
            Profession::Security => "Security",
            Profession::SocialResearch => "Social Research",
            Profession::Statistics => "Statistics",
            Profession::Tax => "Tax",
            Profession::Veterinary => "Veterinary",
            Profession::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Profession::Unrecognized(_))
    }

    pub fn effective(&self) -> Profession {
        match self {
            Profession::Unrecognized(_) => Profession::Policy,
            known => known.clone(),
        }
    }
}

/// Grades are open: anything outside the standard equivalence labels
/// (e.g. "Grade 7") is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    Scs4,
    Scs3,
    Scs2,
    Scs1,
    Grade6,
    Grade7,
    Seo,
    Heo,
    Eo,
    Ao,
    Aa,
    Other(String),
}

impl Grade {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Senior Civil Service - Permanent Secretary" => Grade::Scs4,
            "Senior Civil Service - Director General (PB3)" => Grade::Scs3,
            "Senior Civil Service - Director (PB2)" => Grade::Scs2,
            "Senior Civil Service - Deputy Director (PB1/1A)" => Grade::Scs1,
            "Grade 6 Equivalent" => Grade::Grade6,
            "Grade 7 Equivalent" => Grade::Grade7,
            "Senior Executive Officer (SEO) Equivalent" => Grade::Seo,
            "Higher Executive Officer (HEO) Equivalent" => Grade::Heo,
            "Executive Officer (EO) Equivalent" => Grade::Eo,
            "Administrative Officer (AO) Equivalent" => Grade::Ao,
            "Administrative Assistant (AA) Equivalent" => Grade::Aa,
            other => Grade::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Grade::Scs4 => "Senior Civil Service - Permanent Secretary",
            Grade::Scs3 => "Senior Civil Service - Director General (PB3)",
            Grade::Scs2 => "Senior Civil Service - Director (PB2)",
            Grade::Scs1 => "Senior Civil Service - Deputy Director (PB1/1A)",
            Grade::Grade6 => "Grade 6 Equivalent",
            Grade::Grade7 => "Grade 7 Equivalent",
            Grade::Seo => "Senior Executive Officer (SEO) Equivalent",
            Grade::Heo => "Higher Executive Officer (HEO) Equivalent",
            Grade::Eo => "Executive Officer (EO) Equivalent",
            Grade::Ao => "Administrative Officer (AO) Equivalent",
            Grade::Aa => "Administrative Assistant (AA) Equivalent",
            Grade::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DcStatus {
    Committed,
    Employer,
    Leader,
    Unrecognized(String),
}

impl DcStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "COMMITTED" | "Committed" => DcStatus::Committed,
            "EMPLOYER" | "Disability Confident Employer" => DcStatus::Employer,
            "LEADER" | "Disability Confident Leader" => DcStatus::Leader,
            other => DcStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DcStatus::Committed => "Committed",
            DcStatus::Employer => "Disability Confident Employer",
            DcStatus::Leader => "Disability Confident Leader",
            DcStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, DcStatus::Unrecognized(_))
    }
}

macro_rules! label_conversions {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(raw: String) -> Self {
                    $ty::parse(&raw)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

label_conversions!(Approach, AssignmentType, Profession, Grade, DcStatus);
