use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An open position applicants can apply for.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub hourly_rate: Decimal,
    pub tips: bool,
    pub requires_drivers_license: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Interview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Interview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown application status: {}", s))
    }
}

/// Form fields submitted with an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantInfo {
    pub full_name: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub drivers_license: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub why_join: String,
    /// Name of the attached resume, if any. The file itself is not stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
}

impl ApplicantInfo {
    /// Required form fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("fullName", &self.full_name),
            ("age", &self.age),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect()
    }

    /// True when `job` needs a driver's license and none was given.
    pub fn lacks_license_for(&self, job: &JobListing) -> bool {
        job.requires_drivers_license && self.drivers_license.trim().is_empty()
    }
}

/// Payload for creating a new application.
#[derive(Debug)]
pub struct ApplicationCreate {
    pub job_id: String,
    pub job_title: String,
    pub applicant_info: ApplicantInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub applicant_info: ApplicantInfo,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}
