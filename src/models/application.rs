use serde::{Deserialize, Serialize};

use crate::models::vacancy::BusyType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationStatus {
    CvReview,
    Interview,
    WaitResult,
    Rejected,
    Approved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrContact {
    pub name: String,
    pub contact: Option<String>,
}

/// A job application as seen by the applicant. The list endpoint omits the
/// status and interview fields; the detail endpoint fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub application_id: i64,
    pub vacancy_id: i64,
    pub name: String,
    pub region: Option<String>,
    pub busy_type: BusyType,
    pub hr: HrContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_recommendation: Option<String>,
}
