use serde::{Deserialize, Serialize};

use crate::models::application::{ApplicationStatus, HrContact, JobApplication};
use crate::models::vacancy::BusyType;

/// Applicant's application list entry. No status or interview fields here;
/// those only exist on the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationListItem {
    pub application_id: i64,
    pub vacancy_id: i64,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub busy_type: BusyType,
    pub hr: HrContact,
}

impl From<JobApplicationListItem> for JobApplication {
    fn from(dto: JobApplicationListItem) -> Self {
        JobApplication {
            application_id: dto.application_id,
            vacancy_id: dto.vacancy_id,
            name: dto.name,
            region: dto.region,
            busy_type: dto.busy_type,
            hr: dto.hr,
            status: None,
            interview_link: None,
            interview_recommendation: None,
        }
    }
}

/// Application detail. The endpoint is addressed by vacancy id and does not
/// echo it back, so the conversion takes it from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationDetail {
    pub application_id: i64,
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub busy_type: BusyType,
    pub hr: HrContact,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub interview_link: Option<String>,
    #[serde(default)]
    pub interview_recommendation: Option<String>,
}

impl JobApplicationDetail {
    pub fn into_application(self, vacancy_id: i64) -> JobApplication {
        JobApplication {
            application_id: self.application_id,
            vacancy_id,
            name: self.name,
            region: self.region,
            busy_type: self.busy_type,
            hr: self.hr,
            status: Some(self.status),
            interview_link: self.interview_link,
            interview_recommendation: self.interview_recommendation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewLinkResponse {
    #[serde(default)]
    pub interview_link: Option<String>,
}
