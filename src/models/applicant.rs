use serde::{Deserialize, Serialize};

use crate::models::application::ApplicationStatus;

/// HR's interview outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongHire,
    Hire,
    NoHire,
}

/// One applicant's review sheet for one vacancy, as the HR detail endpoint
/// returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantReview {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub status: ApplicationStatus,
    pub soft: Option<f64>,
    pub tech: Option<f64>,
    pub salary: Option<f64>,
    pub contacts: String,
    pub sum_grade: Option<f64>,
    pub cv: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
}
