use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::application::ApplicationStatus;
use crate::models::vacancy::{BusyType, OfferType, Vacancy, VacancyStatus};

/// HR vacancy list entry: the management view with response counters and
/// none of the offer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrVacancySummary {
    pub vacancy_id: i64,
    pub name: String,
    pub status: VacancyStatus,
    pub department: String,
    pub responses: i64,
    pub responses_without: i64,
    pub date: DateTime<Utc>,
}

impl From<HrVacancySummary> for Vacancy {
    fn from(dto: HrVacancySummary) -> Self {
        Vacancy {
            vacancy_id: dto.vacancy_id,
            name: dto.name,
            status: dto.status,
            department: dto.department,
            date: dto.date,
            region: None,
            city: None,
            address: None,
            offer_type: None,
            busy_type: None,
            graph: None,
            salary_min: None,
            salary_max: None,
            annual_bonus: None,
            bonus_type: None,
            description: None,
            exp: None,
            responses: Some(dto.responses),
            responses_without: Some(dto.responses_without),
        }
    }
}

/// Applicant-facing vacancy: full offer card, no counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantVacancy {
    pub vacancy_id: i64,
    pub name: String,
    pub status: VacancyStatus,
    pub department: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub offer_type: Option<OfferType>,
    #[serde(default)]
    pub busy_type: Option<BusyType>,
    #[serde(default)]
    pub graph: Option<String>,
    #[serde(default)]
    pub salary_min: Option<Decimal>,
    #[serde(default)]
    pub salary_max: Option<Decimal>,
    #[serde(default)]
    pub annual_bonus: Option<Decimal>,
    #[serde(default)]
    pub bonus_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exp: Option<i32>,
}

impl From<ApplicantVacancy> for Vacancy {
    fn from(dto: ApplicantVacancy) -> Self {
        Vacancy {
            vacancy_id: dto.vacancy_id,
            name: dto.name,
            status: dto.status,
            department: dto.department,
            date: dto.date,
            region: dto.region,
            city: dto.city,
            address: dto.address,
            offer_type: dto.offer_type,
            busy_type: dto.busy_type,
            graph: dto.graph,
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            annual_bonus: dto.annual_bonus,
            bonus_type: dto.bonus_type,
            description: dto.description,
            exp: dto.exp,
            responses: None,
            responses_without: None,
        }
    }
}

/// One row of the HR "responses" table inside the vacancy detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrApplicationSummary {
    pub applicant_id: i64,
    pub name: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub soft: Option<f64>,
    #[serde(default)]
    pub tech: Option<f64>,
    #[serde(default)]
    pub salary: Option<f64>,
    pub contacts: String,
    #[serde(default)]
    pub sum_grade: Option<f64>,
}

/// HR vacancy detail: the vacancy card plus its responses table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrVacancyDetail {
    #[serde(flatten)]
    pub vacancy: ApplicantVacancy,
    #[serde(default)]
    pub responses: Vec<HrApplicationSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyStatusUpdateRequest {
    pub status: VacancyStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyStatusUpdateResponse {
    pub vacancy_id: i64,
    pub status: VacancyStatus,
}
