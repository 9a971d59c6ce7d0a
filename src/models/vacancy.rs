use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    Active,
    Inactive,
    Closed,
}

impl VacancyStatus {
    /// Statuses hidden from the applicant-facing vacancy feed.
    pub fn is_hidden_from_applicants(&self) -> bool {
        matches!(self, VacancyStatus::Closed | VacancyStatus::Inactive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferType {
    #[serde(rename = "TK")]
    Tk,
    #[serde(rename = "GPH")]
    Gph,
    #[serde(rename = "IP")]
    Ip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BusyType {
    AllTime,
    ProjectTime,
}

/// One vacancy as the store caches it. The wire carries two narrower shapes
/// (the HR summary with response counters and the applicant detail with the
/// offer fields); both converge here, which is why most fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub vacancy_id: i64,
    pub name: String,
    pub status: VacancyStatus,
    pub department: String,
    pub date: DateTime<Utc>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub offer_type: Option<OfferType>,
    pub busy_type: Option<BusyType>,
    pub graph: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub annual_bonus: Option<Decimal>,
    pub bonus_type: Option<String>,
    pub description: Option<String>,
    pub exp: Option<i32>,
    pub responses: Option<i64>,
    pub responses_without: Option<i64>,
}
