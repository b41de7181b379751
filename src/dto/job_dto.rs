use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::database::filter::FilterCriteria;
use crate::database::value::SqlValue;
use crate::models::equity::Equity;
use crate::models::job::Job;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0))]
    pub salary: Option<i32>,
    pub equity: Option<Equity>,
    #[serde(alias = "company_handle")]
    #[validate(length(min = 1, max = 25))]
    pub company_handle: String,
}

/// PATCH body for a job. Absent keys are left alone; `salary` and `equity`
/// distinguish an explicit `null` (clear the column) from absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_update_salary"))]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub equity: Option<Option<Equity>>,
    #[serde(alias = "company_handle")]
    #[validate(length(min = 1, max = 25))]
    pub company_handle: Option<String>,
}

impl UpdateJobPayload {
    /// Fields to write, keyed by API field name, in a fixed order.
    pub fn into_fields(self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::new();
        if let Some(title) = self.title {
            fields.push(("title", SqlValue::from(title)));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::from(salary)));
        }
        if let Some(equity) = self.equity {
            fields.push(("equity", SqlValue::Decimal(equity.map(Decimal::from))));
        }
        if let Some(company_handle) = self.company_handle {
            fields.push(("companyHandle", SqlValue::from(company_handle)));
        }
        fields
    }
}

fn validate_update_salary(payload: &UpdateJobPayload) -> Result<(), ValidationError> {
    match payload.salary {
        Some(Some(salary)) if salary < 0 => Err(ValidationError::new("salary_negative")),
        _ => Ok(()),
    }
}

/// Maps a present key (even `null`) to `Some`, leaving absence to `#[serde(default)]`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `GET /jobs` query string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct JobSearchQuery {
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub min_salary: Option<i32>,
    pub has_equity: Option<String>,
}

impl From<JobSearchQuery> for FilterCriteria {
    fn from(value: JobSearchQuery) -> Self {
        Self {
            text_contains: value.title.filter(|t| !t.is_empty()),
            min_numeric: value.min_salary,
            flag_present: value
                .has_equity
                .filter(|flag| flag == "true")
                .map(|_| true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: i32,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self { job }
    }
}

impl From<Vec<Job>> for JobListResponse {
    fn from(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }
}
