use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::equity::Equity;

/// A job posting. Rows are read through `JOB_COLUMNS.select_list()`, which
/// aliases storage columns to these camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Equity>,
    pub company_handle: String,
}
