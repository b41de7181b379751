use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::database::columns::JOB_COLUMNS;
use crate::database::filter::{build_filter, FilterColumns, FilterCriteria};
use crate::database::partial_update::sql_for_partial_update;
use crate::database::value::{bind_all, SqlValue};
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;

const JOB_FILTER_COLUMNS: FilterColumns = FilterColumns {
    text: "title",
    numeric: "salary",
    flag: "equity",
};

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a job under an existing company.
    ///
    /// The company lookup ignores case and the stored handle is what gets
    /// written. The duplicate-title check only improves the error message;
    /// the `(title, company_handle)` unique constraint is what enforces it.
    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let company_handle = self
            .find_company_handle(&payload.company_handle)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("Company not found: {}", payload.company_handle))
            })?;

        let duplicate = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM jobs WHERE title = $1 AND company_handle = $2",
        )
        .bind(&payload.title)
        .bind(&company_handle)
        .fetch_optional(&self.pool)
        .await?;
        if duplicate.is_some() {
            return Err(Error::Conflict(format!("Duplicate job: {}", payload.title)));
        }

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            JOB_COLUMNS.select_list()
        );
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(&payload.title)
            .bind(payload.salary)
            .bind(payload.equity)
            .bind(&company_handle)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match Error::from(e) {
                Error::Conflict(_) => {
                    warn!(title = %payload.title, company = %company_handle, "job insert lost a uniqueness race");
                    Error::Conflict(format!("Duplicate job: {}", payload.title))
                }
                other => other,
            })?;

        info!(job_id = job.id, company = %job.company_handle, "Created job");
        Ok(job)
    }

    /// Lists jobs matching `filters`; no criteria returns every job.
    pub async fn find_all(&self, filters: &FilterCriteria) -> Result<Vec<Job>> {
        let clause = build_filter(filters, &JOB_FILTER_COLUMNS);
        let sql = format!(
            "SELECT {} FROM jobs {}",
            JOB_COLUMNS.select_list(),
            clause.where_clause
        );
        debug!(%sql, params = clause.params.len(), "Listing jobs");

        let jobs = bind_all(sqlx::query_as::<_, Job>(&sql), clause.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn get(&self, id: i32) -> Result<Job> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS.select_list());
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("No job: {}", id)))
    }

    /// Applies a partial update and returns the merged job.
    ///
    /// A new company handle is resolved the same way as on create.
    pub async fn update(&self, id: i32, mut payload: UpdateJobPayload) -> Result<Job> {
        if let Some(handle) = payload.company_handle.take() {
            let canonical = self
                .find_company_handle(&handle)
                .await?
                .ok_or_else(|| Error::NotFound(format!("Company not found: {}", handle)))?;
            payload.company_handle = Some(canonical);
        }

        let clause = sql_for_partial_update(payload.into_fields(), &JOB_COLUMNS)?;
        let id_placeholder = clause.next_placeholder();
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            clause.set_cols,
            id_placeholder,
            JOB_COLUMNS.select_list()
        );
        debug!(%sql, job_id = id, "Updating job");

        let mut values = clause.values;
        values.push(SqlValue::Int(Some(id)));
        let job = bind_all(sqlx::query_as::<_, Job>(&sql), values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("No job: {}", id)))?;

        info!(job_id = job.id, "Updated job");
        Ok(job)
    }

    pub async fn remove(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No job: {}", id)));
        }

        info!(job_id = id, "Removed job");
        Ok(())
    }

    async fn find_company_handle(&self, handle: &str) -> Result<Option<String>> {
        let handle = sqlx::query_scalar::<_, String>(
            "SELECT handle FROM companies WHERE LOWER(handle) = LOWER($1)",
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;
        Ok(handle)
    }
}
