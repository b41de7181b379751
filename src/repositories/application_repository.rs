use sqlx::PgPool;
use tracing::{info, warn};

use crate::database::columns::APPLICATION_COLUMNS;
use crate::error::{Error, Result};
use crate::models::application::Application;

#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records that `username` applied to `job_id`.
    ///
    /// User and job existence is left to the foreign keys, which surface as
    /// `Error::NotFound`. Applying twice is `Error::Conflict`.
    pub async fn create(&self, username: &str, job_id: i32) -> Result<Application> {
        if self.exists(username, job_id).await? {
            return Err(Error::Conflict(format!(
                "Application already exists: {}, {}",
                username, job_id
            )));
        }

        let sql = format!(
            "INSERT INTO applications (username, job_id)
             VALUES ($1, $2)
             RETURNING {}",
            APPLICATION_COLUMNS.select_list()
        );
        let application = sqlx::query_as::<_, Application>(&sql)
            .bind(username)
            .bind(job_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match Error::from(e) {
                Error::Conflict(_) => {
                    warn!(%username, job_id, "application insert lost a uniqueness race");
                    Error::Conflict(format!(
                        "Application already exists: {}, {}",
                        username, job_id
                    ))
                }
                Error::NotFound(_) => {
                    Error::NotFound(format!("No user {} or job {}", username, job_id))
                }
                other => other,
            })?;

        info!(%username, job_id, "Created application");
        Ok(application)
    }

    pub async fn exists(&self, username: &str, job_id: i32) -> Result<bool> {
        let found = sqlx::query_scalar::<_, i32>(
            "SELECT job_id FROM applications WHERE username = $1 AND job_id = $2",
        )
        .bind(username)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }
}
