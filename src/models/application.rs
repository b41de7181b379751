use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user having applied to a job. The `(username, job_id)` pair is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Application {
    pub username: String,
    pub job_id: i32,
}
