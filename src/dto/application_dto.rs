use serde::{Deserialize, Serialize};

use crate::models::application::Application;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedResponse {
    pub applied: i32,
}

impl From<Application> for AppliedResponse {
    fn from(value: Application) -> Self {
        Self {
            applied: value.job_id,
        }
    }
}
