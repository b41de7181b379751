pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod utils;

use crate::repositories::{
    application_repository::ApplicationRepository, job_repository::JobRepository,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_repository: JobRepository,
    pub application_repository: ApplicationRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let job_repository = JobRepository::new(pool.clone());
        let application_repository = ApplicationRepository::new(pool.clone());

        Self {
            pool,
            job_repository,
            application_repository,
        }
    }
}
