pub mod application_repository;
pub mod job_repository;
