pub mod application;
pub mod equity;
pub mod job;
