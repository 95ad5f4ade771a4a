// Execution module: jobs that carry out provider orders

pub mod models;
pub mod repositories;

pub use models::{Job, JobState, JobType};
pub use repositories::{InMemoryJobRepository, JobRepository};
