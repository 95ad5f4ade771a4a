pub mod job;

pub use job::{Job, JobState, JobType};
