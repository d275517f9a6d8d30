//! Cluster state migration, run as a one-off Kubernetes job.

pub mod dispatch;
pub mod job;
pub mod submit;

pub use dispatch::{MigrationOptions, dispatch};
pub use job::{JobArtifact, JobDescription, MigrationRequest, image_reference};
pub use submit::{JobSubmitter, KubectlSubmitter};
