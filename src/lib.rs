//! Cluster administration front-end for Pachyderm: version reporting,
//! port forwarding into the cluster, state migration jobs and guarded
//! destructive operations.

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod forward;
pub mod guard;
pub mod logging;
pub mod migration;
pub mod process;
pub mod reconcile;
pub mod registry;
pub mod version;
