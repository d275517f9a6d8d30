// Integration tests for pachctl

pub mod cli;
pub mod helpers;
