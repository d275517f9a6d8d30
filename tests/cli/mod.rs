/// End-to-end tests that run the real binary through assert_cmd.
///
/// None of these need a cluster: pachd is pointed at an unreachable address
/// and kubectl is hidden from PATH where a test would otherwise spawn it.
pub mod admin_commands;
pub mod config_file;
pub mod interrupt;
pub mod root;
