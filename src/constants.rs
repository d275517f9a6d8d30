use std::time::Duration;

// Live version query
pub const VERSION_QUERY_TIMEOUT: Duration = Duration::from_secs(1);

// Configuration file name
pub const CONFIG_FILENAME: &str = "pachctl.yaml";

// Default pachd address (host:port)
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:30650";
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_IMAGE_REGISTRY: &str = "pachyderm";

// Port forwarding: local defaults and the ports the cluster components listen on
pub const DEFAULT_PACHD_LOCAL_PORT: u16 = 30650;
pub const DEFAULT_UI_LOCAL_PORT: u16 = 38080;
pub const DEFAULT_UI_WEBSOCKET_LOCAL_PORT: u16 = 38081;
pub const PACHD_REMOTE_PORT: u16 = 650;
pub const UI_REMOTE_PORT: u16 = 8080;
pub const UI_WEBSOCKET_REMOTE_PORT: u16 = 8081;
pub const PACHD_SELECTOR: &str = "app=pachd";
pub const DASH_SELECTOR: &str = "app=dash";

// Migration job
pub const MIGRATION_JOB_NAME: &str = "pach-migration";
pub const MIGRATION_CONTAINER_NAME: &str = "migration";
pub const MIGRATION_LABEL_KEY: &str = "suite";
pub const MIGRATION_LABEL_VALUE: &str = "pachyderm";
pub const PACHD_COMPONENT: &str = "pachd";
pub const PACHD_BINARY: &str = "/pachd";

// External tools
pub const KUBECTL: &str = "kubectl";

// Version table layout
pub const TABLE_MIN_WIDTH: usize = 20;
pub const TABLE_PADDING: usize = 3;
