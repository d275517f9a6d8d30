use crate::config::types::*;
use crate::constants::{DEFAULT_ADDRESS, DEFAULT_IMAGE_REGISTRY, DEFAULT_NAMESPACE};

// Config derives Default; the sections below carry the real defaults

impl Default for Cluster {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            metrics: true,
        }
    }
}

impl Default for Migration {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            image_registry: DEFAULT_IMAGE_REGISTRY.to_string(),
        }
    }
}
