use crate::shared::config::Config;
use crate::shared::introspection::{get_registry, EntityRegistry, IntrospectionOptions};

/// Shared state of the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub origin_system_name: String,
    pub options: IntrospectionOptions,
    pub registry: &'static EntityRegistry,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            origin_system_name: config.introspection.origin_system_name().to_string(),
            options: config.introspection.options(),
            registry: get_registry(),
            expose_error_details: config.server.expose_error_details,
        }
    }
}
