use std::sync::Arc;

use mitigate_config::MitigateConfig;
use mitigate_db::service::MitigateService;

/// Resources shared by every request handler for the life of the process.
pub struct AppState {
    pub service: MitigateService,
    pub config: MitigateConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    #[must_use]
    pub fn new(service: MitigateService, config: MitigateConfig) -> SharedState {
        Arc::new(Self { service, config })
    }
}
