use crate::layout::footer::ServiceStatus;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

/// App-wide state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    /// Filled by the footer's status check
    pub service_status: RwSignal<ServiceStatus>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            service_status: RwSignal::new(ServiceStatus::Checking),
        }
    }
}
