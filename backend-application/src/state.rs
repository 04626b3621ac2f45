use std::sync::Arc;

use backend_domain::ports::{EventRepository, ReferenceRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub reference_repo: Arc<dyn ReferenceRepository>,
    pub metrics: Arc<Metrics>,
}
