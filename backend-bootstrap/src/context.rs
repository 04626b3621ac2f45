use std::sync::Arc;

use anyhow::Result;
use clickhouse::Client;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::ports::{EventRepository, ReferenceRepository};
use backend_infrastructure::{
    seed_demo_data, AppConfig, ClickhouseStore, MemoryStore, STORAGE_MEMORY,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let (event_repo, reference_repo): (
            Arc<dyn EventRepository>,
            Arc<dyn ReferenceRepository>,
        ) = if config.storage == STORAGE_MEMORY {
            info!("using in-memory storage, nothing survives a restart");
            let store = Arc::new(MemoryStore::new());
            (store.clone(), store)
        } else {
            let db_config = config.to_db_config();
            let mut clickhouse = Client::default()
                .with_url(&db_config.clickhouse_url)
                .with_database(&db_config.clickhouse_database);
            if let Some(user) = &db_config.clickhouse_user {
                clickhouse = clickhouse.with_user(user);
            }
            if let Some(password) = &db_config.clickhouse_password {
                clickhouse = clickhouse.with_password(password);
            }

            let store = Arc::new(ClickhouseStore::new(
                clickhouse,
                db_config.clickhouse_database.clone(),
            ));
            store.ensure_schema().await?;
            (store.clone(), store)
        };

        if config.seed_demo_data {
            seed_demo_data(reference_repo.as_ref()).await?;
        }

        let state = AppState {
            config: runtime_config,
            event_repo,
            reference_repo,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
