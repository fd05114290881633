//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No contiene estado mutable.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::{VehicleRepository, VehicleStore};
use crate::services::VehicleRecordService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub vehicles: VehicleRecordService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn VehicleStore>) -> Self {
        Self {
            config: Arc::new(config),
            vehicles: VehicleRecordService::new(store),
        }
    }

    /// Estado de producción respaldado por PostgreSQL
    pub fn with_postgres(config: AppConfig) -> Self {
        let repository = VehicleRepository::new(config.database.clone());
        Self::new(config, Arc::new(repository))
    }

    pub fn secret_key(&self) -> &str {
        &self.config.environment.secret_key
    }
}
