//! Servicio de registros de vehículos
//! 
//! Único mediador entre los handlers y el store. Valida formularios, registra
//! los errores y los devuelve tipados; nunca reintenta.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::dto::VehicleForm;
use crate::models::VehicleView;
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct VehicleRecordService {
    store: Arc<dyn VehicleStore>,
}

impl VehicleRecordService {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    /// Todos los vehículos ordenados por id
    pub async fn list_all(&self) -> AppResult<Vec<VehicleView>> {
        let vehicles = self
            .store
            .list_all()
            .await
            .map_err(|e| log_failure("listar vehículos", e))?;

        debug!("📋 {} vehículos encontrados", vehicles.len());
        Ok(vehicles.into_iter().map(VehicleView::from).collect())
    }

    /// `Ok(None)` cuando el id no existe
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<VehicleView>> {
        let vehicle = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| log_failure(&format!("buscar vehículo {}", id), e))?;

        Ok(vehicle.map(VehicleView::from))
    }

    pub async fn create(&self, form: VehicleForm) -> AppResult<i32> {
        let fields = form.into_fields().map_err(|e| {
            warn!("⚠️ Formulario de vehículo rechazado: {}", e);
            e
        })?;

        let id = self
            .store
            .create(&fields)
            .await
            .map_err(|e| log_failure("crear vehículo", e))?;

        info!("✅ Vehículo {} creado (id {})", fields.modelo, id);
        Ok(id)
    }

    /// Sobrescribe todos los campos; un id inexistente no es un error
    pub async fn update(&self, id: i32, form: VehicleForm) -> AppResult<()> {
        let fields = form.into_fields().map_err(|e| {
            warn!("⚠️ Formulario de vehículo {} rechazado: {}", id, e);
            e
        })?;

        let affected = self
            .store
            .update(id, &fields)
            .await
            .map_err(|e| log_failure(&format!("actualizar vehículo {}", id), e))?;

        debug!("✏️ Vehículo {} actualizado ({} filas)", id, affected);
        Ok(())
    }

    /// Borrado idempotente
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(|e| log_failure(&format!("eliminar vehículo {}", id), e))?;

        debug!("🗑️ Vehículo {} eliminado ({} filas)", id, affected);
        Ok(())
    }

    /// `true` si la base responde
    pub async fn ping(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                log_failure("health check", e);
                false
            }
        }
    }
}

// Los fallos de conexión ya quedaron registrados en `database::connect`
fn log_failure(operation: &str, e: AppError) -> AppError {
    if !e.is_connection() {
        error!("❌ Error al {}: {}", operation, e);
    }
    e
}
