//! Store en memoria
//! 
//! Implementa `VehicleStore` sin base de datos, para tests de handlers y del
//! servicio. Puede simular una base inaccesible o escrituras que fallan.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{Vehicle, VehicleFields};
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Vehicle>,
}

#[derive(Debug, Default)]
pub struct InMemoryVehicleStore {
    table: RwLock<Table>,
    unreachable: bool,
    failing_writes: bool,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store que falla cada operación con `AppError::Connection`
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Store accesible cuyas escrituras fallan con `AppError::Persistence`
    pub fn failing_writes() -> Self {
        Self {
            failing_writes: true,
            ..Self::default()
        }
    }

    fn check_writable(&self) -> AppResult<()> {
        self.check_reachable()?;
        if self.failing_writes {
            return Err(AppError::Persistence("write rejected by store".to_string()));
        }
        Ok(())
    }

    fn check_reachable(&self) -> AppResult<()> {
        if self.unreachable {
            return Err(AppError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        self.check_reachable()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        self.check_reachable()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, fields: &VehicleFields) -> AppResult<i32> {
        self.check_writable()?;
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, fields.clone().into_vehicle(id));
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &VehicleFields) -> AppResult<u64> {
        self.check_writable()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = fields.clone().into_vehicle(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        self.check_writable()?;
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_reachable()
    }
}
