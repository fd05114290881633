use async_trait::async_trait;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::{Connection, PgConnection};
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::database::{self, release};
use crate::models::{Vehicle, VehicleFields};
use crate::utils::errors::{AppError, AppResult};

const SELECT_COLUMNS: &str =
    "SELECT id, modelo, ano, cor, preco, data_fabricacao, disponivel FROM veiculos";

/// Persistencia de vehículos.
///
/// `update` y `delete` devuelven las filas afectadas; cero filas no es un error.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>>;

    /// Inserta una fila nueva y devuelve el id asignado por la base
    async fn create(&self, fields: &VehicleFields) -> AppResult<i32>;

    async fn update(&self, id: i32, fields: &VehicleFields) -> AppResult<u64>;

    async fn delete(&self, id: i32) -> AppResult<u64>;

    async fn ping(&self) -> AppResult<()>;
}

/// Repositorio PostgreSQL: una conexión nueva por operación
pub struct VehicleRepository {
    config: DatabaseConfig,
}

impl VehicleRepository {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> AppResult<PgConnection> {
        database::connect(&self.config).await
    }
}

// Ejecuta una escritura dentro de una transacción; rollback si falla
async fn execute_in_transaction(
    conn: &mut PgConnection,
    query: Query<'_, Postgres, PgArguments>,
) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;
    match query.execute(&mut *tx).await {
        Ok(done) => {
            tx.commit().await?;
            Ok(done.rows_affected())
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("⚠️ Error en rollback: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn insert_in_transaction(conn: &mut PgConnection, fields: &VehicleFields) -> Result<i32, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let inserted = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO veiculos (modelo, ano, cor, preco, data_fabricacao, disponivel)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&fields.modelo)
    .bind(fields.ano)
    .bind(&fields.cor)
    .bind(fields.preco)
    .bind(fields.data_fabricacao)
    .bind(fields.disponivel())
    .fetch_one(&mut *tx)
    .await;

    match inserted {
        Ok(id) => {
            tx.commit().await?;
            Ok(id)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("⚠️ Error en rollback: {}", rollback_err);
            }
            Err(e)
        }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        let mut conn = self.connect().await?;
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        vehicles.map_err(|e| AppError::Query(format!("Error listing vehicles: {}", e)))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let mut conn = self.connect().await?;
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        vehicle.map_err(|e| AppError::Query(format!("Error finding vehicle: {}", e)))
    }

    async fn create(&self, fields: &VehicleFields) -> AppResult<i32> {
        let mut conn = self.connect().await?;
        let result = insert_in_transaction(&mut conn, fields).await;
        release(conn).await;

        result.map_err(|e| AppError::Persistence(format!("Error creating vehicle: {}", e)))
    }

    async fn update(&self, id: i32, fields: &VehicleFields) -> AppResult<u64> {
        let mut conn = self.connect().await?;
        let query = sqlx::query(
            r#"
            UPDATE veiculos
            SET modelo = $1, ano = $2, cor = $3, preco = $4, data_fabricacao = $5, disponivel = $6
            WHERE id = $7
            "#,
        )
        .bind(fields.modelo.clone())
        .bind(fields.ano)
        .bind(fields.cor.clone())
        .bind(fields.preco)
        .bind(fields.data_fabricacao)
        .bind(fields.disponivel())
        .bind(id);
        let result = execute_in_transaction(&mut conn, query).await;
        release(conn).await;

        result.map_err(|e| AppError::Persistence(format!("Error updating vehicle: {}", e)))
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut conn = self.connect().await?;
        let query = sqlx::query("DELETE FROM veiculos WHERE id = $1").bind(id);
        let result = execute_in_transaction(&mut conn, query).await;
        release(conn).await;

        result.map_err(|e| AppError::Persistence(format!("Error deleting vehicle: {}", e)))
    }

    async fn ping(&self) -> AppResult<()> {
        database::ping(&self.config).await
    }
}
