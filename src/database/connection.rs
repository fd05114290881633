//! Conexión a PostgreSQL
//! 
//! Cada operación abre su propia conexión y la cierra antes de devolver.
//! No hay pool ni conexión compartida entre requests.
//!
//! Los fallos de conexión se registran aquí; las capas superiores no los
//! vuelven a registrar.

use sqlx::{Connection, PgConnection};
use tracing::{debug, error, warn};

use crate::config::DatabaseConfig;
use crate::utils::errors::{AppError, AppResult};

/// Abrir una conexión con timeout acotado y encoding UTF-8
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgConnection> {
    let options = config.connect_options();

    let mut conn = match tokio::time::timeout(config.connect_timeout, PgConnection::connect_with(&options)).await {
        Ok(Ok(conn)) => conn,
        Ok(Err(e)) => {
            error!("❌ Error al conectar a la base de datos {}: {}", config.address(), e);
            return Err(AppError::Connection(e.to_string()));
        }
        Err(_) => {
            error!(
                "❌ Timeout de {:?} al conectar a la base de datos {}",
                config.connect_timeout,
                config.address()
            );
            return Err(AppError::Connection(format!("timeout after {:?}", config.connect_timeout)));
        }
    };

    if let Err(e) = sqlx::query("SET client_encoding TO 'UTF8'").execute(&mut conn).await {
        error!("❌ Error configurando client_encoding: {}", e);
        release(conn).await;
        return Err(AppError::Connection(e.to_string()));
    }

    debug!("🔌 Conexión abierta con {}", config.address());
    Ok(conn)
}

/// Cerrar la conexión; un fallo al cerrar solo se registra
pub async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!("⚠️ Error cerrando conexión: {}", e);
    }
}

/// Verificar que la base responde: conectar, `SELECT 1`, cerrar
pub async fn ping(config: &DatabaseConfig) -> AppResult<()> {
    let mut conn = connect(config).await?;
    let result = sqlx::query("SELECT 1").execute(&mut conn).await;
    release(conn).await;

    result.map(|_| ()).map_err(|e| AppError::Query(e.to_string()))
}
