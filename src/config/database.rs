//! Configuración de base de datos
//! 
//! Este módulo define los parámetros de conexión a PostgreSQL. No hay pool:
//! cada operación abre su propia conexión con estos valores.

use sqlx::postgres::PgConnectOptions;
use std::time::Duration;

use super::env_or;

/// Timeout fijo para establecer una conexión
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "rhel610-postgres".to_string(),
            port: 5432,
            database: "fiat_legacy".to_string(),
            user: "fiat_user".to_string(),
            password: "fiat123".to_string(),
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

impl DatabaseConfig {
    /// Construir la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("DB_HOST", defaults.host),
            port: env_or("DB_PORT", defaults.port),
            database: env_or("DB_NAME", defaults.database),
            user: env_or("DB_USER", defaults.user),
            password: env_or("DB_PASSWORD", defaults.password),
            connect_timeout: defaults.connect_timeout,
        }
    }

    /// Opciones de conexión para SQLx
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// `host:port` para logs y la página de diagnóstico
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
