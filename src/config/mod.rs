//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración de base de datos y variables de entorno.
//! Se construye una sola vez al arrancar y luego se comparte como valor inmutable.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;

use std::str::FromStr;
use tracing::warn;

/// Configuración completa de la aplicación
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub environment: EnvironmentConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            environment: EnvironmentConfig::from_env(),
        }
    }
}

/// Leer una variable de entorno, usando `default` si falta o no se puede parsear
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("⚠️ Valor inválido para {}: '{}', usando valor por defecto", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}
