//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del servidor HTTP y del entorno de despliegue.

use std::env;

use super::env_or;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    /// Namespace de OpenShift, solo informativo
    pub namespace: Option<String>,
    /// Nombre del build de OpenShift; su presencia indica producción
    pub build_name: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            secret_key: "fiat-demo-secret-key-openshift".to_string(),
            namespace: None,
            build_name: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("HOST", defaults.host),
            port: env_or("PORT", defaults.port),
            secret_key: env_or("FLASK_SECRET_KEY", defaults.secret_key),
            namespace: env::var("OPENSHIFT_BUILD_NAMESPACE").ok(),
            build_name: env::var("OPENSHIFT_BUILD_NAME").ok(),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        !self.is_production()
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.build_name.is_some()
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn namespace_or_default(&self) -> &str {
        self.namespace.as_deref().unwrap_or("N/A")
    }
}
