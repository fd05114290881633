//! Sistema de manejo de errores
//! 
//! Este módulo define los tipos de errores del sistema. Ninguno termina el
//! proceso ni se propaga como respuesta de error: cada handler lo registra y
//! lo convierte en un aviso para el usuario.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Base de datos inaccesible, autenticación fallida o timeout
    #[error("Connection error: {0}")]
    Connection(String),

    /// Fallo de lectura con la conexión ya establecida
    #[error("Query error: {0}")]
    Query(String),

    /// Datos de formulario mal formados
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fallo de escritura; la transacción fue revertida
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl AppError {
    /// Mensaje para mostrar al usuario como aviso flash
    pub fn notice(&self) -> String {
        match self {
            AppError::Connection(_) => {
                "Erro: Não foi possível conectar ao banco de dados".to_string()
            }
            AppError::Query(msg) => format!("Erro ao consultar veículos: {}", msg),
            AppError::Validation(msg) => format!("Dados inválidos: {}", msg),
            AppError::Persistence(msg) => format!("Erro ao salvar veículo: {}", msg),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, AppError::Connection(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        AppError::Validation(format!("campos obrigatórios ausentes: {}", fields.join(", ")))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación de un campo
pub fn validation_error(field: &str, value: &str) -> AppError {
    AppError::Validation(format!("valor inválido para '{}': '{}'", field, value))
}
