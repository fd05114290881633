use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use fiat_vehicles::config::AppConfig;
use fiat_vehicles::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = AppConfig::from_env();

    // Configurar logging: DEBUG en desarrollo, INFO en producción
    let level = if config.environment.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .init();

    info!("🚗 FIAT - Gestão de Veículos");
    info!("================================================");
    info!(
        "🗄️ Base de datos: {}/{} (usuario {})",
        config.database.address(),
        config.database.database,
        config.database.user
    );
    if config.environment.is_development() {
        info!("🛠️ Modo desarrollo (OPENSHIFT_BUILD_NAME no definido)");
    }

    let addr: SocketAddr = config.environment.server_url().parse()?;
    let app = create_router(AppState::with_postgres(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Listar vehículos");
    info!("   GET  /vehicle/new - Formulario de alta");
    info!("   POST /vehicle/new - Crear vehículo");
    info!("   GET  /vehicle/edit/:id - Formulario de edición");
    info!("   POST /vehicle/edit/:id - Actualizar vehículo");
    info!("   GET  /vehicle/delete/:id - Eliminar vehículo");
    info!("   GET  /health - Health check");
    info!("   GET  /info - Información del sistema");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
