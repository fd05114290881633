//! FIAT vehicle records
//! 
//! Aplicación web mínima para gestionar la tabla `veiculos`: listar, crear,
//! editar y eliminar registros, más un health check y una página de diagnóstico.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

pub use routes::create_router;
pub use state::AppState;
