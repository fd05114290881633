//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación, entre los
//! handlers HTTP y el store.

pub mod vehicle_record_service;

pub use vehicle_record_service::VehicleRecordService;
