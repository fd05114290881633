//! Modelo de Vehicle
//! 
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `veiculos` con primary key 'id'.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::utils::validation::format_date;

/// Vehicle principal - una fila de la tabla veiculos
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub preco: Decimal,
    pub data_fabricacao: NaiveDate,
    pub disponivel: bool,
}

/// Campos ya validados para insertar o sobrescribir una fila
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFields {
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub preco: Decimal,
    pub data_fabricacao: NaiveDate,
    pub disponivel: Option<bool>,
}

impl VehicleFields {
    /// Valor que se persiste: ausente equivale a `false`
    pub fn disponivel(&self) -> bool {
        self.disponivel.unwrap_or(false)
    }

    /// Fila resultante de aplicar estos campos al id dado
    pub fn into_vehicle(self, id: i32) -> Vehicle {
        let disponivel = self.disponivel();
        Vehicle {
            id,
            modelo: self.modelo,
            ano: self.ano,
            cor: self.cor,
            preco: self.preco,
            data_fabricacao: self.data_fabricacao,
            disponivel,
        }
    }
}

/// Vehicle listo para presentación, con la fecha normalizada a `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleView {
    pub id: i32,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub preco: Decimal,
    pub data_fabricacao: String,
    pub disponivel: bool,
}

impl From<Vehicle> for VehicleView {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            modelo: vehicle.modelo,
            ano: vehicle.ano,
            cor: vehicle.cor,
            preco: vehicle.preco,
            data_fabricacao: format_date(vehicle.data_fabricacao),
            disponivel: vehicle.disponivel,
        }
    }
}
