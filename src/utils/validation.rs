//! Utilidades de validación
//! 
//! Conversión de los campos de texto del formulario a sus tipos de dominio.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::errors::{validation_error, AppResult};

/// Formato ISO usado en la frontera de presentación
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validar y convertir el año de fabricación
pub fn parse_year(value: &str) -> AppResult<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| validation_error("ano", value))
}

/// Decimales que admite la columna `preco` (NUMERIC(12, 2))
pub const PRICE_SCALE: u32 = 2;

/// Dígitos enteros que admite la columna `preco`
pub const PRICE_INTEGER_DIGITS: u32 = 10;

/// Validar y convertir el precio.
///
/// Se rechaza lo que la columna no puede guardar tal cual: más de dos
/// decimales o más de diez dígitos enteros.
pub fn parse_price(value: &str) -> AppResult<Decimal> {
    let trimmed = value.trim();
    let price = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| validation_error("preco", value))?;

    let limit = Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS));
    if price.normalize().scale() > PRICE_SCALE || price.abs() >= limit {
        return Err(validation_error("preco", value));
    }
    // Exacto: solo quita ceros finales ("15000.500" -> "15000.50")
    Ok(price.round_dp(PRICE_SCALE))
}

/// Validar y convertir string a fecha
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| validation_error("data_fabricacao", value))
}

/// Fecha en formato `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
