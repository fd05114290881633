use serde::Deserialize;
use validator::Validate;

use crate::models::{VehicleFields, VehicleView};
use crate::utils::errors::AppResult;
use crate::utils::validation::{parse_date, parse_price, parse_year};

// Formulario de vehículo tal como llega del navegador.
// Los campos numéricos llegan como texto y se validan en `into_fields`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VehicleForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub modelo: String,

    #[serde(default)]
    pub ano: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub cor: String,

    #[serde(default)]
    pub preco: String,

    #[serde(default)]
    pub data_fabricacao: String,

    // El checkbox solo se envía cuando está marcado
    #[serde(default, deserialize_with = "checkbox")]
    pub disponivel: Option<bool>,
}

impl VehicleForm {
    /// Validar el formulario y convertirlo a campos de dominio
    pub fn into_fields(self) -> AppResult<VehicleFields> {
        let trimmed = Self {
            modelo: self.modelo.trim().to_string(),
            cor: self.cor.trim().to_string(),
            ..self
        };
        trimmed.validate()?;

        Ok(VehicleFields {
            ano: parse_year(&trimmed.ano)?,
            preco: parse_price(&trimmed.preco)?,
            data_fabricacao: parse_date(&trimmed.data_fabricacao)?,
            disponivel: trimmed.disponivel,
            modelo: trimmed.modelo,
            cor: trimmed.cor,
        })
    }
}

impl From<VehicleView> for VehicleForm {
    fn from(view: VehicleView) -> Self {
        Self {
            modelo: view.modelo,
            ano: view.ano.to_string(),
            cor: view.cor,
            preco: view.preco.to_string(),
            data_fabricacao: view.data_fabricacao,
            disponivel: Some(view.disponivel),
        }
    }
}

// La sola presencia del campo cuenta como marcado, sea cual sea el valor
fn checkbox<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|_| true))
}
