use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_half_up;

/// One deduction whose declared amount exceeded its legal cap inside the
/// uploaded form. Informational only; nothing from here is applied to the
/// live form automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapAdjustment {
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "monto_original")]
    pub original: Decimal,
    #[serde(rename = "monto_con_tope")]
    pub capped: Decimal,
    #[serde(rename = "diferencia")]
    pub excess: Decimal,
}

impl CapAdjustment {
    /// Readable name for the F.572 deduction type codes, which differ from
    /// the calculation service's keys. Unknown codes fall back to the code.
    pub fn display_name(&self) -> &str {
        match self.kind.as_str() {
            "prepaga" => "Cuotas Médico Asistenciales",
            "seguro_vida" => "Seguro de Vida",
            "indumentaria" => "Indumentaria y Equipamiento",
            "educacion" => "Gastos de Educación",
            "alquiler" => "Alquileres",
            "servicio_domestico" => "Servicio Doméstico",
            "credito_hipotecario" => "Intereses Hipotecarios",
            _ => self.kind.as_str(),
        }
    }
}

/// Response of `POST /upload-f572`: per-type deduction totals extracted from
/// the document, caps already applied, plus the list of caps that were hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct F572Summary {
    #[serde(rename = "deducciones_con_topes", default)]
    pub totals: HashMap<String, Decimal>,
    #[serde(rename = "topes_aplicados", default)]
    pub caps_applied: Vec<CapAdjustment>,
}

impl F572Summary {
    /// Sum of all per-type totals; this single figure overwrites the
    /// accumulated-deductions form field.
    pub fn total(&self) -> Decimal {
        round_half_up(self.totals.values().copied().sum())
    }
}
