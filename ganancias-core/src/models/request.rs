use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deduction::MaritalStatus;

/// One checked optional deduction as sent to the service.
///
/// `monto` is always the monthly figure; the service annualizes and caps it
/// on its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalDeduction {
    #[serde(rename = "concepto")]
    pub concept: String,
    #[serde(rename = "monto")]
    pub amount: Decimal,
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// Body for `POST /calcular`: the current month in isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "sueldo_bruto")]
    pub gross_salary: Decimal,
    #[serde(rename = "estado_civil")]
    pub marital_status: MaritalStatus,
    #[serde(rename = "cantidad_hijos")]
    pub children: u32,
    #[serde(rename = "otras_cargas")]
    pub other_dependents: u32,
    #[serde(rename = "deducciones_opcionales")]
    pub optional_deductions: Vec<OptionalDeduction>,
}

/// Prior-months aggregate for the annual projection.
///
/// Absent entirely (not zeroed) when the user has not opted in; its absence
/// is what routes the request to the simple endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedHistory {
    #[serde(rename = "ingresos_acumulados")]
    pub income: Decimal,
    #[serde(rename = "deducciones_acumuladas")]
    pub deductions: Decimal,
    #[serde(rename = "impuesto_retenido_acumulado")]
    pub withheld_tax: Decimal,
}

/// Body for `POST /calcular-anual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualCalculationRequest {
    #[serde(rename = "mes_actual")]
    pub current_month: CalculationRequest,
    #[serde(rename = "datos_acumulados")]
    pub accumulated: Option<AccumulatedHistory>,
    /// Calendar month of the current payslip, 1 through 12.
    #[serde(rename = "mes_actual_numero")]
    pub current_month_number: u32,
}
