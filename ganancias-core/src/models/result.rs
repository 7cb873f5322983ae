use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One applied bracket of the progressive scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketLine {
    #[serde(rename = "desde")]
    pub from: Decimal,
    /// Upper bound. The service sends the literal label `"en adelante"` for
    /// the open-ended top bracket; that is decoded as `None`.
    #[serde(rename = "hasta", deserialize_with = "open_ended_bound", default)]
    pub to: Option<Decimal>,
    /// Marginal rate already expressed as a percentage (e.g. `27` for 27%).
    #[serde(rename = "porcentaje")]
    pub rate_pct: Decimal,
    #[serde(rename = "fijo")]
    pub fixed: Decimal,
    #[serde(rename = "base_imponible")]
    pub taxable_base: Decimal,
    #[serde(rename = "impuesto_tramo")]
    pub bracket_tax: Decimal,
}

fn open_ended_bound<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Amount(Decimal),
        Label(String),
    }

    Ok(match Option::<Bound>::deserialize(deserializer)? {
        Some(Bound::Amount(v)) => Some(v),
        Some(Bound::Label(_)) | None => None,
    })
}

/// Tax figures for one calculation: monthly and annual amounts plus the
/// bracket-by-bracket detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    #[serde(rename = "ganancia_anual", default)]
    pub annual_taxable: Decimal,
    #[serde(rename = "impuesto_anual")]
    pub annual_tax: Decimal,
    #[serde(rename = "impuesto_mensual")]
    pub monthly_tax: Decimal,
    #[serde(rename = "detalle_escalas", default)]
    pub brackets: Vec<BracketLine>,
}

/// Monthly personal-deduction breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDeductions {
    /// Ganancia No Imponible, the base allowance.
    #[serde(rename = "gni_mensual")]
    pub base_allowance: Decimal,
    #[serde(rename = "deduccion_especial_mensual")]
    pub special: Decimal,
    #[serde(rename = "conyuge_mensual", default)]
    pub spouse: Decimal,
    #[serde(rename = "hijos_mensual", default)]
    pub children: Decimal,
    #[serde(rename = "otras_cargas_mensual", default)]
    pub other_dependents: Decimal,
    #[serde(rename = "total_mensual")]
    pub total: Decimal,
}

/// Mandatory payroll discounts (retirement, health insurance, PAMI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryDiscounts {
    #[serde(rename = "jubilacion", default)]
    pub retirement: Decimal,
    #[serde(rename = "obra_social", default)]
    pub health_insurance: Decimal,
    #[serde(rename = "ley_19032", default)]
    pub pami: Decimal,
    #[serde(rename = "total", default)]
    pub total: Decimal,
}

/// Optional deduction as echoed back by the service (cap already applied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalDeductionDetail {
    #[serde(rename = "concepto")]
    pub concept: String,
    #[serde(rename = "monto")]
    pub amount: Decimal,
}

/// Full response of `POST /calcular`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(rename = "sueldo_bruto")]
    pub gross_salary: Decimal,
    #[serde(rename = "descuentos_obligatorios", default)]
    pub mandatory_discounts: Option<MandatoryDiscounts>,
    #[serde(rename = "sueldo_neto", default)]
    pub net_salary: Decimal,
    #[serde(rename = "deducciones_personales")]
    pub personal_deductions: PersonalDeductions,
    #[serde(rename = "deducciones_opcionales", default)]
    pub optional_deductions: Vec<OptionalDeductionDetail>,
    #[serde(rename = "total_deducciones_opcionales", default)]
    pub total_optional_deductions: Decimal,
    #[serde(rename = "ganancia_neta_sujeta_mensual", default)]
    pub net_taxable_monthly: Decimal,
    #[serde(rename = "impuesto")]
    pub tax: TaxSummary,
    #[serde(rename = "sueldo_neto_final", default)]
    pub final_net_salary: Decimal,
    /// Effective monthly tax rate over gross, as a percentage.
    #[serde(rename = "porcentaje_efectivo", default)]
    pub effective_rate_pct: Decimal,
    /// Informational note, e.g. when income is under the taxable minimum.
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

/// Categorization of the year-end withholding difference, derived from the
/// sign of the projected amount. The service sends a redundant string for
/// this; it is recomputed locally instead of trusted from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// Positive: more was withheld than owed.
    InFavor,
    /// Negative: withholding is running behind the projected liability.
    Against,
    Balanced,
}

impl Difference {
    pub fn from_amount(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            Self::InFavor
        } else if amount < Decimal::ZERO {
            Self::Against
        } else {
            Self::Balanced
        }
    }
}

/// Row kind in the monthly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthKind {
    #[serde(rename = "actual")]
    Current,
    #[serde(rename = "proyectado")]
    Projected,
    /// A historical month carried over from the accumulated data.
    #[serde(rename = "registrado", other)]
    Recorded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRow {
    #[serde(rename = "mes")]
    pub month: String,
    #[serde(rename = "tipo")]
    pub kind: MonthKind,
    #[serde(rename = "ganancia_neta_sujeta", default)]
    pub net_taxable: Decimal,
    #[serde(rename = "impuesto_estimado", default)]
    pub estimated_tax: Decimal,
}

/// Full response of `POST /calcular-anual`: the current-month calculation
/// plus the year-end projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualProjection {
    #[serde(rename = "calculo_mes_actual")]
    pub current_month: CalculationResult,
    #[serde(rename = "impuesto_anual_real")]
    pub real_annual_tax: Decimal,
    #[serde(rename = "impuesto_ya_retenido_estimado")]
    pub withheld_so_far: Decimal,
    /// Signed: positive means withheld in excess, negative means owing.
    #[serde(rename = "diferencia")]
    pub difference: Decimal,
    #[serde(rename = "diferencia_porcentual", default)]
    pub difference_pct: Decimal,
    #[serde(rename = "meses_restantes")]
    pub remaining_months: u32,
    #[serde(rename = "retencion_mensual_sugerida")]
    pub suggested_monthly_withholding: Decimal,
    #[serde(rename = "retencion_mensual_actual")]
    pub current_monthly_withholding: Decimal,
    #[serde(rename = "resumen_mensual", default)]
    pub monthly_summary: Vec<MonthRow>,
}

impl AnnualProjection {
    pub fn difference_kind(&self) -> Difference {
        Difference::from_amount(self.difference)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn bracket_bound_decodes_numbers_and_open_label() {
        let json = r#"[
            {"desde": 0, "hasta": 1200000, "porcentaje": 5, "fijo": 0,
             "base_imponible": 1200000, "impuesto_tramo": 60000},
            {"desde": 36450000, "hasta": "en adelante", "porcentaje": 35,
             "fijo": 9500000, "base_imponible": 100000, "impuesto_tramo": 9535000}
        ]"#;

        let brackets: Vec<BracketLine> = serde_json::from_str(json).unwrap();

        assert_eq!(brackets[0].to, Some(dec!(1200000)));
        assert_eq!(brackets[1].to, None);
        assert_eq!(brackets[1].rate_pct, dec!(35));
    }

    #[test]
    fn zero_tax_result_deserializes_without_annual_figures() {
        // The under-minimum response omits ganancia_anual and the scale detail.
        let json = r#"{
            "sueldo_bruto": 500000,
            "sueldo_neto": 415000,
            "deducciones_personales": {
                "gni_mensual": 1500000,
                "deduccion_especial_mensual": 720000,
                "conyuge_mensual": 0,
                "hijos_mensual": 0,
                "total_mensual": 2220000
            },
            "deducciones_opcionales": [],
            "ganancia_neta_sujeta_mensual": 0,
            "impuesto": {"impuesto_mensual": 0, "impuesto_anual": 0, "detalle_escalas": []},
            "sueldo_neto_final": 415000,
            "mensaje": "No alcanza el mínimo no imponible"
        }"#;

        let result: CalculationResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.tax.annual_taxable, Decimal::ZERO);
        assert_eq!(result.effective_rate_pct, Decimal::ZERO);
        assert_eq!(
            result.message.as_deref(),
            Some("No alcanza el mínimo no imponible")
        );
    }

    #[test]
    fn difference_categorization_follows_sign() {
        assert_eq!(Difference::from_amount(dec!(0.01)), Difference::InFavor);
        assert_eq!(Difference::from_amount(dec!(-0.01)), Difference::Against);
        assert_eq!(Difference::from_amount(Decimal::ZERO), Difference::Balanced);
    }

    #[test]
    fn month_kind_tolerates_unknown_tags() {
        let row: MonthRow = serde_json::from_str(
            r#"{"mes": "marzo", "tipo": "registrado",
                "ganancia_neta_sujeta": 100, "impuesto_estimado": 5}"#,
        )
        .unwrap();

        assert_eq!(row.kind, MonthKind::Recorded);
        assert_eq!(row.month, "marzo");
    }
}
