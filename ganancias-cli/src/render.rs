//! Terminal rendering of calculation results.
//!
//! Every function returns a `String` so sections can be tested without a
//! terminal; `main` decides what gets printed where. All currency passes
//! through [`money::format_ars`] — sections must not format on their own.

use std::fmt::Write;

use ganancias_core::models::{
    AnnualProjection, CalculationResult, DeductionCatalog, Difference, F572Summary, MonthKind,
    MonthRow, OptionalDeductionDetail, PersonalDeductions, TaxSummary,
};
use ganancias_core::money::{format_ars, format_pct};
use ganancias_core::validator::CapStatus;
use rust_decimal::Decimal;

/// Full current-month result: summary, personal deductions, optional
/// deductions (when any), bracket detail and the optional service message.
pub fn calculation(result: &CalculationResult) -> String {
    let mut out = String::new();

    writeln!(out, "Resultado del cálculo").unwrap();
    writeln!(out, "  Sueldo bruto:         {}", format_ars(result.gross_salary)).unwrap();
    writeln!(
        out,
        "  Impuesto mensual:     {}",
        format_ars(result.tax.monthly_tax)
    )
    .unwrap();
    writeln!(
        out,
        "  Impuesto anual:       {}",
        format_ars(result.tax.annual_tax)
    )
    .unwrap();
    writeln!(
        out,
        "  Porcentaje efectivo:  {}",
        format_pct(result.effective_rate_pct, 2)
    )
    .unwrap();

    out.push('\n');
    out.push_str(&personal_deductions(&result.personal_deductions));

    if let Some(section) = optional_deductions(&result.optional_deductions) {
        out.push('\n');
        out.push_str(&section);
    }

    out.push('\n');
    out.push_str(&tax_detail(&result.tax));

    if let Some(message) = &result.message {
        writeln!(out, "\n{message}").unwrap();
    }

    out
}

/// Personal-deduction breakdown. The base allowance and special-deduction
/// lines always appear; spouse, children and other-dependents lines are
/// suppressed entirely when exactly zero.
fn personal_deductions(deductions: &PersonalDeductions) -> String {
    let mut out = String::new();
    writeln!(out, "Deducciones personales").unwrap();

    let mut line = |label: &str, value| {
        writeln!(out, "  {label}: {}", format_ars(value)).unwrap();
    };

    line("Ganancia No Imponible (mensual)", deductions.base_allowance);
    line("Deducción Especial (mensual)", deductions.special);
    if !deductions.spouse.is_zero() {
        line("Cónyuge (mensual)", deductions.spouse);
    }
    if !deductions.children.is_zero() {
        line("Hijos (mensual)", deductions.children);
    }
    if !deductions.other_dependents.is_zero() {
        line("Otras Personas a Cargo (mensual)", deductions.other_dependents);
    }
    line("Total Mensual", deductions.total);

    out
}

/// Optional-deduction section, or `None` when the list is empty (the
/// section is hidden entirely, not rendered blank).
fn optional_deductions(deductions: &[OptionalDeductionDetail]) -> Option<String> {
    if deductions.is_empty() {
        return None;
    }

    let mut out = String::new();
    writeln!(out, "Deducciones opcionales").unwrap();
    for deduction in deductions {
        writeln!(out, "  {}: {}", deduction.concept, format_ars(deduction.amount)).unwrap();
    }
    Some(out)
}

/// Annual figures plus the bracket-by-bracket detail.
fn tax_detail(tax: &TaxSummary) -> String {
    let mut out = String::new();
    writeln!(out, "Detalle del impuesto").unwrap();
    writeln!(
        out,
        "  Ganancia Anual Sujeta a Impuesto: {}",
        format_ars(tax.annual_taxable)
    )
    .unwrap();
    writeln!(out, "  Impuesto Anual: {}", format_ars(tax.annual_tax)).unwrap();
    writeln!(
        out,
        "  Impuesto Mensual (promedio): {}",
        format_ars(tax.monthly_tax)
    )
    .unwrap();

    if !tax.brackets.is_empty() {
        writeln!(out, "  Tramos aplicados:").unwrap();
        for bracket in &tax.brackets {
            let upper = match bracket.to {
                Some(to) => format_ars(to),
                None => "en adelante".to_string(),
            };
            writeln!(
                out,
                "    Desde {} hasta {upper}",
                format_ars(bracket.from)
            )
            .unwrap();
            writeln!(
                out,
                "      Alícuota: {}% | Fijo: {}",
                bracket.rate_pct,
                format_ars(bracket.fixed)
            )
            .unwrap();
            writeln!(
                out,
                "      Base: {} → Impuesto: {}",
                format_ars(bracket.taxable_base),
                format_ars(bracket.bracket_tax)
            )
            .unwrap();
        }
    }

    out
}

/// Year-end projection section; the embedded current-month calculation is
/// rendered separately via [`calculation`].
pub fn projection(projection: &AnnualProjection) -> String {
    let mut out = String::new();

    writeln!(out, "Proyección anual").unwrap();
    writeln!(
        out,
        "  Impuesto anual real: {}",
        format_ars(projection.real_annual_tax)
    )
    .unwrap();
    writeln!(
        out,
        "  Impuesto ya retenido (estimado): {}",
        format_ars(projection.withheld_so_far)
    )
    .unwrap();
    writeln!(
        out,
        "  Diferencia: {} ({})",
        format_ars(projection.difference.abs()),
        difference_label(projection.difference_kind(), projection.difference_pct)
    )
    .unwrap();
    writeln!(
        out,
        "  Meses restantes: {}",
        projection.remaining_months
    )
    .unwrap();
    writeln!(
        out,
        "  Retención mensual sugerida: {}",
        format_ars(projection.suggested_monthly_withholding)
    )
    .unwrap();
    writeln!(
        out,
        "  Retención mensual actual: {}",
        format_ars(projection.current_monthly_withholding)
    )
    .unwrap();

    if !projection.monthly_summary.is_empty() {
        writeln!(out, "\nResumen mensual").unwrap();
        for row in &projection.monthly_summary {
            writeln!(
                out,
                "  {}: Ganancia: {} → Impuesto: {}",
                month_label(row),
                format_ars(row.net_taxable),
                format_ars(row.estimated_tax)
            )
            .unwrap();
        }
    }

    out
}

/// The three difference states. Only the favorable and unfavorable states
/// carry the percentage deviation, to one decimal place.
pub fn difference_label(
    kind: Difference,
    pct: Decimal,
) -> String {
    match kind {
        Difference::InFavor => format!("A tu favor (+{})", format_pct(pct, 1)),
        Difference::Against => format!("En contra ({})", format_pct(pct, 1)),
        Difference::Balanced => "Equilibrado".to_string(),
    }
}

/// Row label: the tagged current and projected rows get fixed labels, any
/// other row shows its own month name capitalized.
pub fn month_label(row: &MonthRow) -> String {
    match row.kind {
        MonthKind::Current => "Mes Actual".to_string(),
        MonthKind::Projected => "Proyección".to_string(),
        MonthKind::Recorded => capitalize(&row.month),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Inline warning for an over-cap deduction; `None` clears any warning.
pub fn cap_warning(
    name: &str,
    status: CapStatus,
) -> Option<String> {
    match status {
        CapStatus::Exceeded { excess, cap } => Some(format!(
            "⚠️ {name}: superás el tope anual por {}. Solo se deducirán {} al año.",
            format_ars(excess),
            format_ars(cap)
        )),
        CapStatus::WithinCap | CapStatus::Unlimited => None,
    }
}

/// Catalog listing for the `topes` subcommand.
pub fn caps_table(catalog: &DeductionCatalog) -> String {
    if catalog.is_empty() {
        return "No hay deducciones opcionales configuradas en el servidor.\n".to_string();
    }

    let mut out = String::new();
    writeln!(out, "Topes anuales de deducciones opcionales").unwrap();
    for (_, entry) in catalog.known_entries() {
        let cap = match entry.annual_cap {
            Some(cap) => format_ars(cap),
            None => "sin tope".to_string(),
        };
        let share = entry.share_or_default();
        if share == Decimal::ONE {
            writeln!(out, "  {}: {cap}", entry.name).unwrap();
        } else {
            writeln!(
                out,
                "  {}: {cap} ({} deducible)",
                entry.name,
                format_pct(share * Decimal::ONE_HUNDRED, 0)
            )
            .unwrap();
        }
    }
    out
}

/// Upload outcome: merged total plus the informational cap notices. The
/// notices are referential only; nothing is applied to the live form.
pub fn upload_summary(summary: &F572Summary) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "✓ PDF procesado correctamente. Total deducciones: {}",
        format_ars(summary.total())
    )
    .unwrap();

    if !summary.caps_applied.is_empty() {
        writeln!(out, "\n⚠ Información sobre deducciones del F.572:").unwrap();
        writeln!(
            out,
            "Las siguientes deducciones excedían el límite anual en el F.572. Esta \
             información es solo referencial y no se carga automáticamente en el formulario."
        )
        .unwrap();
        for adjustment in &summary.caps_applied {
            writeln!(
                out,
                "  {}: Declarado en F.572: {} | Tope legal: {} | Exceso: {}",
                adjustment.display_name(),
                format_ars(adjustment.original),
                format_ars(adjustment.capped),
                format_ars(adjustment.excess)
            )
            .unwrap();
        }
        writeln!(
            out,
            "Recordá: ingresá manualmente las deducciones del mes actual en el formulario."
        )
        .unwrap();
    }

    out
}
