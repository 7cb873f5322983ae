//! Typed form state and request assembly.
//!
//! [`FormSnapshot`] is the rendering-surface-independent image of the form
//! at submission time; [`RequestBuilder`] turns it into the exact payload
//! one of the two calculation endpoints expects.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AccumulatedHistory, AnnualCalculationRequest, CalculationRequest, DeductionCatalog,
    DeductionKind, MaritalStatus, OptionalDeduction,
};

/// State of one optional-deduction control: its enabling checkbox and the
/// monthly amount entered next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeductionField {
    pub enabled: bool,
    pub amount: Decimal,
}

/// The current values of all form controls, captured at submission time.
/// Constructed fresh per submission; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub gross_salary: Decimal,
    pub marital_status: MaritalStatus,
    pub children: u32,
    pub other_dependents: u32,
    deductions: HashMap<DeductionKind, DeductionField>,

    /// The "I have prior months this year" opt-in.
    pub has_prior_months: bool,
    pub accumulated_income: Decimal,
    pub accumulated_deductions: Decimal,
    pub accumulated_withheld: Decimal,

    /// Calendar month of the payslip being calculated, 1 through 12.
    pub current_month: u32,
}

impl FormSnapshot {
    pub fn new(
        gross_salary: Decimal,
        marital_status: MaritalStatus,
        children: u32,
        other_dependents: u32,
        current_month: u32,
    ) -> Self {
        Self {
            gross_salary,
            marital_status,
            children,
            other_dependents,
            deductions: HashMap::new(),
            has_prior_months: false,
            accumulated_income: Decimal::ZERO,
            accumulated_deductions: Decimal::ZERO,
            accumulated_withheld: Decimal::ZERO,
            current_month,
        }
    }

    /// Enables a deduction and sets its monthly amount.
    pub fn set_deduction(
        &mut self,
        kind: DeductionKind,
        amount: Decimal,
    ) {
        self.deductions.insert(
            kind,
            DeductionField {
                enabled: true,
                amount,
            },
        );
    }

    /// Unchecks a deduction. The amount field is cleared unconditionally so
    /// a stale value cannot resurface when the box is checked again.
    pub fn clear_deduction(
        &mut self,
        kind: DeductionKind,
    ) {
        self.deductions.insert(kind, DeductionField::default());
    }

    pub fn deduction(
        &self,
        kind: DeductionKind,
    ) -> DeductionField {
        self.deductions.get(&kind).copied().unwrap_or_default()
    }

    /// Enabled deductions with their amounts, in canonical order.
    pub fn enabled_deductions(&self) -> impl Iterator<Item = (DeductionKind, Decimal)> + '_ {
        DeductionKind::ALL.into_iter().filter_map(|kind| {
            let field = self.deduction(kind);
            field.enabled.then_some((kind, field.amount))
        })
    }

    /// The prior-months aggregate, or `None` when the annual path must not
    /// be taken. The opt-in toggle alone is insufficient: a non-positive
    /// accumulated income also disables the projection.
    pub fn accumulated_history(&self) -> Option<AccumulatedHistory> {
        if !self.has_prior_months || self.accumulated_income <= Decimal::ZERO {
            return None;
        }
        Some(AccumulatedHistory {
            income: self.accumulated_income,
            deductions: self.accumulated_deductions,
            withheld_tax: self.accumulated_withheld,
        })
    }
}

/// Which endpoint the snapshot resolved to, with its ready-to-send body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPlan {
    /// `POST /calcular` with the current month only.
    Simple(CalculationRequest),
    /// `POST /calcular-anual` with accumulated history attached.
    Annual(AnnualCalculationRequest),
}

#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    catalog: &'a DeductionCatalog,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(catalog: &'a DeductionCatalog) -> Self {
        Self { catalog }
    }

    /// Assembles the request for the given snapshot and selects the endpoint.
    pub fn build(
        &self,
        form: &FormSnapshot,
    ) -> RequestPlan {
        let current_month = CalculationRequest {
            gross_salary: form.gross_salary,
            marital_status: form.marital_status,
            children: form.children,
            other_dependents: form.other_dependents,
            optional_deductions: self.optional_deductions(form),
        };

        match form.accumulated_history() {
            Some(history) => {
                debug!(month = form.current_month, "annual projection path selected");
                RequestPlan::Annual(AnnualCalculationRequest {
                    current_month,
                    accumulated: Some(history),
                    current_month_number: form.current_month,
                })
            }
            None => RequestPlan::Simple(current_month),
        }
    }

    /// Checked deductions with a strictly positive amount, in canonical
    /// order. `concepto` comes from the catalog display name, falling back
    /// to the form-field identifier when the catalog has no entry.
    fn optional_deductions(
        &self,
        form: &FormSnapshot,
    ) -> Vec<OptionalDeduction> {
        form.enabled_deductions()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .map(|(kind, amount)| {
                let concept = self
                    .catalog
                    .entry(kind)
                    .map(|entry| entry.name.clone())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| kind.field_id().to_string());
                OptionalDeduction {
                    concept,
                    amount,
                    kind: kind.as_key().to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::CatalogEntry;

    fn catalog() -> DeductionCatalog {
        let mut catalog = DeductionCatalog::default();
        catalog.optional.insert(
            "seguro_vida".to_string(),
            CatalogEntry {
                name: "Seguro de Vida".to_string(),
                annual_cap: Some(dec!(200000)),
                deductible_share: None,
            },
        );
        catalog
    }

    fn base_form() -> FormSnapshot {
        FormSnapshot::new(dec!(1000000), MaritalStatus::Single, 0, 0, 8)
    }

    #[test]
    fn bare_form_takes_simple_path_with_empty_deductions() {
        let catalog = catalog();
        let plan = RequestBuilder::new(&catalog).build(&base_form());

        let RequestPlan::Simple(request) = plan else {
            panic!("expected simple path");
        };
        assert_eq!(request.gross_salary, dec!(1000000));
        assert_eq!(request.marital_status, MaritalStatus::Single);
        assert_eq!(request.children, 0);
        assert_eq!(request.optional_deductions, vec![]);
    }

    #[test]
    fn enabled_positive_deduction_uses_catalog_name() {
        let catalog = catalog();
        let mut form = base_form();
        form.set_deduction(DeductionKind::SeguroVida, dec!(50000));

        let RequestPlan::Simple(request) = RequestBuilder::new(&catalog).build(&form) else {
            panic!("expected simple path");
        };

        assert_eq!(
            request.optional_deductions,
            vec![OptionalDeduction {
                concept: "Seguro de Vida".to_string(),
                amount: dec!(50000),
                kind: "seguro_vida".to_string(),
            }]
        );
    }

    #[test]
    fn concept_falls_back_to_field_id_without_catalog_entry() {
        let catalog = DeductionCatalog::default();
        let mut form = base_form();
        form.set_deduction(DeductionKind::Donaciones, dec!(1000));

        let RequestPlan::Simple(request) = RequestBuilder::new(&catalog).build(&form) else {
            panic!("expected simple path");
        };

        assert_eq!(request.optional_deductions[0].concept, "Donaciones");
        assert_eq!(request.optional_deductions[0].kind, "donaciones");
    }

    #[test]
    fn zero_and_negative_amounts_are_skipped() {
        let catalog = catalog();
        let mut form = base_form();
        form.set_deduction(DeductionKind::SeguroVida, Decimal::ZERO);
        form.set_deduction(DeductionKind::Donaciones, dec!(-5));

        let RequestPlan::Simple(request) = RequestBuilder::new(&catalog).build(&form) else {
            panic!("expected simple path");
        };

        assert_eq!(request.optional_deductions, vec![]);
    }

    #[test]
    fn clearing_a_deduction_also_clears_its_amount() {
        let mut form = base_form();
        form.set_deduction(DeductionKind::SeguroVida, dec!(50000));
        form.clear_deduction(DeductionKind::SeguroVida);

        let field = form.deduction(DeductionKind::SeguroVida);
        assert!(!field.enabled);
        assert_eq!(field.amount, Decimal::ZERO);
    }

    #[test]
    fn deductions_keep_canonical_order() {
        let catalog = DeductionCatalog::default();
        let mut form = base_form();
        form.set_deduction(DeductionKind::IndumentariaLaboral, dec!(300));
        form.set_deduction(DeductionKind::AlquilerInquilino, dec!(100));
        form.set_deduction(DeductionKind::SeguroVida, dec!(200));

        let RequestPlan::Simple(request) = RequestBuilder::new(&catalog).build(&form) else {
            panic!("expected simple path");
        };

        let kinds: Vec<_> = request
            .optional_deductions
            .iter()
            .map(|d| d.kind.as_str())
            .collect();
        assert_eq!(
            kinds,
            vec!["alquiler_inquilino", "seguro_vida", "indumentaria_laboral"]
        );
    }

    #[test]
    fn annual_path_requires_toggle_and_positive_income() {
        let catalog = catalog();
        let builder = RequestBuilder::new(&catalog);

        let mut form = base_form();
        form.has_prior_months = true;
        form.accumulated_income = Decimal::ZERO;
        // Toggle alone is insufficient: income is not positive.
        assert!(matches!(builder.build(&form), RequestPlan::Simple(_)));

        form.accumulated_income = dec!(-1);
        assert!(matches!(builder.build(&form), RequestPlan::Simple(_)));

        form.has_prior_months = false;
        form.accumulated_income = dec!(5000000);
        // Income alone is insufficient: the toggle is off.
        assert!(matches!(builder.build(&form), RequestPlan::Simple(_)));
    }

    #[test]
    fn annual_path_carries_history_and_month_number() {
        let catalog = catalog();
        let mut form = base_form();
        form.has_prior_months = true;
        form.accumulated_income = dec!(7000000);
        form.accumulated_deductions = dec!(350000);
        form.accumulated_withheld = dec!(120000);

        let RequestPlan::Annual(request) = RequestBuilder::new(&catalog).build(&form) else {
            panic!("expected annual path");
        };

        assert_eq!(request.current_month_number, 8);
        assert_eq!(
            request.accumulated,
            Some(AccumulatedHistory {
                income: dec!(7000000),
                deductions: dec!(350000),
                withheld_tax: dec!(120000),
            })
        );
        assert_eq!(request.current_month.gross_salary, dec!(1000000));
    }
}
