use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deduction::DeductionKind;

/// One optional-deduction definition as published by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name used as the request `concepto`.
    #[serde(rename = "nombre", default)]
    pub name: String,

    /// Annual cap in pesos. `None` means the deduction is uncapped.
    #[serde(rename = "tope_anual", default)]
    pub annual_cap: Option<Decimal>,

    /// Fraction of the declared amount that is actually deductible.
    /// The service omits it for fully deductible types (treated as 1.0).
    #[serde(rename = "porcentaje_deducible", default)]
    pub deductible_share: Option<Decimal>,
}

impl CatalogEntry {
    /// The deductible share with the service's default applied.
    pub fn share_or_default(&self) -> Decimal {
        self.deductible_share.unwrap_or(Decimal::ONE)
    }
}

/// The server-provided list of optional deductions and their annual caps.
///
/// Fetched once at startup from `GET /deducciones` and replaced wholesale on
/// reload; never mutated in place. The endpoint also carries the personal
/// allowance figures, which this client does not consume and ignores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeductionCatalog {
    #[serde(rename = "deducciones_opcionales", default)]
    pub optional: HashMap<String, CatalogEntry>,
}

impl DeductionCatalog {
    pub fn entry(
        &self,
        kind: DeductionKind,
    ) -> Option<&CatalogEntry> {
        self.optional.get(kind.as_key())
    }

    pub fn is_empty(&self) -> bool {
        self.optional.is_empty()
    }

    /// Known deduction kinds present in the catalog, in canonical order.
    pub fn known_entries(&self) -> impl Iterator<Item = (DeductionKind, &CatalogEntry)> {
        DeductionKind::ALL
            .into_iter()
            .filter_map(|kind| self.entry(kind).map(|entry| (kind, entry)))
    }
}
