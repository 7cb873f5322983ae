//! Live annual-cap validation for optional deductions.
//!
//! Runs on every amount change in the UI, so it is pure and synchronous.
//! The arithmetic intentionally duplicates the annualization+cap step the
//! calculation service applies, so the inline warning never contradicts
//! what the server will actually deduct. The check is advisory only and
//! never blocks a submission; the server remains the enforcement authority.

use rust_decimal::Decimal;

use crate::models::{DeductionCatalog, DeductionKind};
use crate::money::MONTHS_PER_YEAR;

/// Outcome of checking one monthly amount against its annual cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStatus {
    /// No catalog entry or no cap configured; any existing warning clears.
    Unlimited,
    WithinCap,
    Exceeded {
        /// Exact annual amount over the cap.
        excess: Decimal,
        /// The cap that will actually be deducted per year.
        cap: Decimal,
    },
}

#[derive(Debug, Clone)]
pub struct CapValidator<'a> {
    catalog: &'a DeductionCatalog,
}

impl<'a> CapValidator<'a> {
    pub fn new(catalog: &'a DeductionCatalog) -> Self {
        Self { catalog }
    }

    /// Checks a monthly amount for `kind` against its configured annual cap.
    ///
    /// The amount is annualized (× 12) and scaled by the catalog's
    /// deductible percentage (1.0 when unspecified) before comparing.
    /// Idempotent: the same inputs always produce the same status.
    pub fn check(
        &self,
        kind: DeductionKind,
        monthly_amount: Decimal,
    ) -> CapStatus {
        let Some(entry) = self.catalog.entry(kind) else {
            return CapStatus::Unlimited;
        };
        let Some(cap) = entry.annual_cap else {
            return CapStatus::Unlimited;
        };

        let deductible_annual = monthly_amount * MONTHS_PER_YEAR * entry.share_or_default();

        if deductible_annual > cap {
            CapStatus::Exceeded {
                excess: deductible_annual - cap,
                cap,
            }
        } else {
            CapStatus::WithinCap
        }
    }
}
