mod catalog;
mod deduction;
mod request;
mod result;
mod upload;

pub use catalog::{CatalogEntry, DeductionCatalog};
pub use deduction::{DeductionKind, MaritalStatus};
pub use request::{
    AccumulatedHistory, AnnualCalculationRequest, CalculationRequest, OptionalDeduction,
};
pub use result::{
    AnnualProjection, BracketLine, CalculationResult, Difference, MandatoryDiscounts, MonthKind,
    MonthRow, OptionalDeductionDetail, PersonalDeductions, TaxSummary,
};
pub use upload::{CapAdjustment, F572Summary};
