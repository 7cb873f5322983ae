use rust_decimal::Decimal;
use thiserror::Error;

use ganancias_core::models::{DeductionKind, MaritalStatus};

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("monto inválido '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a `tipo=monto` pair, e.g. `seguro_vida=50000`.
pub fn parse_deduction_spec(s: &str) -> Result<(DeductionKind, Decimal), String> {
    let (key, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("se esperaba tipo=monto, recibido '{s}'"))?;
    let kind = DeductionKind::parse(key.trim()).ok_or_else(|| {
        let known = DeductionKind::ALL.map(|k| k.as_key()).join(", ");
        format!("tipo de deducción desconocido '{key}'; opciones: {known}")
    })?;
    let amount = parse_decimal(amount).map_err(|e| e.to_string())?;
    Ok((kind, amount))
}

pub fn parse_marital_status(s: &str) -> Result<MaritalStatus, String> {
    MaritalStatus::parse(s)
        .ok_or_else(|| format!("estado civil inválido '{s}' (soltero o casado)"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn deduction_spec_parses_kind_and_amount() {
        let (kind, amount) = parse_deduction_spec("seguro_vida=50000").unwrap();

        assert_eq!(kind, DeductionKind::SeguroVida);
        assert_eq!(amount, dec!(50000));
    }

    #[test]
    fn deduction_spec_requires_equals_sign() {
        let err = parse_deduction_spec("seguro_vida").unwrap_err();

        assert!(err.contains("tipo=monto"));
    }

    #[test]
    fn deduction_spec_rejects_unknown_kind() {
        let err = parse_deduction_spec("criptomonedas=100").unwrap_err();

        assert!(err.contains("desconocido"));
        assert!(err.contains("alquiler_inquilino"));
    }

    #[test]
    fn marital_status_parses_both_values() {
        assert_eq!(parse_marital_status("soltero").unwrap(), MaritalStatus::Single);
        assert_eq!(parse_marital_status("casado").unwrap(), MaritalStatus::Married);
        assert!(parse_marital_status("viudo").is_err());
    }
}
