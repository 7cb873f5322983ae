//! End-to-end flow over the pure core: catalog JSON in, validated and
//! serialized request body out, as the service would receive it.

use ganancias_core::{
    CapStatus, CapValidator, DeductionCatalog, DeductionKind, FormSnapshot, MaritalStatus,
    RequestBuilder, RequestPlan,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::json;

fn catalog() -> DeductionCatalog {
    serde_json::from_value(json!({
        "gni_mensual": 1500000,
        "gni_anual": 18000000,
        "deducciones_opcionales": {
            "seguro_vida": {"nombre": "Seguro de Vida", "tope_anual": 200000},
            "servicio_domestico": {"nombre": "Servicio Doméstico", "tope_anual": 18000000},
            "donaciones": {"nombre": "Donaciones", "tope_anual": null}
        }
    }))
    .expect("catalog fixture must deserialize")
}

#[test]
fn checked_deductions_flow_into_the_wire_body() {
    let catalog = catalog();
    let mut form = FormSnapshot::new(dec!(2500000), MaritalStatus::Married, 2, 0, 3);
    form.set_deduction(DeductionKind::SeguroVida, dec!(50000));
    form.set_deduction(DeductionKind::ServicioDomestico, dec!(400000));

    // Advisory validation runs first and flags only the over-cap entry.
    let validator = CapValidator::new(&catalog);
    assert_eq!(
        validator.check(DeductionKind::SeguroVida, dec!(50000)),
        CapStatus::Exceeded {
            excess: dec!(400000),
            cap: dec!(200000),
        }
    );
    assert_eq!(
        validator.check(DeductionKind::ServicioDomestico, dec!(400000)),
        CapStatus::WithinCap
    );

    // The warning does not block the request; both deductions go out.
    let plan = RequestBuilder::new(&catalog).build(&form);
    let RequestPlan::Simple(request) = plan else {
        panic!("expected simple path");
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "sueldo_bruto": "2500000",
            "estado_civil": "casado",
            "cantidad_hijos": 2,
            "otras_cargas": 0,
            "deducciones_opcionales": [
                {"concepto": "Seguro de Vida", "monto": "50000", "tipo": "seguro_vida"},
                {"concepto": "Servicio Doméstico", "monto": "400000", "tipo": "servicio_domestico"}
            ]
        })
    );
}

#[test]
fn opting_into_prior_months_switches_endpoints() {
    let catalog = catalog();
    let mut form = FormSnapshot::new(dec!(2500000), MaritalStatus::Single, 0, 0, 9);
    form.has_prior_months = true;
    form.accumulated_income = dec!(20000000);
    form.accumulated_withheld = dec!(900000);

    let RequestPlan::Annual(request) = RequestBuilder::new(&catalog).build(&form) else {
        panic!("expected annual path");
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["mes_actual_numero"], 9);
    assert_eq!(body["datos_acumulados"]["ingresos_acumulados"], "20000000");
    assert_eq!(body["datos_acumulados"]["deducciones_acumuladas"], "0");
    assert_eq!(body["mes_actual"]["sueldo_bruto"], "2500000");
}
