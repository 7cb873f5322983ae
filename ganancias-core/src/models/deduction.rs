/// The optional-deduction types the calculation service understands.
///
/// Carries the fixed, bidirectional mapping between form-field identifiers
/// (`SeguroVida`) and the service's wire keys (`seguro_vida`). The set is
/// closed; new deduction types require a new variant here and on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeductionKind {
    AlquilerInquilino,
    AlquilerReli,
    MedicinaPrepaga,
    GastosMedicos,
    SeguroVida,
    SeguroRetiro,
    GastosEducativos,
    ServicioDomestico,
    InteresesHipotecarios,
    Donaciones,
    GastosSepelio,
    ImpuestoDebitoCredito,
    IndumentariaLaboral,
}

impl DeductionKind {
    /// Every kind, in the order the service lists them. Request building
    /// iterates this so the outgoing deduction list has a stable order.
    pub const ALL: [Self; 13] = [
        Self::AlquilerInquilino,
        Self::AlquilerReli,
        Self::MedicinaPrepaga,
        Self::GastosMedicos,
        Self::SeguroVida,
        Self::SeguroRetiro,
        Self::GastosEducativos,
        Self::ServicioDomestico,
        Self::InteresesHipotecarios,
        Self::Donaciones,
        Self::GastosSepelio,
        Self::ImpuestoDebitoCredito,
        Self::IndumentariaLaboral,
    ];

    /// The service-side key, used both in requests and as the catalog index.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::AlquilerInquilino => "alquiler_inquilino",
            Self::AlquilerReli => "alquiler_reli",
            Self::MedicinaPrepaga => "medicina_prepaga",
            Self::GastosMedicos => "gastos_medicos",
            Self::SeguroVida => "seguro_vida",
            Self::SeguroRetiro => "seguro_retiro",
            Self::GastosEducativos => "gastos_educativos",
            Self::ServicioDomestico => "servicio_domestico",
            Self::InteresesHipotecarios => "intereses_hipotecarios",
            Self::Donaciones => "donaciones",
            Self::GastosSepelio => "gastos_sepelio",
            Self::ImpuestoDebitoCredito => "impuesto_debitos_creditos",
            Self::IndumentariaLaboral => "indumentaria_laboral",
        }
    }

    /// The form-field identifier this kind maps to.
    pub fn field_id(&self) -> &'static str {
        match self {
            Self::AlquilerInquilino => "AlquilerInquilino",
            Self::AlquilerReli => "AlquilerReli",
            Self::MedicinaPrepaga => "MedicinaPrepaga",
            Self::GastosMedicos => "GastosMedicos",
            Self::SeguroVida => "SeguroVida",
            Self::SeguroRetiro => "SeguroRetiro",
            Self::GastosEducativos => "GastosEducativos",
            Self::ServicioDomestico => "ServicioDomestico",
            Self::InteresesHipotecarios => "InteresesHipotecarios",
            Self::Donaciones => "Donaciones",
            Self::GastosSepelio => "GastosSepelio",
            Self::ImpuestoDebitoCredito => "ImpuestoDebitoCredito",
            Self::IndumentariaLaboral => "IndumentariaLaboral",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_key() == s)
    }

    pub fn from_field_id(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.field_id() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "soltero")]
    Single,
    #[serde(rename = "casado")]
    Married,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "soltero",
            Self::Married => "casado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "soltero" => Some(Self::Single),
            "casado" => Some(Self::Married),
            _ => None,
        }
    }
}
