use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ganancias_client::{ApiClient, ApiConfig, CatalogCache};
use ganancias_core::{
    CapValidator, DeductionCatalog, DeductionKind, F572Summary, FormSnapshot, MaritalStatus,
    RequestBuilder, RequestPlan,
};

mod render;
mod utils;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Calculadora del Impuesto a las Ganancias (4ª categoría, Argentina).
///
/// Envía los datos del recibo al servicio de cálculo y muestra el
/// desglose del impuesto mensual, y la proyección anual cuando se
/// informan meses anteriores.
#[derive(Debug, Parser)]
#[command(name = "ganancias")]
struct Cli {
    /// URL base del servicio de cálculo.
    #[arg(long, global = true, default_value = "http://localhost:8000")]
    api_url: String,

    /// Tiempo máximo de espera de un cálculo, en segundos.
    #[arg(long, global = true, default_value_t = 90)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calcula el impuesto del mes (y la proyección anual si corresponde).
    Calcular(CalcularArgs),
    /// Muestra los topes anuales de las deducciones opcionales.
    Topes,
    /// Sube un F.572 en PDF y muestra los totales por tipo de deducción.
    UploadF572(UploadArgs),
}

#[derive(Debug, Args)]
struct CalcularArgs {
    /// Sueldo bruto mensual.
    #[arg(long, value_parser = utils::parse_decimal)]
    sueldo_bruto: Decimal,

    /// Estado civil: soltero o casado.
    #[arg(long, default_value = "soltero", value_parser = utils::parse_marital_status)]
    estado_civil: MaritalStatus,

    /// Cantidad de hijos menores de 18 años.
    #[arg(long, default_value_t = 0)]
    hijos: u32,

    /// Otras cargas de familia.
    #[arg(long, default_value_t = 0)]
    otras_cargas: u32,

    /// Deducción opcional mensual, repetible: `tipo=monto`
    /// (ej. `--deduccion seguro_vida=50000`).
    #[arg(long = "deduccion", value_parser = utils::parse_deduction_spec)]
    deducciones: Vec<(DeductionKind, Decimal)>,

    /// Informa que hubo recibos en meses anteriores de este año.
    #[arg(long)]
    meses_anteriores: bool,

    /// Sueldo bruto acumulado de los meses anteriores.
    #[arg(long, default_value = "0", value_parser = utils::parse_decimal)]
    ingresos_acumulados: Decimal,

    /// Deducciones acumuladas de los meses anteriores.
    #[arg(long, default_value = "0", value_parser = utils::parse_decimal)]
    deducciones_acumuladas: Decimal,

    /// Impuesto ya retenido en los meses anteriores.
    #[arg(long, default_value = "0", value_parser = utils::parse_decimal)]
    retenido_acumulado: Decimal,

    /// Mes del recibo (1-12); por defecto, el mes calendario actual.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    mes: Option<u32>,

    /// F.572 en PDF; su total reemplaza a --deducciones-acumuladas.
    #[arg(long)]
    f572: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct UploadArgs {
    /// Ruta al PDF del F.572.
    file: PathBuf,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let Cli {
        api_url,
        timeout_secs,
        command,
    } = Cli::parse();

    let config =
        ApiConfig::with_base_url(api_url).with_calc_timeout(Duration::from_secs(timeout_secs));
    let client = ApiClient::new(config).context("no se pudo crear el cliente HTTP")?;

    match command {
        Command::Calcular(args) => calcular(&client, args).await,
        Command::Topes => topes(&client).await,
        Command::UploadF572(args) => upload(&client, &args.file).await,
    }
}

// ─── subcommands ─────────────────────────────────────────────────────────────

async fn calcular(
    client: &ApiClient,
    args: CalcularArgs,
) -> anyhow::Result<()> {
    // Catalog failures must not block the calculation; caps simply go
    // unchecked and concepts fall back to field identifiers.
    let mut cache = CatalogCache::new();
    cache.load(client).await;

    let mut accumulated_deductions = args.deducciones_acumuladas;
    if let Some(path) = &args.f572 {
        let summary = upload_f572(client, path).await?;
        print!("{}", render::upload_summary(&summary));
        accumulated_deductions = summary.total();
    }

    let month = args
        .mes
        .unwrap_or_else(|| chrono::Local::now().month());

    let mut form = FormSnapshot::new(
        args.sueldo_bruto,
        args.estado_civil,
        args.hijos,
        args.otras_cargas,
        month,
    );
    for (kind, amount) in &args.deducciones {
        form.set_deduction(*kind, *amount);
    }
    form.has_prior_months = args.meses_anteriores;
    form.accumulated_income = args.ingresos_acumulados;
    form.accumulated_deductions = accumulated_deductions;
    form.accumulated_withheld = args.retenido_acumulado;

    let catalog = cache.catalog();

    // Cap warnings are advisory: the request goes out with the amounts as
    // entered and the service applies the caps itself.
    let validator = CapValidator::new(catalog);
    for (kind, amount) in form.enabled_deductions() {
        let status = validator.check(kind, amount);
        if let Some(warning) = render::cap_warning(&display_name(catalog, kind), status) {
            println!("{warning}");
        }
    }

    match RequestBuilder::new(catalog).build(&form) {
        RequestPlan::Simple(request) => {
            debug!("posting current-month calculation");
            let result = client.calculate(&request).await?;
            print!("{}", render::calculation(&result));
        }
        RequestPlan::Annual(request) => {
            debug!("posting annual projection");
            let result = client.calculate_annual(&request).await?;
            print!("{}", render::projection(&result));
        }
    }

    Ok(())
}

async fn topes(client: &ApiClient) -> anyhow::Result<()> {
    let catalog = client.fetch_catalog().await?;
    print!("{}", render::caps_table(&catalog));
    Ok(())
}

async fn upload(
    client: &ApiClient,
    path: &Path,
) -> anyhow::Result<()> {
    let summary = upload_f572(client, path).await?;
    print!("{}", render::upload_summary(&summary));
    Ok(())
}

// ─── helpers ─────────────────────────────────────────────────────────────────

async fn upload_f572(
    client: &ApiClient,
    path: &Path,
) -> anyhow::Result<F572Summary> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("no se pudo leer {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "f572.pdf".to_string());
    let summary = client.upload_f572(&file_name, bytes).await?;
    Ok(summary)
}

fn display_name(
    catalog: &DeductionCatalog,
    kind: DeductionKind,
) -> String {
    catalog
        .entry(kind)
        .map(|entry| entry.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| kind.field_id().to_string())
}
