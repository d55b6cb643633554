//! `mosaic-convert`: merge a mosaic order request onto an order template offline.
//!
//! Commands: convert, validate, status
//! Writes JSON to stdout; exits non-zero when the merged order fails validation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use mosaic_conversion::{
    MosaicOrderRequest, OrderConverter, RequiredFieldViolation, validate_order,
    validation_status,
};
use mosaic_infra::ServiceError;
use mosaic_orders::{OrderTemplate, PurchaseOrder, TemplatePair};

#[derive(Parser)]
#[command(name = "mosaic-convert")]
#[command(about = "Merge mosaic order requests onto order templates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a request against a template and validate the merged order
    Convert {
        /// Request JSON ({ "orderTemplateId": ..., "mosaicOrder": {...} })
        #[arg(short, long)]
        request: PathBuf,

        /// Order template JSON (one document holding order and line fields)
        #[arg(short, long)]
        template: PathBuf,

        /// Print the merged order even when validation fails
        #[arg(long)]
        skip_validation: bool,
    },

    /// Validate an already merged order
    Validate {
        /// Purchase order JSON
        #[arg(short, long)]
        order: PathBuf,
    },

    /// Print the engine readiness status
    Status,
}

fn main() -> ExitCode {
    mosaic_observability::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Convert {
            request,
            template,
            skip_validation,
        } => {
            let request: MosaicOrderRequest = read_json(&request)?;
            let template: OrderTemplate = read_json(&template)?;
            let templates = TemplatePair::from_template(&template)
                .context("invalid order template")?
                .ok_or_else(|| anyhow!("order template has no id"))?;

            if let Some(requested) = request.order_template_id.as_deref() {
                if requested.trim() != templates.template_id().to_string() {
                    warn!(
                        requested,
                        template_id = %templates.template_id(),
                        "request names a different template; using the supplied file"
                    );
                }
            }

            let order = OrderConverter::default().convert(&request.mosaic_order, &templates);
            if skip_validation {
                print_json(&order)?;
                return Ok(ExitCode::SUCCESS);
            }
            report(&order)
        }
        Commands::Validate { order } => {
            let order: PurchaseOrder = read_json(&order)?;
            match validate_order(&order) {
                Ok(()) => {
                    print_json(&validation_status())?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(violation) => print_violation(violation),
            }
        }
        Commands::Status => {
            print_json(&validation_status())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(order: &PurchaseOrder) -> Result<ExitCode> {
    match validate_order(order) {
        Ok(()) => {
            info!(order_id = ?order.id, "merged order is valid");
            print_json(order)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(violation) => print_violation(violation),
    }
}

fn print_violation(violation: RequiredFieldViolation) -> Result<ExitCode> {
    print_json(&ServiceError::from(violation).to_errors())?;
    Ok(ExitCode::from(2))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_orders::OrderFormat;

    fn demo(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos")
            .join(name)
    }

    #[test]
    fn demo_request_merges_into_valid_mixed_order() {
        let request: MosaicOrderRequest = read_json(&demo("request.json")).unwrap();
        let template: OrderTemplate = read_json(&demo("template.json")).unwrap();
        let templates = TemplatePair::from_template(&template).unwrap().unwrap();

        let order = OrderConverter::default().convert(&request.mosaic_order, &templates);

        assert_eq!(validate_order(&order), Ok(()));
        let line = &order.po_lines[0];
        assert_eq!(line.order_format, Some(OrderFormat::PEMix));
        assert_eq!(line.reference_numbers()[0].ref_number, "MOSAIC-000123");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_json::<PurchaseOrder>(Path::new("does-not-exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.json"));
    }
}
