//! Export a service's OpenAPI specification to JSON
//!
//! Usage:
//!   cargo run --bin export_openapi -- catalog > catalog.json
//!
//! Or with file output:
//!   cargo run --bin export_openapi -- order --output docs/order.json

use anyhow::{Context, bail};
use student_cafe::catalog::openapi::CatalogApiDoc;
use student_cafe::order::openapi::OrderApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let spec = match args.get(1).map(String::as_str) {
        Some("catalog") => CatalogApiDoc::openapi(),
        Some("order") => OrderApiDoc::openapi(),
        _ => bail!("usage: export_openapi <catalog|order> [--output <path>]"),
    };

    let output_path = if args.len() > 3 && args[2] == "--output" {
        Some(args[3].as_str())
    } else {
        None
    };

    let json = spec
        .to_pretty_json()
        .context("Failed to serialize OpenAPI spec")?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path))?;
            eprintln!("✅ OpenAPI spec exported to: {}", path);
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
