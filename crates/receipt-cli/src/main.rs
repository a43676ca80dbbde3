//! Command-line receipt generator
//!
//! Reads an order/user document (inline JSON or a file path), renders the
//! receipt PDF, writes it to the output directory, and optionally hands it
//! to an external upload helper. Exactly one line is printed on stdout on
//! success - the absolute file path, or the upload URL when an uploader is
//! configured - so callers can consume the result without scraping logs.
//! All diagnostics go to stderr and the log file.

mod logging;
mod upload;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use receipt_core::service::receipt_file_name;
use receipt_core::{ReceiptRequest, Renderer, RendererConfig, TemplateVariant};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a payment receipt PDF from order and user records")]
struct Args {
    /// Inline JSON document, or path to a JSON file, with order_data and
    /// user_data
    input: String,

    /// Template layout variant (classic | pass)
    #[arg(long, default_value = "pass")]
    variant: String,

    /// Background artwork; defaults to the variant's bundled asset path
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory receiving the generated PDF
    #[arg(long, default_value = "generated_receipts")]
    out_dir: PathBuf,

    /// Base URL embedded in the verification QR link
    #[arg(long, env = "SERVER_URL", default_value = "http://localhost:4000")]
    base_url: String,

    /// Append-only diagnostic log
    #[arg(long, default_value = "logs/receipt-cli.log")]
    log_file: PathBuf,

    /// External upload helper; receives the PDF path as its last argument
    /// and prints the resulting URL on stdout
    #[arg(long)]
    uploader: Option<String>,
}

fn main() {
    let args = Args::parse();
    logging::init(&args.log_file);

    if let Err(err) = run(&args) {
        error!("receipt generation failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let variant: TemplateVariant = args.variant.parse().map_err(|e: String| anyhow!(e))?;

    let input = read_input(&args.input)?;
    let request = ReceiptRequest::from_json(&input)?;
    let order_id = request.order_data.order_id.clone();
    info!("starting receipt generation for {order_id}");

    let template_path = args
        .template
        .clone()
        .unwrap_or_else(|| PathBuf::from(variant.default_background()));
    let renderer = Renderer::new(
        variant.spec(),
        RendererConfig {
            base_url: args.base_url.trim_end_matches('/').to_string(),
            template_path,
        },
    );
    let pdf = renderer.render(&request)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let file_path = args.out_dir.join(receipt_file_name(&order_id));
    fs::write(&file_path, &pdf)
        .with_context(|| format!("failed to write {}", file_path.display()))?;
    let file_path = file_path.canonicalize().unwrap_or(file_path);
    info!("receipt generated at {}", file_path.display());

    // An upload failure leaves the generated file in place; only the
    // result line and exit code reflect it.
    if let Some(uploader) = &args.uploader {
        let url = upload::run(uploader, &file_path)?;
        info!("receipt uploaded: {url}");
        println!("{url}");
    } else {
        println!("{}", file_path.display());
    }

    Ok(())
}

/// Resolve the positional input: a path that exists on disk is read as a
/// file, anything else is treated as inline JSON
fn read_input(raw: &str) -> Result<String> {
    let candidate = Path::new(raw);
    if candidate.exists() {
        fs::read_to_string(candidate)
            .with_context(|| format!("failed to read input file {}", candidate.display()))
    } else {
        Ok(raw.to_string())
    }
}
