//! label-calc - CLI for label sheet layout and price quotes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use label_calc::config::DEFAULT_SPACING_MM;
use label_calc::report::{render_json, render_text};
use label_calc::{
    common_size_yields, quote_with_advice, CalcError, CalculationRequest, Dimensions, PricingBasis, PrintType,
    RateCard, SheetPreset, SubstrateSheet, Unit,
};

/// Compute how many labels fit on a sheet and what an order costs.
#[derive(Parser, Debug)]
#[command(name = "label-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Label size as WIDTHxHEIGHT (e.g. 40x40)
    #[arg(short, long, required_unless_present = "list_sizes")]
    size: Option<Dimensions>,

    /// Number of labels required
    #[arg(short, long, required_unless_present = "list_sizes")]
    quantity: Option<u64>,

    /// List the common label sizes with their yield on the chosen sheet
    #[arg(long)]
    list_sizes: bool,

    /// Unit for size, spacing, margin and sheet size (mm, cm, inch)
    #[arg(short, long, default_value = "mm")]
    unit: Unit,

    /// Gap between labels [default: 2 mm]
    #[arg(long)]
    spacing: Option<f64>,

    /// Unprintable border at the sheet edges
    #[arg(long, default_value_t = 0.0)]
    margin: f64,

    /// Substrate preset (roll = 570x1000 mm, sheet = 320x450 mm)
    #[arg(long, default_value = "roll")]
    sheet: SheetPreset,

    /// Custom sheet size as WIDTHxHEIGHT, overrides --sheet
    #[arg(long)]
    sheet_size: Option<Dimensions>,

    /// Print type (normal, metallic)
    #[arg(short, long, default_value = "normal")]
    print_type: PrintType,

    /// Pricing basis (per-sheet, per-unit)
    #[arg(short, long, default_value = "per-sheet")]
    basis: PricingBasis,

    /// Rate card TOML file
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn spacing_mm(args: &Args) -> f64 {
    args.spacing
        .map(|s| args.unit.to_mm(s))
        .unwrap_or(DEFAULT_SPACING_MM)
}

fn sheet_mm(args: &Args) -> SubstrateSheet {
    match args.sheet_size {
        Some(size) => SubstrateSheet::new(size.width, size.height, args.margin).to_mm(args.unit),
        None => args.sheet.substrate().with_margin(args.unit.to_mm(args.margin)),
    }
}

fn build_request(args: &Args, card: &RateCard) -> Result<CalculationRequest> {
    let label = args.size.context("--size is required")?.to_mm(args.unit);
    let quantity = args.quantity.context("--quantity is required")?;

    let request =
        CalculationRequest::from_rate_card(label, quantity, args.print_type, args.basis, card)?
            .with_spacing(spacing_mm(args))
            .with_sheet(sheet_mm(args));
    Ok(request)
}

fn list_sizes(args: &Args) -> Result<()> {
    let sheet = sheet_mm(args);
    info!(
        "Common sizes on {} x {} mm (margin {} mm)",
        sheet.width, sheet.height, sheet.margin
    );
    for (label, packing) in common_size_yields(spacing_mm(args), sheet)? {
        println!(
            "{:>9} mm  {:>3} x {:<3} = {} per sheet",
            label.to_string(),
            packing.per_row,
            packing.per_column,
            packing.per_sheet
        );
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let card = match &args.rates {
        Some(path) => RateCard::load(path)
            .with_context(|| format!("Failed to load rate card {}", path.display()))?,
        None => RateCard::default(),
    };

    if args.list_sizes {
        return list_sizes(&args);
    }

    let request = build_request(&args, &card)?;
    info!(
        "Quoting {} labels of {} mm ({}, {:?})",
        request.quantity, request.label, request.print_type, args.basis
    );

    let (calc, advice) = quote_with_advice(&request)?;

    if args.json {
        println!("{}", render_json(&calc, &advice, &card.currency)?);
    } else {
        println!("{}", render_text(&calc, &advice, &card.currency));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        match err.downcast_ref::<CalcError>() {
            Some(calc_err) => error!("[E{}] {:#}", calc_err.code_value(), err),
            None => error!("{:#}", err),
        }
        std::process::exit(1);
    }
}
