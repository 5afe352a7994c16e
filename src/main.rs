use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shiprules::application::engine::ShippingRuleEngine;
use shiprules::config::RuleConfig;
use shiprules::domain::ports::ClockBox;
use shiprules::infrastructure::clock::SystemClock;
use shiprules::infrastructure::in_memory::FixedClock;
use shiprules::interfaces::csv::rate_writer::RateWriter;
use shiprules::interfaces::json::request_reader::CheckoutRequest;
use shiprules::telemetry;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkout request JSON file (postcode, cart, rates)
    input: PathBuf,

    /// Rule configuration JSON file (optional). Defaults to the FedEx setup.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate as of this RFC 3339 timestamp instead of the local clock.
    #[arg(long)]
    now: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => RuleConfig::from_path(&path).into_diagnostic()?,
        None => RuleConfig::default(),
    };

    let clock: ClockBox = match cli.now {
        Some(now) => Box::new(FixedClock::parse_rfc3339(&now).into_diagnostic()?),
        None => Box::new(SystemClock),
    };

    let engine = ShippingRuleEngine::new(config, clock);

    let file = File::open(&cli.input).into_diagnostic()?;
    let request = CheckoutRequest::from_reader(BufReader::new(file)).into_diagnostic()?;
    let (session, rates) = request.into_parts();

    let rates = engine
        .package_rates(&session, rates)
        .await
        .into_diagnostic()?;
    info!(input = %cli.input.display(), rates = rates.len(), "Checkout evaluated");

    let stdout = io::stdout();
    let mut writer = RateWriter::new(stdout.lock());
    writer
        .write_rates(&rates, |quote| engine.full_label(quote))
        .into_diagnostic()?;

    Ok(())
}
