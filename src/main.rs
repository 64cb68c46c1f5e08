// src/main.rs
//
// Console Black-Scholes calculator. Inputs come from flags, then the [contract]
// table of an optional TOML config, then interactive prompts.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{self, Write};

use pricer_lib::cli::{collect_contract, render_results};
use pricer_lib::{price_european, DegeneratePolicy, Parameter, PricerConfig};

#[derive(Parser)]
#[command(name = "pricer")]
#[command(about = "Black-Scholes calculator for European call and put options")]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(long, short)]
    config: Option<String>,

    /// Current stock price (S0)
    #[arg(long, allow_hyphen_values = true)]
    spot: Option<String>,

    /// Strike price (K)
    #[arg(long, allow_hyphen_values = true)]
    strike: Option<String>,

    /// Time to maturity in years (T)
    #[arg(long, allow_hyphen_values = true)]
    maturity: Option<String>,

    /// Risk-free interest rate as a decimal (r)
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Volatility as a decimal (σ)
    #[arg(long, allow_hyphen_values = true)]
    volatility: Option<String>,

    /// Price T = 0 or σ = 0 at discounted intrinsic value instead of failing
    #[arg(long)]
    intrinsic_on_degenerate: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

impl Args {
    fn flag(&self, parameter: Parameter) -> Option<&str> {
        match parameter {
            Parameter::Spot => self.spot.as_deref(),
            Parameter::Strike => self.strike.as_deref(),
            Parameter::Maturity => self.maturity.as_deref(),
            Parameter::Rate => self.rate.as_deref(),
            Parameter::Volatility => self.volatility.as_deref(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        print!("{}", PricerConfig::template()?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => PricerConfig::load(path)?,
        None => PricerConfig::default(),
    };

    let default_filter = config.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    if let Some(path) = &args.config {
        info!("Loaded pricer config from {}", path);
    }

    if args.intrinsic_on_degenerate {
        config.pricing.degenerate_policy = DegeneratePolicy::Intrinsic;
    }
    let overrides: Vec<(Parameter, &str)> = Parameter::ALL
        .into_iter()
        .filter_map(|p| args.flag(p).map(|raw| (p, raw)))
        .collect();
    config.contract.apply_overrides(&overrides)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let contract = collect_contract(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &config.contract,
        &config.output,
    )?;

    let prices = price_european(&contract, &config)?;

    let mut out = stdout.lock();
    write!(out, "{}", render_results(&prices, &config.output))?;
    out.flush()?;
    Ok(())
}
