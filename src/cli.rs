//! Console glue for the calculator: strict parsing of typed input, the prompt
//! sequence, and rendering of the two prices.
//!
//! Everything here works on generic readers and writers so that the binary can
//! hand in stdin/stdout and tests can hand in in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{PricerError, PricerResult};
use crate::pricing::config::{ContractDefaults, OutputConfig};
use crate::pricing::types::{OptionContract, OptionPrices, Parameter};

pub const WELCOME: &str = "Welcome to the Black-Scholes Option Pricing Calculator!";
pub const RULE: &str = "===============================";

/// Parse one input token as a finite real number.
pub fn parse_field(parameter: Parameter, raw: &str) -> PricerResult<f64> {
    let token = raw.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PricerError::parse(parameter, token)),
    }
}

/// Print the prompt for `parameter` and read one line.
///
/// End of input counts as a parse failure with an empty token.
pub fn prompt_field<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    parameter: Parameter,
) -> PricerResult<f64> {
    write!(writer, "{}", parameter.prompt())?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PricerError::parse(parameter, ""));
    }
    parse_field(parameter, &line)
}

/// Fill in every input not already present in `known`, prompting in the fixed
/// order spot, strike, maturity, rate, volatility.
pub fn collect_contract<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    known: &ContractDefaults,
    output: &OutputConfig,
) -> PricerResult<OptionContract> {
    let mut values = *known;
    let missing = values.missing();

    if !missing.is_empty() && output.show_banner {
        writeln!(writer, "{}\n", WELCOME)?;
    }
    for parameter in missing {
        let value = prompt_field(reader, writer, parameter)?;
        values.set(parameter, value);
    }

    values.to_contract()
}

/// Format a price as currency, e.g. `$10.45`.
pub fn format_price(value: f64, output: &OutputConfig) -> String {
    let decimals = output.decimals;
    // Values that round to zero would otherwise print as "-0.00"
    let half_unit = 0.5 * 10f64.powi(-(decimals as i32));
    let value = if value.abs() < half_unit { 0.0 } else { value };
    format!("{}{:.*}", output.currency_symbol, decimals, value)
}

/// The framed result block printed after a successful run.
pub fn render_results(prices: &OptionPrices, output: &OutputConfig) -> String {
    format!(
        "\n{rule}\nEuropean Call Option Price: {call}\nEuropean Put Option Price: {put}\n{rule}\n",
        rule = RULE,
        call = format_price(prices.call, output),
        put = format_price(prices.put, output),
    )
}
