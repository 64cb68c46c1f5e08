use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::parse_field;
use crate::error::{PricerError, PricerResult};
use crate::pricing::types::{OptionContract, Parameter};

/// What to do with a contract whose σ·√T is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Refuse to price and report an arithmetic degeneracy
    #[default]
    Reject,
    /// Return the discounted intrinsic payoff max(±(S - K·e^(-rT)), 0)
    Intrinsic,
}

/// Pricing behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

/// Console rendering of results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Digits after the decimal point
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Print the welcome line before prompting
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
            show_banner: default_show_banner(),
        }
    }
}

/// Contract inputs supplied ahead of time; anything left out is prompted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
}

impl ContractDefaults {
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Spot => self.spot,
            Parameter::Strike => self.strike,
            Parameter::Maturity => self.maturity,
            Parameter::Rate => self.rate,
            Parameter::Volatility => self.volatility,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::Spot => &mut self.spot,
            Parameter::Strike => &mut self.strike,
            Parameter::Maturity => &mut self.maturity,
            Parameter::Rate => &mut self.rate,
            Parameter::Volatility => &mut self.volatility,
        };
        *slot = Some(value);
    }

    /// Overwrite values with raw command-line tokens, which take precedence over
    /// anything read from a config file. Every token goes through the same strict
    /// parser as console input.
    pub fn apply_overrides(&mut self, overrides: &[(Parameter, &str)]) -> PricerResult<()> {
        for &(parameter, raw) in overrides {
            let value = parse_field(parameter, raw)?;
            self.set(parameter, value);
        }
        Ok(())
    }

    /// Parameters that still have to be read from the console
    pub fn missing(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_none())
            .collect()
    }

    /// A contract once all five inputs are present, without domain validation.
    pub fn to_contract(&self) -> PricerResult<OptionContract> {
        let value = |p: Parameter| {
            self.get(p)
                .ok_or_else(|| PricerError::config(format!("{} has no value", p)))
        };
        Ok(OptionContract {
            underlying_price: value(Parameter::Spot)?,
            strike_price: value(Parameter::Strike)?,
            years_to_exp: value(Parameter::Maturity)?,
            risk_free_rate: value(Parameter::Rate)?,
            volatility: value(Parameter::Volatility)?,
        })
    }
}

/// Main configuration struct for the pricer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Default log filter, used when RUST_LOG is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub contract: ContractDefaults,
}

impl PricerConfig {
    /// Reject degenerate contracts
    pub fn strict() -> Self {
        Self::default()
    }

    /// Price degenerate contracts at their discounted intrinsic value
    pub fn intrinsic() -> Self {
        Self {
            pricing: PricingConfig {
                degenerate_policy: DegeneratePolicy::Intrinsic,
            },
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> PricerResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| PricerError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> PricerResult<()> {
        if self.output.decimals > 10 {
            return Err(PricerError::config(format!(
                "output.decimals must be at most 10, got {}",
                self.output.decimals
            )));
        }
        for parameter in Parameter::ALL {
            if let Some(value) = self.contract.get(parameter) {
                if !value.is_finite() {
                    return Err(PricerError::config(format!(
                        "contract value for {} must be finite, got {}",
                        parameter, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// The default configuration rendered as TOML, as written by `--generate-config`
    pub fn template() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("failed to render default config")
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

fn default_show_banner() -> bool {
    true
}
