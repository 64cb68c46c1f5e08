use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PricerError, PricerResult};

/// The five scalar inputs of a European option, in prompting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Spot,
    Strike,
    Maturity,
    Rate,
    Volatility,
}

impl Parameter {
    /// Every parameter, in the order the calculator asks for them.
    pub const ALL: [Parameter; 5] = [
        Parameter::Spot,
        Parameter::Strike,
        Parameter::Maturity,
        Parameter::Rate,
        Parameter::Volatility,
    ];

    /// Human readable name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Spot => "stock price (S0)",
            Parameter::Strike => "strike price (K)",
            Parameter::Maturity => "time to maturity (T)",
            Parameter::Rate => "risk-free rate (r)",
            Parameter::Volatility => "volatility (σ)",
        }
    }

    /// Console prompt shown when the value has to be read interactively
    pub fn prompt(&self) -> &'static str {
        match self {
            Parameter::Spot => "Enter the current stock price (S0): ",
            Parameter::Strike => "Enter the strike price (K): ",
            Parameter::Maturity => "Enter the time to maturity in years (T): ",
            Parameter::Rate => {
                "Enter the risk-free interest rate (r) in decimal (e.g., 0.05 for 5%): "
            }
            Parameter::Volatility => "Enter the volatility (σ) in decimal (e.g., 0.2 for 20%): ",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A European option contract together with the market state needed to price it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Spot price of the underlying (S)
    pub underlying_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to expiration in years (T)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate (r), may be negative
    pub risk_free_rate: f64,
    /// Annualised volatility as a decimal, e.g. 0.2 for 20% (σ)
    pub volatility: f64,
}

impl OptionContract {
    /// Build a contract, rejecting inputs outside the formula's domain.
    ///
    /// Zero maturity and zero volatility are accepted here: they are valid
    /// contracts whose analytic price is undefined, and the pricing pipeline
    /// decides how to treat them.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        years_to_exp: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricerResult<Self> {
        let contract = Self {
            underlying_price,
            strike_price,
            years_to_exp,
            risk_free_rate,
            volatility,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Value of a single input.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Spot => self.underlying_price,
            Parameter::Strike => self.strike_price,
            Parameter::Maturity => self.years_to_exp,
            Parameter::Rate => self.risk_free_rate,
            Parameter::Volatility => self.volatility,
        }
    }

    pub fn validate(&self) -> PricerResult<()> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(PricerError::invalid_input(
                    parameter,
                    value,
                    "must be a finite number",
                ));
            }
        }

        if self.underlying_price <= 0.0 {
            return Err(PricerError::invalid_input(
                Parameter::Spot,
                self.underlying_price,
                "must be positive",
            ));
        }
        if self.strike_price <= 0.0 {
            return Err(PricerError::invalid_input(
                Parameter::Strike,
                self.strike_price,
                "must be positive",
            ));
        }
        if self.years_to_exp < 0.0 {
            return Err(PricerError::invalid_input(
                Parameter::Maturity,
                self.years_to_exp,
                "must not be negative",
            ));
        }
        if self.volatility < 0.0 {
            return Err(PricerError::invalid_input(
                Parameter::Volatility,
                self.volatility,
                "must not be negative",
            ));
        }

        Ok(())
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.years_to_exp).exp()
    }

    /// True when σ·√T is zero and d1 cannot be formed.
    pub fn is_degenerate(&self) -> bool {
        self.volatility * self.years_to_exp.sqrt() == 0.0
    }
}

/// How a price pair was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMethod {
    /// Closed-form Black-Scholes
    Analytic,
    /// Discounted intrinsic payoff for a degenerate contract
    Intrinsic,
}

/// Call and put prices for one contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
    /// Standardised moneyness terms, absent for intrinsic pricing
    pub d1: Option<f64>,
    pub d2: Option<f64>,
    pub method: PricingMethod,
}

impl OptionPrices {
    /// call - put, which parity ties to S - K·e^(-rT)
    pub fn parity_spread(&self) -> f64 {
        self.call - self.put
    }
}
