//! # Pricer-Lib: Black-Scholes Pricing of European Options
//!
//! `pricer-lib` prices European call and put options on a non-dividend-paying
//! underlying with the Black-Scholes closed-form formula, and ships the `pricer`
//! console calculator built on top of it.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices from spot, strike, maturity, rate
//!   and volatility
//! - **Explicit normal CDF**: Φ evaluated through the complementary error function
//! - **Typed errors**: domain violations and degenerate contracts are reported, never
//!   turned into NaN or infinity
//! - **Configurable degeneracy handling**: reject `T = 0` / `σ = 0`, or price them at
//!   discounted intrinsic value
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{calculate_call_option_price, calculate_put_option_price};
//!
//! let call = calculate_call_option_price(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! let put = calculate_put_option_price(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! assert!((call - 10.45).abs() < 0.01);
//! assert!((put - 5.57).abs() < 0.01);
//! # Ok::<(), pricer_lib::PricerError>(())
//! ```
//!
//! ## Formula
//!
//! ```text
//! d1   = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2   = d1 - σ·√T
//! call = S·Φ(d1) - K·e^(-rT)·Φ(d2)
//! put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod cli;
pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::bs::{bs_call_price, bs_put_price, BlackScholes};
use pricing::pipeline::price_contract;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error taxonomy
pub use error::{PricerError, PricerResult};

// Contract, result and configuration types
pub use pricing::{
    config::{ContractDefaults, DegeneratePolicy, OutputConfig, PricerConfig, PricingConfig},
    types::{OptionContract, OptionPrices, Parameter, PricingMethod},
};

// Model seam and the normal CDF
pub use models::{normal::norm_cdf, traits::OptionPricingModel};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured pricer settings.
///
/// - [`strict()`]: degenerate contracts are an error (the default)
/// - [`intrinsic()`]: degenerate contracts are priced at discounted intrinsic value
pub mod default_configs {
    use crate::pricing::config::PricerConfig;

    /// Reject contracts with `T = 0` or `σ = 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_lib::{default_configs, price_european, OptionContract, PricerError};
    ///
    /// let contract = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2)?;
    /// let result = price_european(&contract, &default_configs::strict());
    /// assert!(matches!(result, Err(PricerError::ArithmeticDegeneracy(_))));
    /// # Ok::<(), PricerError>(())
    /// ```
    pub fn strict() -> PricerConfig {
        PricerConfig::strict()
    }

    /// Price degenerate contracts at `max(±(S - K·e^(-rT)), 0)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pricer_lib::{default_configs, price_european, OptionContract, PricingMethod};
    ///
    /// let contract = OptionContract::new(110.0, 100.0, 0.0, 0.05, 0.2)?;
    /// let prices = price_european(&contract, &default_configs::intrinsic())?;
    /// assert_eq!(prices.method, PricingMethod::Intrinsic);
    /// assert_eq!(prices.call, 10.0);
    /// # Ok::<(), pricer_lib::PricerError>(())
    /// ```
    pub fn intrinsic() -> PricerConfig {
        PricerConfig::intrinsic()
    }
}

/// Price of a European call option.
///
/// Arguments are spot, strike, time to maturity in years, continuously compounded
/// risk-free rate and volatility, all as decimals.
///
/// # Errors
///
/// * [`PricerError::InvalidInput`] if spot or strike is not positive, maturity or
///   volatility is negative, or any argument is not finite. The error names the
///   offending parameter.
/// * [`PricerError::ArithmeticDegeneracy`] if `σ·√T` is zero.
pub fn calculate_call_option_price(
    stock_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> PricerResult<f64> {
    bs_call_price(
        stock_price,
        strike_price,
        risk_free_rate,
        time_to_maturity,
        volatility,
    )
}

/// Price of a European put option.
///
/// Same arguments and errors as [`calculate_call_option_price`].
pub fn calculate_put_option_price(
    stock_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
) -> PricerResult<f64> {
    bs_put_price(
        stock_price,
        strike_price,
        risk_free_rate,
        time_to_maturity,
        volatility,
    )
}

/// Price both options of a contract under `config`.
///
/// Unlike the single-price functions this honours
/// [`PricingConfig::degenerate_policy`], and reports `d1`/`d2` and the method
/// used alongside the prices.
pub fn price_european(
    contract: &OptionContract,
    config: &PricerConfig,
) -> PricerResult<OptionPrices> {
    price_contract(&BlackScholes, contract, config)
}
