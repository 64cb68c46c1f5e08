// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying. Inputs are validated before any arithmetic so
// that a bad contract is reported instead of leaking NaN or infinity.

use crate::error::{PricerError, PricerResult};
use crate::models::normal::norm_cdf;
use crate::models::traits::OptionPricingModel;
use crate::pricing::types::{OptionContract, OptionPrices, PricingMethod};

/// The Black-Scholes model as an [`OptionPricingModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, contract: &OptionContract) -> PricerResult<OptionPrices> {
        let (d1, d2) = contract_d1_d2(contract)?;
        Ok(OptionPrices {
            call: call_from_terms(contract, d1, d2)?,
            put: put_from_terms(contract, d1, d2)?,
            d1: Some(d1),
            d2: Some(d2),
            method: PricingMethod::Analytic,
        })
    }
}

/// Standardised terms of the formula:
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// ```
///
/// Fails with [`PricerError::ArithmeticDegeneracy`] when `σ·√T` is zero, which
/// covers `T = 0`, `σ = 0` and products that underflow.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> PricerResult<(f64, f64)> {
    let sigma_sqrt_t = sigma * T.sqrt();
    if sigma_sqrt_t == 0.0 {
        return Err(PricerError::degeneracy(format!(
            "sigma * sqrt(T) is zero (sigma={}, T={}), d1 is undefined",
            sigma, T
        )));
    }

    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    if d1.is_nan() {
        return Err(PricerError::degeneracy(format!(
            "d1 is not a number (S={}, K={}, r={}, T={}, sigma={})",
            S, K, r, T, sigma
        )));
    }

    Ok((d1, d1 - sigma_sqrt_t))
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> PricerResult<f64> {
    let contract = OptionContract::new(S, K, T, r, sigma)?;
    let (d1, d2) = contract_d1_d2(&contract)?;
    call_from_terms(&contract, d1, d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> PricerResult<f64> {
    let contract = OptionContract::new(S, K, T, r, sigma)?;
    let (d1, d2) = contract_d1_d2(&contract)?;
    put_from_terms(&contract, d1, d2)
}

fn contract_d1_d2(contract: &OptionContract) -> PricerResult<(f64, f64)> {
    d1_d2(
        contract.underlying_price,
        contract.strike_price,
        contract.risk_free_rate,
        contract.years_to_exp,
        contract.volatility,
    )
}

// S·Φ(d1) - K·e^(-rT)·Φ(d2)
fn call_from_terms(contract: &OptionContract, d1: f64, d2: f64) -> PricerResult<f64> {
    let price = contract.underlying_price * norm_cdf(d1)
        - contract.strike_price * contract.discount_factor() * norm_cdf(d2);
    finite_price("call", price)
}

// K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
fn put_from_terms(contract: &OptionContract, d1: f64, d2: f64) -> PricerResult<f64> {
    let price = contract.strike_price * contract.discount_factor() * norm_cdf(-d2)
        - contract.underlying_price * norm_cdf(-d1);
    finite_price("put", price)
}

fn finite_price(kind: &str, price: f64) -> PricerResult<f64> {
    if price.is_finite() {
        Ok(price)
    } else {
        Err(PricerError::degeneracy(format!(
            "{} price is not finite: {}",
            kind, price
        )))
    }
}
