use log::{debug, warn};

use crate::error::{PricerError, PricerResult};
use crate::models::traits::OptionPricingModel;
use crate::models::utils::{intrinsic_call, intrinsic_put};
use crate::pricing::config::{DegeneratePolicy, PricerConfig};
use crate::pricing::types::{OptionContract, OptionPrices, PricingMethod};

/// Price one contract with `model`, applying the configured degenerate policy.
///
/// The contract is validated first, so a domain violation is always reported as
/// `InvalidInput` regardless of policy. A contract with σ·√T = 0 is either
/// rejected or priced at its discounted intrinsic value.
pub fn price_contract<M: OptionPricingModel>(
    model: &M,
    contract: &OptionContract,
    config: &PricerConfig,
) -> PricerResult<OptionPrices> {
    contract.validate()?;

    if contract.is_degenerate() {
        return match config.pricing.degenerate_policy {
            DegeneratePolicy::Reject => Err(PricerError::degeneracy(format!(
                "sigma * sqrt(T) is zero (sigma={}, T={}), refusing to price with {}",
                contract.volatility,
                contract.years_to_exp,
                model.model_name()
            ))),
            DegeneratePolicy::Intrinsic => {
                warn!(
                    "Degenerate contract (sigma={}, T={}), using discounted intrinsic value",
                    contract.volatility, contract.years_to_exp
                );
                Ok(OptionPrices {
                    call: intrinsic_call(contract),
                    put: intrinsic_put(contract),
                    d1: None,
                    d2: None,
                    method: PricingMethod::Intrinsic,
                })
            }
        };
    }

    let prices = model.price(contract)?;
    debug!(
        "{}: d1={:?}, d2={:?}, call={:.6}, put={:.6}",
        model.model_name(),
        prices.d1,
        prices.d2,
        prices.call,
        prices.put
    );
    Ok(prices)
}
