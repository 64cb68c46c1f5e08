pub mod bs;
pub mod normal;

/// Common traits used by pricing models
pub mod traits {
    use crate::error::PricerResult;
    use crate::pricing::types::{OptionContract, OptionPrices};

    /// Pricing model trait for European options
    pub trait OptionPricingModel {
        fn model_name(&self) -> &str;

        /// Call and put prices for a contract that has already passed
        /// [`OptionContract::validate`].
        fn price(&self, contract: &OptionContract) -> PricerResult<OptionPrices>;
    }
}

/// Utility functions for payoff and discounting calculations
pub mod utils {
    use crate::pricing::types::OptionContract;

    /// Discounted strike K·e^(-rT)
    pub fn discounted_strike(contract: &OptionContract) -> f64 {
        contract.strike_price * contract.discount_factor()
    }

    /// Intrinsic forward value of the call, max(S - K·e^(-rT), 0)
    pub fn intrinsic_call(contract: &OptionContract) -> f64 {
        (contract.underlying_price - discounted_strike(contract)).max(0.0)
    }

    /// Intrinsic forward value of the put, max(K·e^(-rT) - S, 0)
    pub fn intrinsic_put(contract: &OptionContract) -> f64 {
        (discounted_strike(contract) - contract.underlying_price).max(0.0)
    }

    /// Right-hand side of put-call parity, S - K·e^(-rT)
    pub fn parity_forward(contract: &OptionContract) -> f64 {
        contract.underlying_price - discounted_strike(contract)
    }
}
