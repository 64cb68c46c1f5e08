//! Error types for option pricing

use crate::pricing::types::Parameter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    /// A console or flag value is not a finite real number.
    #[error("Parse error: {parameter} must be a real number, got {input:?}")]
    Parse { parameter: Parameter, input: String },

    /// An input lies outside the domain of the formula.
    #[error("Invalid input: {parameter} = {value} ({reason})")]
    InvalidInput {
        parameter: Parameter,
        value: f64,
        reason: &'static str,
    },

    /// sigma * sqrt(T) vanished or the formula produced a non-finite value.
    #[error("Arithmetic degeneracy: {0}")]
    ArithmeticDegeneracy(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PricerResult<T> = Result<T, PricerError>;

impl PricerError {
    pub fn parse(parameter: Parameter, input: impl Into<String>) -> Self {
        Self::Parse {
            parameter,
            input: input.into(),
        }
    }

    pub fn invalid_input(parameter: Parameter, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            parameter,
            value,
            reason,
        }
    }

    pub fn degeneracy(msg: impl Into<String>) -> Self {
        Self::ArithmeticDegeneracy(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The parameter an input or parse error refers to, if any.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::Parse { parameter, .. } | Self::InvalidInput { parameter, .. } => {
                Some(*parameter)
            }
            _ => None,
        }
    }
}
