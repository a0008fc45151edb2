//! Error types for validation and configuration
//!
//! The `Display` output of [`AmountError`] and [`ValidationError`] is the exact
//! sentence shown to the user, so rejections can be reported verbatim.

use cassist_types::{Action, Chain, Protocol};
use strum::VariantNames;
use thiserror::Error;

use crate::constants::{max_token_amount, min_token_amount, API_KEY_ENV};
use crate::validation::plain_amount;

/// Reasons an amount string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Invalid amount. Please enter a valid number.")]
    NotANumber,

    #[error("The amount must be greater than zero.")]
    NotPositive,

    #[error("The amount is too small. It must be greater than {min}.", min = plain_amount(&min_token_amount()))]
    TooSmall,

    #[error("The amount is too large. Maximum amount is {max}.", max = plain_amount(&max_token_amount()))]
    TooLarge,
}

/// Reasons an operation request is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "I'm sorry, but the '{0}' action is not supported. Currently, I can help with {actions} operations. Would you like to try one of these?",
        actions = Action::VARIANTS.join(", ")
    )]
    UnsupportedAction(String),

    #[error(
        "I apologize, but {0} is not a supported protocol. Currently, I can work with {protocols}. Would you like to use one of these instead?",
        protocols = Protocol::VARIANTS.join(", ")
    )]
    UnsupportedProtocol(String),

    #[error(
        "I'm sorry, but {0} is not a supported blockchain. Currently, I can work with {chains}. Would you like to try with one of these chains?",
        chains = Chain::VARIANTS.join(", ")
    )]
    UnsupportedChain(String),

    #[error("I couldn't understand your request. Could you please rephrase it in terms of swapping or bridging tokens?")]
    Unparseable,

    #[error("Invalid amount for swapping: {0}")]
    SwapAmount(AmountError),

    #[error("Invalid amount for bridging: {0}")]
    BridgeAmount(AmountError),
}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} environment variable not set", var = API_KEY_ENV)]
    MissingApiKey,

    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_messages() {
        assert_eq!(
            AmountError::TooSmall.to_string(),
            "The amount is too small. It must be greater than 0.000001."
        );
        assert_eq!(
            AmountError::TooLarge.to_string(),
            "The amount is too large. Maximum amount is 1000000."
        );
    }

    #[test]
    fn test_templated_messages_list_allowed_values() {
        let message = ValidationError::UnsupportedProtocol("sushiswap".to_string()).to_string();
        assert_eq!(
            message,
            "I apologize, but sushiswap is not a supported protocol. Currently, I can work with uniswap, across. Would you like to use one of these instead?"
        );

        let message = ValidationError::UnsupportedChain("solana".to_string()).to_string();
        assert!(message.contains("solana is not a supported blockchain"));
        assert!(message.contains("ethereum, arbitrum"));

        let message = ValidationError::UnsupportedAction("stake".to_string()).to_string();
        assert!(message.contains("'stake' action is not supported"));
        assert!(message.contains("swap, bridge"));
    }

    #[test]
    fn test_amount_prefix_per_action() {
        let message = ValidationError::SwapAmount(AmountError::NotPositive).to_string();
        assert_eq!(
            message,
            "Invalid amount for swapping: The amount must be greater than zero."
        );

        let message = ValidationError::BridgeAmount(AmountError::NotANumber).to_string();
        assert_eq!(
            message,
            "Invalid amount for bridging: Invalid amount. Please enter a valid number."
        );
    }

    #[test]
    fn test_missing_key_names_variable() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "OPENAI_API_KEY environment variable not set"
        );
    }
}
