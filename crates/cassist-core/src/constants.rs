//! Fixed limits and user-facing text for the crypto assistant

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// Smallest amount that is still rejected; valid amounts must exceed it.
pub fn min_token_amount() -> BigDecimal {
    // 1 millionth of a token
    BigDecimal::new(BigInt::from(1), 6)
}

/// Largest accepted amount (inclusive).
pub fn max_token_amount() -> BigDecimal {
    // 1 million tokens
    BigDecimal::new(BigInt::from(1_000_000), 0)
}

/// Protocol echoed back for every valid swap.
pub const SWAP_PROTOCOL: &str = "uniswap";

/// Chain echoed back for every valid swap.
pub const SWAP_CHAIN: &str = "ethereum";

/// Protocol echoed back for every valid bridge.
pub const BRIDGE_PROTOCOL: &str = "across";

/// Default chat-completions model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the extractor-service credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model name
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

pub const HELP_TEXT: &str = "Supported Actions:
1. Swap tokens
2. Bridge tokens

Supported Protocols:
- Uniswap (for swapping)
- Across (for bridging)

Supported Chains:
- Ethereum
- Arbitrum

Example Commands:
1. Swap 100 USDT for ETH on Uniswap
2. Bridge 50 ETH from Ethereum to Arbitrum using Across";

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Crypto Assistant! I can help you with swapping and bridging tokens.";

pub const USAGE_HINT: &str =
    "Type 'help' or '?' for more information, or 'exit' to end the conversation.";

pub const SUCCESS_MESSAGE: &str = "Operation processed successfully.";

pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I couldn't process that request. Could you try again?";

pub const GOODBYE_MESSAGE: &str = "Thank you for using the Crypto Assistant. Goodbye!";

/// Message shown when the extractor call itself fails.
pub fn transport_error_message(error: &impl std::fmt::Display) -> String {
    format!("An error occurred while processing your request: {error}. Could you please try again?")
}
