//! Validation for extracted operation requests
//!
//! Checks the action-specific allow-lists and the amount bounds. Protocol and
//! chain checks run before the amount check, and the first failure found is
//! returned.

use bigdecimal::BigDecimal;
use cassist_types::{BridgeArgs, Chain, OperationRequest, Protocol, SwapArgs};
use num_bigint::Sign;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::constants::{max_token_amount, min_token_amount};
use crate::error::{AmountError, ValidationError};

/// Integer digits of the upper bound; anything with more digits is too large.
const MAX_INTEGER_DIGITS: i64 = 7;

/// Decimal exponent below which a value cannot exceed the lower bound.
const MIN_DECIMAL_EXPONENT: i64 = -6;

/// Validate a token amount and return its canonical decimal string.
///
/// Amounts are parsed exactly, with no rounding, and accepted when
/// `min_token_amount() < amount <= max_token_amount()`.
pub fn validate_amount(amount: &str) -> Result<String, AmountError> {
    let value = BigDecimal::from_str(amount.trim()).map_err(|_| AmountError::NotANumber)?;

    let (digits, scale) = value.as_bigint_and_exponent();
    if digits.sign() != Sign::Plus {
        return Err(AmountError::NotPositive);
    }

    // Order of magnitude first, so `1e999999999` never gets rescaled for the exact comparison.
    let magnitude = digits.magnitude().to_string().len() as i64 - scale;
    if magnitude > MAX_INTEGER_DIGITS {
        return Err(AmountError::TooLarge);
    }
    if magnitude < MIN_DECIMAL_EXPONENT {
        return Err(AmountError::TooSmall);
    }

    if value <= min_token_amount() {
        return Err(AmountError::TooSmall);
    }
    if value > max_token_amount() {
        return Err(AmountError::TooLarge);
    }

    Ok(plain_amount(&value))
}

/// Render an amount in positional notation, keeping its scale (`1e2` -> `100`, `100.50` -> `100.50`).
pub fn plain_amount(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let mut text = digits.magnitude().to_string();

    if scale <= 0 {
        text.push_str(&"0".repeat(scale.unsigned_abs() as usize));
    } else {
        let scale = scale as usize;
        if text.len() <= scale {
            text.insert_str(0, &"0".repeat(scale + 1 - text.len()));
        }
        text.insert(text.len() - scale, '.');
    }

    if digits.sign() == Sign::Minus {
        text.insert(0, '-');
    }
    text
}

/// Validate swap arguments, returning the normalized amount.
pub fn validate_swap(args: &SwapArgs) -> Result<String, ValidationError> {
    if !Protocol::is_supported(&args.protocol) {
        return Err(ValidationError::UnsupportedProtocol(args.protocol.clone()));
    }

    validate_amount(&args.amount_in).map_err(ValidationError::SwapAmount)
}

/// Validate bridge arguments, returning the normalized amount.
pub fn validate_bridge(args: &BridgeArgs) -> Result<String, ValidationError> {
    for chain in [&args.from_chain, &args.to_chain] {
        if !Chain::is_supported(chain) {
            return Err(ValidationError::UnsupportedChain(chain.clone()));
        }
    }

    validate_amount(&args.amount).map_err(ValidationError::BridgeAmount)
}

/// Validate a decoded request according to its action.
pub fn validate_command(request: &OperationRequest) -> Result<String, ValidationError> {
    let result = match request {
        OperationRequest::Swap(args) => validate_swap(args),
        OperationRequest::Bridge(args) => validate_bridge(args),
    };

    match &result {
        Ok(amount) => debug!("{} request valid, amount {}", request.action(), amount),
        Err(e) => warn!("{} request rejected: {}", request.action(), e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn swap(protocol: &str, amount_in: &str) -> SwapArgs {
        SwapArgs {
            token_in: "ETH".to_string(),
            token_out: "USDT".to_string(),
            amount_in: amount_in.to_string(),
            protocol: protocol.to_string(),
        }
    }

    fn bridge(from_chain: &str, to_chain: &str, amount: &str) -> BridgeArgs {
        BridgeArgs {
            from_chain: from_chain.to_string(),
            to_chain: to_chain.to_string(),
            token: "ETH".to_string(),
            amount: amount.to_string(),
        }
    }

    #[rstest]
    #[case("100", "100")]
    #[case("100.50", "100.50")]
    #[case(" 42 ", "42")]
    #[case("0.0000011", "0.0000011")]
    #[case("1000000", "1000000")]
    #[case("1e2", "100")]
    #[case("2.5E-3", "0.0025")]
    #[case("0.00000100000000000000000000000001", "0.00000100000000000000000000000001")]
    #[case("999999.999999999999999999999999999", "999999.999999999999999999999999999")]
    fn test_valid_amounts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_amount(input), Ok(expected.to_string()));
    }

    #[rstest]
    #[case("abc", AmountError::NotANumber)]
    #[case("", AmountError::NotANumber)]
    #[case("12abc", AmountError::NotANumber)]
    #[case("0", AmountError::NotPositive)]
    #[case("-100", AmountError::NotPositive)]
    #[case("0.0000001", AmountError::TooSmall)]
    #[case("0.000001", AmountError::TooSmall)]
    #[case("1000000.000001", AmountError::TooLarge)]
    #[case("5000000", AmountError::TooLarge)]
    #[case("1000000.00000000000000000000000001", AmountError::TooLarge)]
    #[case("0.0000000000000000000000000000001", AmountError::TooSmall)]
    #[case("99999999999999999999999999999999", AmountError::TooLarge)]
    #[case("1e30", AmountError::TooLarge)]
    #[case("1e999999999", AmountError::TooLarge)]
    #[case("1e-999999999", AmountError::TooSmall)]
    #[case("-1e30", AmountError::NotPositive)]
    #[case("-0.0000000000000000000000000000001", AmountError::NotPositive)]
    #[case("0e50", AmountError::NotPositive)]
    fn test_rejected_amounts(#[case] input: &str, #[case] expected: AmountError) {
        assert_eq!(validate_amount(input), Err(expected));
    }

    #[test]
    fn test_plain_amount_renders_bounds() {
        assert_eq!(plain_amount(&min_token_amount()), "0.000001");
        assert_eq!(plain_amount(&max_token_amount()), "1000000");
    }

    #[test]
    fn test_swap_protocol_is_case_insensitive() {
        assert_eq!(validate_swap(&swap("Uniswap", "100")), Ok("100".to_string()));
        assert_eq!(validate_swap(&swap("ACROSS", "1")), Ok("1".to_string()));
    }

    #[test]
    fn test_swap_protocol_checked_before_amount() {
        let err = validate_swap(&swap("sushiswap", "-1")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedProtocol("sushiswap".to_string())
        );
    }

    #[test]
    fn test_swap_amount_failure_is_prefixed() {
        let err = validate_swap(&swap("uniswap", "-100")).unwrap_err();
        assert_eq!(err, ValidationError::SwapAmount(AmountError::NotPositive));
        assert!(err.to_string().starts_with("Invalid amount for swapping:"));
    }

    #[rstest]
    #[case("solana", "arbitrum", "solana")]
    #[case("ethereum", "Optimism", "Optimism")]
    #[case("", "arbitrum", "")]
    fn test_bridge_rejects_unsupported_chain(
        #[case] from_chain: &str,
        #[case] to_chain: &str,
        #[case] rejected: &str,
    ) {
        let err = validate_bridge(&bridge(from_chain, to_chain, "50")).unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedChain(rejected.to_string()));
    }

    #[test]
    fn test_bridge_valid() {
        assert_eq!(
            validate_bridge(&bridge("Ethereum", "ARBITRUM", "50")),
            Ok("50".to_string())
        );
    }

    #[test]
    fn test_bridge_amount_failure_is_prefixed() {
        let err = validate_bridge(&bridge("ethereum", "arbitrum", "2000000")).unwrap_err();
        assert_eq!(err, ValidationError::BridgeAmount(AmountError::TooLarge));
    }

    #[test]
    fn test_validate_command_dispatches_on_action() {
        let request = OperationRequest::Swap(swap("across", "10"));
        assert_eq!(validate_command(&request), Ok("10".to_string()));

        let request = OperationRequest::Bridge(bridge("arbitrum", "solana", "10"));
        assert_eq!(
            validate_command(&request),
            Err(ValidationError::UnsupportedChain("solana".to_string()))
        );
    }
}
