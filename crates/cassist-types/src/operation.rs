//! Operation definitions with type-safe enums
//!
//! Allow-listed values are modelled as enums with strum derive macros so that
//! case-insensitive parsing and the supported-value listings used in user
//! messages come from a single declaration.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// Actions the assistant can turn into an operation descriptor.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Exchange one token for another on a single chain
    Swap,
    /// Move a token's value from one chain to another
    Bridge,
}

/// Protocols accepted for a swap request.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Uniswap,
    Across,
}

/// Chains accepted as either endpoint of a bridge request.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Arbitrum,
}

impl Protocol {
    /// Case-insensitive allow-list check.
    pub fn is_supported(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }
}

impl Chain {
    /// Case-insensitive allow-list check.
    pub fn is_supported(value: &str) -> bool {
        value.parse::<Self>().is_ok()
    }
}

/// Arguments of the `swap` function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapArgs {
    pub token_in: String,
    pub token_out: String,
    #[serde(deserialize_with = "string_or_number")]
    pub amount_in: String,
    pub protocol: String,
}

/// Arguments of the `bridge` function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeArgs {
    pub from_chain: String,
    pub to_chain: String,
    pub token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
}

/// A decoded operation request. Serializes to the bare argument object so it
/// can be echoed back as `params` in the structured output.
///
/// Built only from a function call whose name picks the variant; there is no
/// `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationRequest {
    Swap(SwapArgs),
    Bridge(BridgeArgs),
}

impl OperationRequest {
    pub fn action(&self) -> Action {
        match self {
            OperationRequest::Swap(_) => Action::Swap,
            OperationRequest::Bridge(_) => Action::Bridge,
        }
    }
}

/// Structured result returned for a fully validated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationOutput {
    pub action: Action,
    pub protocol: String,
    pub chain: String,
    pub params: OperationRequest,
}

/// Models sometimes emit numeric-looking fields as JSON numbers; keep the
/// boundary tolerant of that while still storing the amount as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Text(text) => text,
        Amount::Number(number) => number.to_string(),
    })
}
