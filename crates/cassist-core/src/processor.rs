//! Response processing
//!
//! Turns extractor output into a [`Reply`]. Function-call arguments are mapped
//! to the typed [`OperationRequest`] union at the boundary; anything that does
//! not match one of the two known shapes is rejected before validation.

use cassist_types::{
    Action, BridgeArgs, ExtractorOutput, FunctionCall, OperationOutput, OperationRequest,
    SwapArgs,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::{BRIDGE_PROTOCOL, SWAP_CHAIN, SWAP_PROTOCOL};
use crate::error::ValidationError;
use crate::validation::validate_command;

/// Outcome of one request: a structured operation or a message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Reply {
    Operation(OperationOutput),
    Guidance(String),
}

impl Reply {
    pub fn operation(&self) -> Option<&OperationOutput> {
        match self {
            Reply::Operation(output) => Some(output),
            Reply::Guidance(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Reply::Operation(_) => None,
            Reply::Guidance(message) => Some(message),
        }
    }
}

/// Decode a function call into a typed request.
pub fn decode_function_call(call: &FunctionCall) -> Result<OperationRequest, ValidationError> {
    let action: Action = call
        .name
        .parse()
        .map_err(|_| ValidationError::UnsupportedAction(call.name.clone()))?;

    let decoded = match action {
        Action::Swap => serde_json::from_str::<SwapArgs>(&call.arguments).map(OperationRequest::Swap),
        Action::Bridge => {
            serde_json::from_str::<BridgeArgs>(&call.arguments).map(OperationRequest::Bridge)
        }
    };

    decoded.map_err(|e| {
        warn!("Malformed {} arguments {:?}: {}", action, call.arguments, e);
        ValidationError::Unparseable
    })
}

/// Build the structured output for an already validated request.
///
/// Swaps always report `uniswap` on `ethereum`, whatever protocol was
/// extracted. Bridges report `across` and a `from->to` chain route.
pub fn build_output(request: OperationRequest) -> OperationOutput {
    match request {
        OperationRequest::Swap(args) => OperationOutput {
            action: Action::Swap,
            protocol: SWAP_PROTOCOL.to_string(),
            chain: SWAP_CHAIN.to_string(),
            params: OperationRequest::Swap(args),
        },
        OperationRequest::Bridge(args) => OperationOutput {
            action: Action::Bridge,
            protocol: BRIDGE_PROTOCOL.to_string(),
            chain: format!("{}->{}", args.from_chain, args.to_chain),
            params: OperationRequest::Bridge(args),
        },
    }
}

/// Process one extractor output into a reply.
pub fn process_extraction(output: ExtractorOutput) -> Reply {
    let call = match output {
        ExtractorOutput::PlainText(text) => {
            debug!("Extractor answered in plain text");
            return Reply::Guidance(text);
        }
        ExtractorOutput::FunctionCall(call) => call,
    };

    info!("Extractor selected function: {}", call.name);

    let validated = decode_function_call(&call).and_then(|request| {
        validate_command(&request)?;
        Ok(request)
    });

    match validated {
        Ok(request) => Reply::Operation(build_output(request)),
        Err(e) => Reply::Guidance(e.to_string()),
    }
}
