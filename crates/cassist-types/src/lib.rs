//! Cassist Types
//!
//! Shared types for the crypto assistant: the supported actions, protocols and
//! chains, the typed operation requests decoded from extractor output, and the
//! structured result emitted for a valid request.

pub mod extractor;
pub mod operation;

pub use extractor::{ExtractorOutput, FunctionCall};
pub use operation::{
    Action, BridgeArgs, Chain, OperationOutput, OperationRequest, Protocol, SwapArgs,
};
