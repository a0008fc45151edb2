//! Cassist Core
//!
//! Local validation and response processing for the crypto assistant. The
//! language-model call sits behind [`IntentExtractor`]; everything else in the
//! request path (allow-lists, amount bounds, output shaping) lives here.

pub mod assistant;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod mock;
pub mod processor;
pub mod validation;

// Re-export key types for convenience
pub use assistant::{Assistant, Reply};
pub use config::AssistantConfig;
pub use error::{AmountError, ConfigError, ValidationError};
pub use extractor::IntentExtractor;
pub use processor::{build_output, decode_function_call, process_extraction};
pub use validation::{validate_amount, validate_bridge, validate_command, validate_swap};
