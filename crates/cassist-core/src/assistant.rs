//! The request pipeline: help short-circuit, extraction, processing

use tracing::{error, info, instrument};

use crate::constants::{transport_error_message, HELP_TEXT};
use crate::extractor::IntentExtractor;
use crate::processor::process_extraction;

pub use crate::processor::Reply;

/// Processes natural-language requests one at a time.
///
/// Holds no per-request state; every call to [`Assistant::process`] is
/// independent apart from the single outbound extractor call.
pub struct Assistant {
    extractor: Box<dyn IntentExtractor>,
}

impl Assistant {
    pub fn new(extractor: Box<dyn IntentExtractor>) -> Self {
        Self { extractor }
    }

    /// `help` and `?` are answered locally.
    pub fn is_help_request(input: &str) -> bool {
        let input = input.trim();
        input.eq_ignore_ascii_case("help") || input == "?"
    }

    /// Turn one line of user text into a reply. Never fails: extractor errors
    /// become a retry prompt.
    #[instrument(skip(self))]
    pub async fn process(&self, input: &str) -> Reply {
        let input = input.trim();

        if Self::is_help_request(input) {
            return Reply::Guidance(HELP_TEXT.to_string());
        }

        match self.extractor.extract_intent(input).await {
            Ok(output) => {
                let reply = process_extraction(output);
                info!(structured = reply.operation().is_some(), "Request processed");
                reply
            }
            Err(e) => {
                error!("Intent extraction failed: {:#}", e);
                Reply::Guidance(transport_error_message(&e))
            }
        }
    }
}
