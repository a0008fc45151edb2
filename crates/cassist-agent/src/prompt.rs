//! System prompt sent with every extraction request

use cassist_core::constants::HELP_TEXT;

/// Build the system prompt, embedding the help text so the model knows the
/// supported actions, protocols and chains.
pub fn system_message() -> String {
    format!(
        "You are a helpful assistant for crypto operations.

{HELP_TEXT}

If the user asks for unsupported actions or provides unclear inputs, guide them towards these supported operations."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message_embeds_help() {
        let message = system_message();
        assert!(message.starts_with("You are a helpful assistant for crypto operations."));
        assert!(message.contains("Supported Chains:"));
        assert!(!message.contains("{HELP_TEXT}"));
    }
}
