//! Function schemas offered to the model

use cassist_types::Action;
use rig::completion::ToolDefinition;
use serde_json::json;

/// Schema for the `swap` function.
pub fn swap_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: Action::Swap.to_string(),
        description: "Swap tokens on Uniswap (Ethereum)".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "token_in": {
                    "type": "string",
                    "description": "Token to swap from"
                },
                "token_out": {
                    "type": "string",
                    "description": "Token to swap to"
                },
                "amount_in": {
                    "type": "string",
                    "description": "Amount of token_in to swap"
                },
                "protocol": {
                    "type": "string",
                    "description": "The protocol to be used"
                }
            },
            "required": ["token_in", "token_out", "amount_in", "protocol"]
        }),
    }
}

/// Schema for the `bridge` function.
pub fn bridge_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: Action::Bridge.to_string(),
        description: "Bridge tokens from one chain to another using Across protocol".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "from_chain": {
                    "type": "string",
                    "description": "Source chain"
                },
                "to_chain": {
                    "type": "string",
                    "description": "Destination chain"
                },
                "token": {
                    "type": "string",
                    "description": "Token to bridge"
                },
                "amount": {
                    "type": "string",
                    "description": "Amount of token to bridge"
                }
            },
            "required": ["from_chain", "to_chain", "token", "amount"]
        }),
    }
}

/// Both operation schemas, in the order they are offered.
pub fn operation_tools() -> Vec<ToolDefinition> {
    vec![swap_tool_definition(), bridge_tool_definition()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_match_properties() {
        for tool in operation_tools() {
            let properties = tool.parameters["properties"]
                .as_object()
                .expect("properties object");
            let required = tool.parameters["required"]
                .as_array()
                .expect("required array");

            assert_eq!(properties.len(), required.len(), "tool {}", tool.name);
            for field in required {
                let field = field.as_str().unwrap();
                assert!(properties.contains_key(field), "{} missing {field}", tool.name);
                assert_eq!(properties[field]["type"], "string");
            }
        }
    }

    #[test]
    fn test_tool_names_match_actions() {
        let names: Vec<String> = operation_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["swap", "bridge"]);
    }
}
