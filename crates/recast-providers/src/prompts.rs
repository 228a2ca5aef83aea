//! Prompt text shared by every provider.
//!
//! The same system prompt goes to every vendor so that reply parsing stays
//! uniform. The user prompt is not escaped: sources or instructions that
//! themselves contain the delimiter lines will confuse the model.

/// Instruction asking the model for a bare `{"code": "..."}` JSON object.
pub const SYSTEM_PROMPT: &str = "
You are a code-transformation assistant.
Reply with a JSON object: { \"code\": \"<transformed code here>\" }
Do not include anything else.
";

/// Delimiter line preceding the source text.
pub const SOURCE_DELIMITER: &str = "<<<SOURCE>>>";

/// Delimiter line preceding the instruction text.
pub const INSTRUCTION_DELIMITER: &str = "<<<INSTRUCTION>>>";

/// Render the user message: delimiter, trimmed source, delimiter, trimmed instruction.
pub fn build_user_prompt(source: &str, instruction: &str) -> String {
    [
        SOURCE_DELIMITER,
        source.trim(),
        INSTRUCTION_DELIMITER,
        instruction.trim(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_layout() {
        let prompt = build_user_prompt("  let x = 1;\n", "\n rename x to y ");
        assert_eq!(
            prompt,
            "<<<SOURCE>>>\nlet x = 1;\n<<<INSTRUCTION>>>\nrename x to y"
        );
    }

    #[test]
    fn test_user_prompt_is_deterministic() {
        assert_eq!(build_user_prompt("a", "b"), build_user_prompt("a", "b"));
    }

    #[test]
    fn test_system_prompt_asks_for_code_json() {
        assert!(SYSTEM_PROMPT.contains("code-transformation"));
        assert!(SYSTEM_PROMPT.contains("{ \"code\""));
    }
}
