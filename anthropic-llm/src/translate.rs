//! Maps an Anthropic response envelope onto the two host output shapes.

use crate::anthropic::{AnthropicContentBlock, AnthropicResponse};
use crate::error::{LlmError, Result};
use crate::types::ToolInvocation;

/// Text of the first `text` block, verbatim.
pub fn extract_text(response: &AnthropicResponse) -> Result<String> {
    response
        .content
        .iter()
        .find_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text.clone()),
            _ => None,
        })
        .ok_or(LlmError::EmptyResponse)
}

/// Every `tool_use` block in envelope order.
///
/// The model normally leads with a text block before its tool calls, so fewer
/// than two blocks means it answered without calling anything. A `tool_use`
/// block in first position is still returned.
pub fn extract_tool_calls(response: &AnthropicResponse) -> Result<Vec<ToolInvocation>> {
    if response.content.len() < 2 {
        return Err(LlmError::NoToolResponse);
    }

    let calls: Vec<ToolInvocation> = response
        .content
        .iter()
        .filter_map(|block| match block {
            AnthropicContentBlock::ToolUse { name, input, .. } => Some(ToolInvocation {
                name: name.clone(),
                input: input.clone(),
            }),
            _ => None,
        })
        .collect();

    if calls.is_empty() {
        return Err(LlmError::NoToolResponse);
    }
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(content: serde_json::Value) -> AnthropicResponse {
        serde_json::from_value(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-opus-20240229",
            "content": content,
            "stop_reason": "end_turn",
            "stop_sequence": null,
            "usage": {"input_tokens": 1, "output_tokens": 1}
        }))
        .expect("envelope decodes")
    }

    #[test]
    fn text_comes_from_first_block() {
        let resp = envelope(json!([
            {"type": "text", "text": "hello"},
            {"type": "text", "text": "ignored"}
        ]));
        assert_eq!(extract_text(&resp).expect("text extracted"), "hello");
    }

    #[test]
    fn text_is_returned_verbatim() {
        let resp = envelope(json!([{"type": "text", "text": "  line one\n\nline two  "}]));
        assert_eq!(
            extract_text(&resp).expect("text extracted"),
            "  line one\n\nline two  "
        );
    }

    #[test]
    fn text_skips_leading_non_text_blocks() {
        let resp = envelope(json!([
            {"type": "tool_use", "id": "t1", "name": "search", "input": {}},
            {"type": "text", "text": "after tool"}
        ]));
        assert_eq!(extract_text(&resp).expect("text extracted"), "after tool");
    }

    #[test]
    fn empty_content_is_empty_response() {
        let resp = envelope(json!([]));
        assert!(matches!(extract_text(&resp), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn content_without_text_is_empty_response() {
        let resp = envelope(json!([{"type": "tool_use", "id": "t1", "name": "search", "input": {}}]));
        assert!(matches!(extract_text(&resp), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn tool_calls_follow_leading_text() {
        let resp = envelope(json!([
            {"type": "text", "text": "..."},
            {"type": "tool_use", "id": "t1", "name": "search", "input": {"q": "x"}}
        ]));
        let calls = extract_tool_calls(&resp).expect("tool calls extracted");
        assert_eq!(
            serde_json::to_value(&calls).expect("calls encode"),
            json!([{"name": "search", "input": {"q": "x"}}])
        );
    }

    #[test]
    fn tool_calls_keep_envelope_order_and_skip_non_tool_blocks() {
        let resp = envelope(json!([
            {"type": "text", "text": "plan"},
            {"type": "tool_use", "id": "t1", "name": "first", "input": {"n": 1}},
            {"type": "text", "text": "between"},
            {"type": "tool_use", "id": "t2", "name": "second", "input": {"n": 2}}
        ]));
        let calls = extract_tool_calls(&resp).expect("tool calls extracted");
        let names: Vec<&str> = calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(calls[1].input["n"], 2);
    }

    #[test]
    fn leading_tool_use_is_not_dropped() {
        let resp = envelope(json!([
            {"type": "tool_use", "id": "t1", "name": "first", "input": {}},
            {"type": "tool_use", "id": "t2", "name": "second", "input": {}}
        ]));
        let calls = extract_tool_calls(&resp).expect("tool calls extracted");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "first");
    }

    #[test]
    fn single_block_is_no_tool_response() {
        let resp = envelope(json!([{"type": "text", "text": "just text"}]));
        assert!(matches!(extract_tool_calls(&resp), Err(LlmError::NoToolResponse)));

        let resp = envelope(json!([]));
        assert!(matches!(extract_tool_calls(&resp), Err(LlmError::NoToolResponse)));
    }

    #[test]
    fn blocks_without_tool_use_are_no_tool_response() {
        let resp = envelope(json!([
            {"type": "text", "text": "a"},
            {"type": "text", "text": "b"}
        ]));
        assert!(matches!(extract_tool_calls(&resp), Err(LlmError::NoToolResponse)));
    }
}
