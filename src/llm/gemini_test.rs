use super::*;

fn make_response(parts: serde_json::Value) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": parts, "role": "model" },
            "finishReason": "STOP"
        }],
        "modelVersion": "gemini-2.5-flash",
        "usageMetadata": { "promptTokenCount": 100, "candidatesTokenCount": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([{ "text": "{\"story\": \"…\"}" }]));
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.text, "{\"story\": \"…\"}");
    assert_eq!(resp.model, "gemini-2.5-flash");
    assert_eq!(resp.finish_reason, "STOP");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_joins_multiple_text_parts() {
    let json = make_response(serde_json::json!([
        { "text": "{\"story\": " },
        { "text": "\"x\"}" }
    ]));
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.text, "{\"story\": \"x\"}");
}

#[test]
fn parse_no_candidates_errors() {
    let json = serde_json::json!({
        "promptFeedback": { "blockReason": "SAFETY" }
    })
    .to_string();
    let err = parse_response(&json, "gemini-2.5-flash").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
    assert!(err.to_string().contains("no candidates"));
}

#[test]
fn parse_no_text_parts_errors() {
    let json = make_response(serde_json::json!([{ "inlineData": { "mimeType": "image/png" } }]));
    let err = parse_response(&json, "gemini-2.5-flash").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
    assert!(err.to_string().contains("no text parts"));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json", "gemini-2.5-flash").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_missing_usage_defaults_to_zero() {
    let json = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
    })
    .to_string();
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.input_tokens, 0);
    assert_eq!(resp.output_tokens, 0);
    assert_eq!(resp.finish_reason, "");
    // Wire omitted modelVersion: fall back to the requested model.
    assert_eq!(resp.model, "gemini-2.5-flash");
}

#[test]
fn api_errors_report_retryability() {
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
    assert!(!LlmError::ApiResponse { status: 400, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("bad".into()).retryable());
}
