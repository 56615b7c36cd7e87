// Adapters layer: reqwest-backed implementations of the collaborator ports.

pub mod huggingface;
pub mod newsapi;

pub use huggingface::InferenceClient;
pub use newsapi::NewsApiClient;

/// Upstream error bodies are forwarded as JSON when they parse, raw text otherwise.
pub(crate) fn upstream_detail(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_detail_prefers_json() {
        assert_eq!(
            upstream_detail(br#"{"error":"loading","estimated_time":20.0}"#),
            json!({"error": "loading", "estimated_time": 20.0})
        );
        assert_eq!(upstream_detail(b"Bad Gateway"), json!("Bad Gateway"));
        assert_eq!(upstream_detail(b""), json!(""));
    }
}
