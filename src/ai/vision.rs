use crate::ai::common::{request_chat_content, OPENAI_CHAT_URL};
use crate::ai::prompts::JEWELRY_ANALYSIS_PROMPT;
use anyhow::Result;
use base64::Engine as _;
use tracing::instrument;

/// Ask the vision model for a free-text description of a jewelry image.
///
/// The returned text is opaque to the caller; the estimator pattern-matches
/// it without any trust in its accuracy. `url` overrides the OpenAI endpoint
/// (used by tests and the `OPENAI_CHAT_URL` env setting).
#[instrument(level = "trace", skip(api_key, jpeg_bytes))]
pub async fn describe_jewelry(
    api_key: &str,
    model: &str,
    jpeg_bytes: &[u8],
    url: Option<&str>,
) -> Result<String> {
    let url = url.unwrap_or(OPENAI_CHAT_URL);
    describe_jewelry_inner(api_key, model, jpeg_bytes, url).await
}

#[cfg_attr(not(test), allow(dead_code))]
#[instrument(level = "trace", skip(api_key, jpeg_bytes))]
pub async fn describe_jewelry_inner(
    api_key: &str,
    model: &str,
    jpeg_bytes: &[u8],
    url: &str,
) -> Result<String> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(jpeg_bytes);
    let data_url = format!("data:image/jpeg;base64,{}", encoded);
    let body = serde_json::json!({
        "model": model,
        "messages": [
            {
                "role": "user",
                "content": [
                    { "type": "text", "text": JEWELRY_ANALYSIS_PROMPT },
                    { "type": "image_url", "image_url": { "url": data_url } }
                ]
            }
        ]
    });

    request_chat_content(api_key, &body, url).await
}
