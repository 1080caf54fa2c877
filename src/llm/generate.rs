//! Guidance generation — the streaming consumer.
//!
//! One POST to the generation endpoint, then a chunk-by-chunk read of the
//! response body. Emits Tauri events as text becomes available:
//! - "guidance-chunk" for every decoded fragment (delta + full text so far)
//! - "guidance-complete" when the stream ends
//! - "guidance-error" when the endpoint rejects the request
//!
//! A rejected request (status outside the success range) is terminal: no
//! retry, the user resubmits manually. Transport failures propagate to the
//! caller; whatever text was already appended stays visible.

use super::streaming::Utf8StreamDecoder;
use super::types::{GuidanceChunk, GuidanceFailure, RateLimitInfo};
use super::GuidanceState;
use tauri::Emitter;

/// How a generation attempt failed. `Rejected` carries the structured
/// failure record so callers can branch without exception matching.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("{}", .0.message)]
    Rejected(GuidanceFailure),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Stream a guidance request, feeding the shared accumulator and emitting
/// UI events per fragment. Returns the full accumulated text.
///
/// The loading flag is raised before any network I/O and lowered on every
/// exit path — success, empty body, rejection, transport failure.
pub async fn generate_streaming(
    app: &tauri::AppHandle,
    state: &GuidanceState,
    endpoint: &str,
    prompt: &str,
) -> Result<String, GenerateError> {
    // Clear stale output before the request goes out.
    state.begin();

    log::info!("[LLM] Endpoint: {}", endpoint);
    log::info!("[LLM] Prompt: {} chars", prompt.len());

    let start = std::time::Instant::now();

    let client = reqwest::Client::new();
    let mut response = match client
        .post(endpoint)
        .header("content-type", "application/json")
        .json(&serde_json::json!({ "prompt": prompt }))
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("[LLM] HTTP request failed: {}", e);
            state.finish();
            return Err(e.into());
        }
    };

    let status = response.status();
    if !status.is_success() {
        // Headers must be captured before the body read consumes the response.
        let headers = RateLimitInfo::from_headers(response.headers());
        let body = response.text().await.unwrap_or_default();
        log::error!("[LLM] Endpoint returned {}: {}", status, body);
        if let Some(remaining) = &headers.remaining {
            log::warn!("[LLM] Rate limit remaining: {}", remaining);
        }

        let failure = GuidanceFailure::new(status.as_u16(), body, headers);
        state.finish();
        let _ = app.emit("guidance-error", &failure);
        return Err(GenerateError::Rejected(failure));
    }

    let ttfb_ms = start.elapsed().as_millis();
    log::info!("[LLM] TTFB: {}ms", ttfb_ms);

    let mut decoder = Utf8StreamDecoder::new();
    let mut ttft_logged = false;

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let delta = decoder.decode(&chunk);
                if delta.is_empty() {
                    continue;
                }
                if !ttft_logged {
                    log::info!("[LLM] TTFT: {}ms", start.elapsed().as_millis());
                    ttft_logged = true;
                }
                let text = state.append(&delta);
                let _ = app.emit("guidance-chunk", &GuidanceChunk { delta, text });
            }
            Ok(None) => break,
            Err(e) => {
                log::error!("[LLM] Stream error: {}", e);
                state.finish();
                return Err(e.into());
            }
        }
    }

    // Flush bytes the decoder may still be holding at end of stream.
    let tail = decoder.finish();
    if !tail.is_empty() {
        let text = state.append(&tail);
        let _ = app.emit("guidance-chunk", &GuidanceChunk { delta: tail, text });
    }

    let text = state.snapshot().text;
    log::info!(
        "[LLM] Stream complete: {}ms, {} chars accumulated",
        start.elapsed().as_millis(),
        text.len()
    );

    // Completion event first (the shell scrolls the output into view),
    // then lower the loading flag.
    let _ = app.emit("guidance-complete", &text);
    state.finish();

    Ok(text)
}

/// Stream a guidance request and collect the full text without UI events
/// or shared state. Same request and decode logic as the app pipeline.
/// Used by integration tests, not the main pipeline.
pub async fn generate(endpoint: &str, prompt: &str) -> Result<String, GenerateError> {
    let client = reqwest::Client::new();
    let mut response = client
        .post(endpoint)
        .header("content-type", "application/json")
        .json(&serde_json::json!({ "prompt": prompt }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let headers = RateLimitInfo::from_headers(response.headers());
        let body = response.text().await.unwrap_or_default();
        return Err(GenerateError::Rejected(GuidanceFailure::new(
            status.as_u16(),
            body,
            headers,
        )));
    }

    let mut decoder = Utf8StreamDecoder::new();
    let mut accumulated = String::new();
    while let Some(chunk) = response.chunk().await? {
        accumulated.push_str(&decoder.decode(&chunk));
    }
    accumulated.push_str(&decoder.finish());

    Ok(accumulated)
}
