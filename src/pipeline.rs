//! Generation pipeline commands.
//!
//! The two multi-step orchestration commands:
//! - generate_guidance: clamp topic → build prompt → stream into accumulator
//! - explain_term: catalog term → build prompt → same streaming flow

use crate::catalog::{LawArea, LegalTerm};
use crate::llm::{self, prompts, GenerateError};
use crate::settings_commands::resolve_endpoint;
use tauri::Emitter;

/// Tauri command: generate legal guidance for a described problem.
///
/// Clamps the topic to the 600-character cap (emitting "topic-truncated"
/// when the cap bites), builds the fixed guidance prompt, and streams the
/// endpoint response into the shared accumulator. Returns the full text.
#[tauri::command]
pub async fn generate_guidance(
    app: tauri::AppHandle,
    state: tauri::State<'_, llm::GuidanceState>,
    topic: String,
    law_area: LawArea,
) -> Result<String, String> {
    let (topic, truncated) = prompts::clamp_topic(&topic);
    if truncated {
        log::info!("[PIPELINE] Topic clamped to {} chars", prompts::MAX_TOPIC_CHARS);
        let _ = app.emit("topic-truncated", prompts::MAX_TOPIC_CHARS);
    }

    // Resubmission is gated by the UI loading flag only; a second request
    // while one is in flight is a documented gap, not rejected here.
    if state.is_loading() {
        log::warn!("[PIPELINE] Generation requested while another is in flight");
    }

    let prompt = prompts::build_guidance_prompt(&topic, law_area);
    log::info!("[PIPELINE] Law area: {}", law_area);

    run_generation(&app, &state, &prompt).await
}

/// Tauri command: explain a legal term from the fine-grained catalog.
///
/// Same streaming flow as generate_guidance over the term template.
#[tauri::command]
pub async fn explain_term(
    app: tauri::AppHandle,
    state: tauri::State<'_, llm::GuidanceState>,
    term: LegalTerm,
) -> Result<String, String> {
    if state.is_loading() {
        log::warn!("[PIPELINE] Generation requested while another is in flight");
    }

    let prompt = prompts::build_term_prompt(term);
    log::info!("[PIPELINE] Legal term: {}", term);

    run_generation(&app, &state, &prompt).await
}

/// Shared tail of both pipelines: resolve the endpoint, run the stream
/// consumer, map errors to the command boundary. Rejections already emitted
/// their structured "guidance-error" event inside the consumer; transport
/// failures surface here as a generic error string for the shell's alert.
async fn run_generation(
    app: &tauri::AppHandle,
    state: &llm::GuidanceState,
    prompt: &str,
) -> Result<String, String> {
    let endpoint = resolve_endpoint();
    let start = std::time::Instant::now();

    match llm::generate_streaming(app, state, &endpoint, prompt).await {
        Ok(text) => {
            log::info!("[PIPELINE] Total: {}ms", start.elapsed().as_millis());
            Ok(text)
        }
        Err(GenerateError::Rejected(failure)) => {
            log::warn!(
                "[PIPELINE] Rejected: status={}, remaining={:?}",
                failure.status,
                failure.headers.remaining
            );
            Err(failure.message)
        }
        Err(GenerateError::Transport(e)) => {
            log::error!("[PIPELINE] Transport failure: {}", e);
            Err(format!("An error occurred. Please try again. ({e})"))
        }
    }
}
