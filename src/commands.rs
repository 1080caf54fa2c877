//! Simple Tauri command handlers.
//!
//! Thin wrappers that bridge frontend invoke() calls to Rust.
//! Each command does one thing: list a catalog, clamp input, read state,
//! write the clipboard, open a link.
//!
//! The multi-step generation commands live in pipeline.rs instead.

use crate::catalog::{LawArea, LegalTerm};
use crate::llm::{self, prompts};
use serde::Serialize;
use tauri_plugin_shell::ShellExt;

/// Tauri command: catalog labels for the law-area selector, display order.
#[tauri::command]
pub fn law_areas() -> Vec<&'static str> {
    LawArea::ALL.iter().map(|a| a.label()).collect()
}

/// Tauri command: catalog labels for the legal-term selector, display order.
#[tauri::command]
pub fn legal_terms() -> Vec<&'static str> {
    LegalTerm::ALL.iter().map(|t| t.label()).collect()
}

/// Result of clamping a topic against the input cap.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCheck {
    pub text: String,
    pub truncated: bool,
    pub max_chars: usize,
}

/// Tauri command: clamp a topic to the character cap.
///
/// Called by the shell on input so the stored value never exceeds the cap;
/// the shell shows its truncation toast when `truncated` is set.
#[tauri::command]
pub fn check_topic(topic: String) -> TopicCheck {
    let (text, truncated) = prompts::clamp_topic(&topic);
    TopicCheck {
        text,
        truncated,
        max_chars: prompts::MAX_TOPIC_CHARS,
    }
}

/// Tauri command: current accumulator text and loading flag.
///
/// Lets a window that attaches mid-generation catch up without replaying
/// the chunk events.
#[tauri::command]
pub fn get_guidance(state: tauri::State<'_, llm::GuidanceState>) -> llm::GuidanceSnapshot {
    state.snapshot()
}

/// Tauri command: copy the accumulated guidance to the system clipboard.
///
/// Uses arboard for native clipboard access — works reliably unlike
/// navigator.clipboard in webview windows. Prepends the attribution line
/// shown in the copied document.
#[tauri::command]
pub fn copy_guidance(state: tauri::State<'_, llm::GuidanceState>) -> Result<(), String> {
    let snapshot = state.snapshot();
    if snapshot.text.is_empty() {
        return Err("No guidance to copy yet".to_string());
    }

    let document = format!("\nBy: Counsel Desk \n\n{}", snapshot.text);
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(&document).map_err(|e| e.to_string())?;
    log::info!("[ACTION] Copied {} chars to clipboard", document.len());
    Ok(())
}

/// Tauri command: open a page-chrome link in the system browser.
#[tauri::command]
pub async fn open_external(app: tauri::AppHandle, url: String) -> Result<(), String> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(format!("Refusing to open non-http URL: {url}"));
    }
    app.shell()
        .open(url.as_str(), None)
        .map_err(|e| e.to_string())?;
    log::info!("[ACTION] Opened external link: {}", url);
    Ok(())
}
