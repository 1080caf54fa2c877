//! LLM domain — the streaming guidance pipeline.
//!
//! Public API for the generation layer of Counsel Desk.
//! External code should only use the items exported here.
//!
//! Layout:
//!   - generate.rs  — the stream consumer (one POST, chunk loop, events)
//!   - streaming.rs — incremental UTF-8 decoding across chunk boundaries
//!   - prompts.rs   — fixed prompt templates + input clamping
//!   - types.rs     — failure records and event payloads

pub mod generate;
pub mod prompts;
pub mod streaming;
pub mod types;

pub use generate::{generate, generate_streaming, GenerateError};
pub use types::{GuidanceFailure, GuidanceSnapshot, RateLimitInfo};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Thread-safe storage for the guidance accumulator and the loading flag.
/// Written only by the single in-flight generation task; read by commands
/// and by late-loading windows via get_guidance.
pub struct GuidanceState {
    text: Mutex<String>,
    loading: AtomicBool,
}

impl GuidanceState {
    pub fn new() -> Self {
        Self {
            text: Mutex::new(String::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// Start a new generation: clear any previous output, raise the flag.
    /// Runs before any network I/O so the UI never shows stale text.
    pub fn begin(&self) {
        self.text.lock().unwrap().clear();
        self.loading.store(true, Ordering::SeqCst);
    }

    /// Append a decoded fragment in arrival order and return the full text
    /// so far. The returned value is always a prefix of the final text.
    pub fn append(&self, delta: &str) -> String {
        let mut text = self.text.lock().unwrap();
        text.push_str(delta);
        text.clone()
    }

    /// Lower the loading flag. Called on every exit path of a generation,
    /// including the empty-body path (see DESIGN.md).
    pub fn finish(&self) {
        self.loading.store(false, Ordering::SeqCst);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> GuidanceSnapshot {
        GuidanceSnapshot {
            text: self.text.lock().unwrap().clone(),
            loading: self.is_loading(),
        }
    }
}

impl Default for GuidanceState {
    fn default() -> Self {
        Self::new()
    }
}
