//! System clipboard and browser access.

use arboard::Clipboard;
use tracing::{error, warn};

/// Outcome of a background copy, reported back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { label: String },
    Failed { label: String, reason: String },
}

fn write_text(text: String) -> Result<(), String> {
    match Clipboard::new() {
        Ok(mut cb) => cb.set_text(text).map_err(|e| {
            error!("Failed to set clipboard text: {}", e);
            e.to_string()
        }),
        Err(e) => {
            warn!("Failed to initialize clipboard for copy: {}", e);
            Err(e.to_string())
        }
    }
}

/// Copy `text` on a blocking thread.
///
/// `label` names the copied value in the outcome, e.g. "Email".
pub async fn copy_text(label: impl Into<String>, text: impl Into<String>) -> CopyOutcome {
    let label = label.into();
    let text = text.into();
    let result = tokio::task::spawn_blocking(move || write_text(text)).await;
    match result {
        Ok(Ok(())) => CopyOutcome::Copied { label },
        Ok(Err(reason)) => CopyOutcome::Failed { label, reason },
        Err(e) => CopyOutcome::Failed {
            label,
            reason: e.to_string(),
        },
    }
}

/// Open `target` with the system handler (browser for URLs).
pub fn open_link(target: &str) -> Result<(), opener::OpenError> {
    opener::open_browser(target).inspect_err(|e| {
        error!("Failed to open {}: {}", target, e);
    })
}
