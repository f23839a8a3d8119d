//! Desktop notifications for copied contact details.
//!
//! Uses the `notify-rust` crate. Works on Windows, macOS, and Linux.

use notify_rust::{Notification, Timeout};

/// Build the notification shown after a value was copied.
pub fn copied_notification(label: &str, value: &str) -> Notification {
    let mut notification = Notification::new();
    notification
        .summary(&format!("{} copied", label))
        .body(value)
        .appname("Portfolio")
        .timeout(Timeout::Milliseconds(3000));
    notification
}

/// Notify that `value` was copied, on a blocking thread.
pub fn send_copied_notification(label: &str, value: &str) {
    let label = label.to_string();
    let value = value.to_string();
    tokio::task::spawn_blocking(move || match copied_notification(&label, &value).show() {
        Ok(_) => tracing::info!("Notification sent for copied {}", label),
        Err(e) => tracing::warn!("Failed to show notification: {}", e),
    });
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_notification_text() {
        let n = copied_notification("Email", "zuga677@gmail.com");
        assert_eq!(n.summary, "Email copied");
        assert_eq!(n.body, "zuga677@gmail.com");
    }

    /// This test actually shows a notification on your desktop!
    /// Run with: cargo test test_notification_shows -- --ignored --nocapture
    #[test]
    #[ignore]
    fn test_notification_shows() {
        let result = copied_notification("Phone", "+38762287237").show();
        assert!(result.is_ok(), "Notification should send without error");
    }
}
