//! Third-party scheduling widget.
//!
//! The widget script and stylesheet are fetched once in the background.
//! Until that succeeds every popup call fails with [`SchedulerError::NotLoaded`]
//! and the scheduling controls render disabled.

use std::time::Instant;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use url::Url;

use crate::constants::{
    POPUP_LOADING, WIDGET_FETCH_TIMEOUT, WIDGET_PRIMARY_COLOR, WIDGET_SCRIPT_URL,
    WIDGET_SECONDARY_COLOR, WIDGET_STYLESHEET_URL,
};

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduling widget not loaded")]
    NotLoaded,
    #[error("invalid scheduling url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{0} returned an empty body")]
    EmptyAsset(String),
}

/// Sizes of the fetched widget assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetAssets {
    pub script_bytes: usize,
    pub stylesheet_bytes: usize,
}

/// Result of the background widget load, delivered to the event loop.
#[derive(Debug)]
pub enum SchedulerMessage {
    Loaded(WidgetAssets),
    Failed(String),
}

async fn fetch_asset(client: &reqwest::Client, url: &str) -> Result<String, SchedulerError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SchedulerError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Err(SchedulerError::EmptyAsset(url.to_string()));
    }
    Ok(body)
}

/// Fetch the widget script and stylesheet.
pub async fn fetch_widget_assets(client: &reqwest::Client) -> Result<WidgetAssets, SchedulerError> {
    let script = fetch_asset(client, WIDGET_SCRIPT_URL).await?;
    let stylesheet = fetch_asset(client, WIDGET_STYLESHEET_URL).await?;
    Ok(WidgetAssets {
        script_bytes: script.len(),
        stylesheet_bytes: stylesheet.len(),
    })
}

/// Load the widget in the background and report the outcome on `tx`.
/// There is no retry.
pub fn spawn_widget_loader(tx: mpsc::Sender<SchedulerMessage>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match reqwest::Client::builder()
            .timeout(WIDGET_FETCH_TIMEOUT)
            .build()
        {
            Ok(client) => fetch_widget_assets(&client).await,
            Err(e) => Err(SchedulerError::Request(e)),
        };

        let message = match result {
            Ok(assets) => {
                tracing::info!(
                    "Scheduling widget loaded ({} + {} bytes)",
                    assets.script_bytes,
                    assets.stylesheet_bytes
                );
                SchedulerMessage::Loaded(assets)
            }
            Err(e) => {
                tracing::error!("Failed to load scheduling widget: {}", e);
                SchedulerMessage::Failed(e.to_string())
            }
        };
        let _ = tx.send(message).await;
    })
}

// =============================================================================
// Widget state
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Popup {
    #[default]
    Hidden,
    /// Loading overlay shown before the popup appears.
    Loading { url: Url, since: Instant },
    Open { url: Url },
}

/// Client-side handle to the scheduling widget.
#[derive(Debug, Default)]
pub struct SchedulerWidget {
    load: LoadState,
    popup: Popup,
    /// Last initialised popup, reopened by `show_popup_widget` after a hide.
    last_url: Option<Url>,
}

impl SchedulerWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn is_popup_visible(&self) -> bool {
        self.popup != Popup::Hidden
    }

    /// Apply the outcome of the background load.
    pub fn handle_message(&mut self, message: SchedulerMessage) {
        self.load = match message {
            SchedulerMessage::Loaded(_) => LoadState::Loaded,
            SchedulerMessage::Failed(err) => LoadState::Failed(err),
        };
    }

    fn ensure_loaded(&self, operation: &str) -> Result<(), SchedulerError> {
        if self.is_loaded() {
            Ok(())
        } else {
            tracing::error!("{} called before the scheduling widget loaded", operation);
            Err(SchedulerError::NotLoaded)
        }
    }

    /// Open the popup for `url` behind the loading overlay.
    pub fn init_popup_widget(&mut self, url: &str) -> Result<(), SchedulerError> {
        self.ensure_loaded("init_popup_widget")?;
        let url = popup_url(url)?;
        tracing::info!("Opening scheduling popup: {}", url);
        self.last_url = Some(url.clone());
        self.popup = Popup::Loading {
            url,
            since: Instant::now(),
        };
        Ok(())
    }

    /// Show the popup for `url` immediately.
    pub fn show_popup_widget(&mut self, url: &str) -> Result<(), SchedulerError> {
        self.ensure_loaded("show_popup_widget")?;
        let url = popup_url(url)?;
        self.last_url = Some(url.clone());
        self.popup = Popup::Open { url };
        Ok(())
    }

    /// Hide the popup. It can be shown again with [`Self::reopen`].
    pub fn hide_popup_widget(&mut self) -> Result<(), SchedulerError> {
        self.ensure_loaded("hide_popup_widget")?;
        self.popup = Popup::Hidden;
        Ok(())
    }

    /// Close the popup and forget it.
    pub fn close_popup_widget(&mut self) -> Result<(), SchedulerError> {
        self.ensure_loaded("close_popup_widget")?;
        self.popup = Popup::Hidden;
        self.last_url = None;
        Ok(())
    }

    /// Reopen the last hidden popup, if any.
    pub fn reopen(&mut self) -> Result<bool, SchedulerError> {
        self.ensure_loaded("reopen")?;
        match self.last_url.clone() {
            Some(url) if self.popup == Popup::Hidden => {
                self.popup = Popup::Open { url };
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// URL of the popup currently shown, if any.
    pub fn popup_target(&self) -> Option<&Url> {
        match &self.popup {
            Popup::Hidden => None,
            Popup::Loading { url, .. } | Popup::Open { url } => Some(url),
        }
    }

    /// Advance the loading overlay. Returns true when the popup just opened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Popup::Loading { url, since } = &self.popup {
            if now.saturating_duration_since(*since) >= POPUP_LOADING {
                self.popup = Popup::Open { url: url.clone() };
                return true;
            }
        }
        false
    }
}

/// Scheduling URL with the widget brand colours applied.
pub fn popup_url(url: &str) -> Result<Url, SchedulerError> {
    let mut url = Url::parse(url)?;
    url.query_pairs_mut()
        .append_pair("primary_color", WIDGET_PRIMARY_COLOR.trim_start_matches('#'))
        .append_pair(
            "secondary_color",
            WIDGET_SECONDARY_COLOR.trim_start_matches('#'),
        );
    Ok(url)
}

// =============================================================================
// Tests
// =============================================================================
