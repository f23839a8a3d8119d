//! Portfolio TUI
//!
//! A terminal-based personal portfolio.

pub mod app;
pub mod assets;
pub mod clipboard;
pub mod constants;
pub mod models;
pub mod notifications;
pub mod scheduler;
pub mod theme;
pub mod timing;
pub mod ui;
pub mod utils;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use app::{App, AppConfig, AppState, Effect, InputOps, StateOps, UiEvent};
use clipboard::{copy_text, open_link, CopyOutcome};
use constants::{MAX_LOG_LINES, SHADOW_DEBOUNCE, TICK_INTERVAL, TIMELINE_DEBOUNCE, WHEEL_THROTTLE};
use notifications::send_copied_notification;
use scheduler::{spawn_widget_loader, SchedulerMessage};
use timing::{Debouncer, Throttler};
use ui::render_dashboard;

type Callback = Box<dyn Fn() + Send + Sync>;

/// Timers and sinks that effects are executed against.
struct Runtime {
    logs: Vec<String>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    shadows: Debouncer<Callback>,
    timeline: Debouncer<Callback>,
}

impl Runtime {
    fn new(ui_tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            logs: vec!["Portfolio started.".to_string()],
            shadows: Debouncer::new(post(&ui_tx, UiEvent::ShadowsSettled), SHADOW_DEBOUNCE),
            timeline: Debouncer::new(post(&ui_tx, UiEvent::TimelineSettled), TIMELINE_DEBOUNCE),
            ui_tx,
        }
    }

    fn log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.drain(0..MAX_LOG_LINES / 2);
        }
    }

    /// Run `effects`. Returns `true` when the app should quit.
    fn execute(&mut self, app: &App, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Quit => quit = true,
                Effect::RefreshShadows => self.shadows.call(),
                Effect::TrackTimeline => self.timeline.call(),
                Effect::Copy { label, value } => {
                    let tx = self.ui_tx.clone();
                    let notify = app.config.notifications_enabled;
                    tokio::spawn(async move {
                        let outcome = copy_text(label.clone(), value.clone()).await;
                        if notify && matches!(outcome, CopyOutcome::Copied { .. }) {
                            send_copied_notification(&label, &value);
                        }
                        let _ = tx.send(UiEvent::Copied(outcome));
                    });
                }
                Effect::OpenUrl(url) => match open_link(&url) {
                    Ok(()) => self.log(format!("Opened {}", url)),
                    Err(e) => self.log(format!("Could not open {}: {}", url, e)),
                },
                Effect::SaveConfig => {
                    if let Err(e) = app.config.save() {
                        tracing::warn!("Failed to save settings: {}", e);
                        self.log(format!("Failed to save settings: {}", e));
                    }
                }
                Effect::Log(line) => self.log(line),
            }
        }
        quit
    }
}

/// Callback that posts `event` to the loop.
fn post(tx: &mpsc::UnboundedSender<UiEvent>, event: UiEvent) -> Callback {
    let tx = tx.clone();
    Box::new(move || {
        let _ = tx.send(event.clone());
    })
}

/// Run the TUI application.
async fn run_app() -> anyhow::Result<()> {
    // Log to a file to avoid corrupting TUI output
    let log_file = std::fs::File::create("portfolio.log")?;
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load();
    let mut app = App::new(config);

    let (scheduler_tx, mut scheduler_rx) = mpsc::channel::<SchedulerMessage>(4);
    spawn_widget_loader(scheduler_tx);

    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let mut runtime = Runtime::new(ui_tx.clone());
    let wheel = Throttler::new(post(&ui_tx, UiEvent::WheelStep), WHEEL_THROTTLE);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let effects = app.on_resize(size.width, size.height);
    runtime.execute(&app, effects);

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let mut reader = EventStream::new();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                runtime.log("Received shutdown signal...".to_string());
                app.change_state(AppState::Exit);
                break;
            }
            _ = interval.tick() => {
                let effects = app.tick(std::time::Instant::now());
                if runtime.execute(&app, effects) {
                    break;
                }

                let mut failure = None;
                if let Err(e) = terminal.draw(|frame| {
                    failure = render_dashboard(frame, &app, &runtime.logs);
                }) {
                    tracing::error!("Failed to draw: {}", e);
                }
                if let Some(e) = failure {
                    app.versatilist.trip(e);
                }
            }
            Some(Ok(event)) = reader.next() => {
                let effects = match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    Event::Mouse(mouse) => {
                        if app.handle_mouse(mouse) {
                            wheel.call();
                        }
                        Vec::new()
                    }
                    Event::Resize(width, height) => app.on_resize(width, height),
                    _ => Vec::new(),
                };
                if runtime.execute(&app, effects) {
                    break;
                }
            }
            Some(message) = scheduler_rx.recv() => {
                match &message {
                    SchedulerMessage::Loaded(_) => runtime.log("Scheduling widget ready.".to_string()),
                    SchedulerMessage::Failed(e) => {
                        runtime.log(format!("Scheduling unavailable: {}", e))
                    }
                }
                app.scheduler.handle_message(message);
            }
            Some(event) = ui_rx.recv() => {
                let effects = app.handle_ui_event(event);
                if runtime.execute(&app, effects) {
                    break;
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run_app().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
