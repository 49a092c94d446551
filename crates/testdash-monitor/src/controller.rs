//! The dashboard controller: UI glue between the run control, the test
//! list, the log view, and the server connection.

use std::sync::{Arc, Mutex};

use testdash_core::message::{ClientCommand, ServerMessage, TransportEvent};
use testdash_core::traits::{CommandChannel, TestRunner};
use testdash_core::types::{wall_clock_time, LogEntry, LogLevel, TestCatalog, TestItem};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Input events forwarded from the TUI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    RunTest,
    SelectNext,
    SelectPrev,
    Quit,
}

/// Render snapshot.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub entries: Vec<LogEntry>,
    pub tests: Vec<TestItem>,
}

struct Inner {
    /// Append-only; entries are never mutated, reordered, or evicted.
    log: Vec<LogEntry>,
    catalog: TestCatalog,
}

/// Owns the log store and selection state, dispatches transport
/// messages, and triggers runs.
///
/// Constructed explicitly by the entry point and handed to whatever
/// needs it; one clone runs the event loop while another feeds the
/// render snapshot.
#[derive(Clone)]
pub struct DashboardController {
    inner: Arc<Mutex<Inner>>,
    channel: Arc<dyn CommandChannel>,
    runner: Arc<dyn TestRunner>,
}

impl DashboardController {
    pub fn new(
        channel: Arc<dyn CommandChannel>,
        runner: Arc<dyn TestRunner>,
        catalog: TestCatalog,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                log: Vec::new(),
                catalog,
            })),
            channel,
            runner,
        }
    }

    /// Process events until the UI quits or every source closes.
    pub async fn run(
        &self,
        mut ui: mpsc::UnboundedReceiver<UiEvent>,
        mut transport: mpsc::UnboundedReceiver<TransportEvent>,
        mut entries: mpsc::UnboundedReceiver<LogEntry>,
    ) {
        loop {
            tokio::select! {
                Some(event) = ui.recv() => match event {
                    UiEvent::RunTest => self.run_test().await,
                    UiEvent::SelectNext => self.select_next(),
                    UiEvent::SelectPrev => self.select_prev(),
                    UiEvent::Quit => return,
                },
                Some(event) = transport.recv() => self.on_transport(event),
                Some(entry) = entries.recv() => self.append(entry),
                else => return,
            }
        }
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> DashboardState {
        let inner = self.inner.lock().unwrap();
        DashboardState {
            entries: inner.log.clone(),
            tests: inner.catalog.items().to_vec(),
        }
    }

    /// Trigger a run: the runner records the start entry and schedules
    /// the remaining steps; if the transport is open, a run request is
    /// additionally sent, fire-and-forget.
    pub async fn run_test(&self) {
        if let Err(e) = self.runner.start(testdash_core::message::DEFAULT_TEST_ID) {
            warn!("Failed to start run: {}", e);
        }

        if self.channel.is_open() {
            if let Err(e) = self.channel.send(ClientCommand::run_default_test()).await {
                warn!("Run request not sent: {}", e);
            }
        }
    }

    pub fn select_next(&self) {
        self.inner.lock().unwrap().catalog.select_next();
    }

    pub fn select_prev(&self) {
        self.inner.lock().unwrap().catalog.select_prev();
    }

    /// Append one entry to the log view.
    pub fn append(&self, entry: LogEntry) {
        self.inner.lock().unwrap().log.push(entry);
    }

    fn on_transport(&self, event: TransportEvent) {
        match event {
            TransportEvent::Opened => {
                self.append(LogEntry::now(
                    LogLevel::Info,
                    "setup",
                    "Connected to test server",
                ));
            }
            TransportEvent::Message(message) => self.on_message(message),
            TransportEvent::Error(error) => warn!("Transport error: {}", error),
            TransportEvent::Closed => info!("Disconnected from test server"),
        }
    }

    fn on_message(&self, message: ServerMessage) {
        match message {
            ServerMessage::Log {
                timestamp,
                level,
                step,
                message,
            } => {
                let time = timestamp.unwrap_or_else(wall_clock_time);
                self.append(LogEntry::new(time, level, step, message));
            }
            ServerMessage::Status { status } => info!("Status: {}", status),
            ServerMessage::Progress { value } => debug!("Test progress: {}%", value),
            ServerMessage::TestComplete { success, message } => {
                info!(success, "Test run finished: {}", message)
            }
            ServerMessage::Unknown => {}
        }
    }
}
