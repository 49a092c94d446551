//! Wire messages and transport events.

use serde::{Deserialize, Serialize};

use crate::types::LogLevel;

/// The test requested when the run control is triggered.
pub const DEFAULT_TEST_ID: &str = "search-test";

/// Inbound message from the orchestration server, validated at the
/// boundary. `progress` and `testComplete` are part of the server protocol
/// but carry no UI effect; anything else falls into `Unknown` and is
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    Log {
        #[serde(default)]
        timestamp: Option<String>,
        level: LogLevel,
        #[serde(default)]
        step: String,
        message: String,
    },
    Status {
        status: String,
    },
    Progress {
        value: u32,
    },
    TestComplete {
        success: bool,
        message: String,
    },
    #[serde(other)]
    Unknown,
}

/// Outbound message to the orchestration server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum ClientCommand {
    RunTest {
        #[serde(rename = "testId")]
        test_id: String,
    },
}

impl ClientCommand {
    /// The fire-and-forget run request for the default test.
    pub fn run_default_test() -> Self {
        ClientCommand::RunTest {
            test_id: DEFAULT_TEST_ID.to_string(),
        }
    }
}

/// Event surfaced by the transport to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// A connection was established.
    Opened,
    /// An inbound message was parsed.
    Message(ServerMessage),
    /// A transport-level error. Diagnostic only; the subsequent close, if
    /// any, drives recovery.
    Error(String),
    /// The connection terminated. The supervisor schedules the retry.
    Closed,
}
