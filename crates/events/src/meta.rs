use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Level;
use uuid::Uuid;

/// Structured metadata that accompanies every event emission.
///
/// Lets the CLI correlate the events of one scan or clean run in the logs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    /// Unique identifier for this specific event.
    pub event_id: Uuid,
    /// Operation identifier shared by all events of one run.
    pub correlation_id: Option<String>,
    /// Timestamp captured at emission time.
    pub timestamp: DateTime<Utc>,
    /// Severity used for routing to logging systems and alerting.
    pub level: EventLevel,
    /// Subsystem/component that originated the event.
    pub source: EventSource,
}

impl EventMeta {
    /// Create a new metadata instance for a given source and level.
    #[must_use]
    pub fn new(level: impl Into<EventLevel>, source: impl Into<EventSource>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            correlation_id: None,
            timestamp: Utc::now(),
            level: level.into(),
            source: source.into(),
        }
    }

    /// Attach a correlation identifier used to stitch related events.
    #[must_use]
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Convert the metadata level into a tracing level for downstream logging.
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        self.level.into()
    }
}

/// Lightweight severity levels used by the event system.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<EventLevel> for Level {
    fn from(level: EventLevel) -> Self {
        match level {
            EventLevel::Trace => Level::TRACE,
            EventLevel::Debug => Level::DEBUG,
            EventLevel::Info => Level::INFO,
            EventLevel::Warn => Level::WARN,
            EventLevel::Error => Level::ERROR,
        }
    }
}

impl From<Level> for EventLevel {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            EventLevel::Error
        } else if level == Level::WARN {
            EventLevel::Warn
        } else if level == Level::INFO {
            EventLevel::Info
        } else if level == Level::DEBUG {
            EventLevel::Debug
        } else {
            EventLevel::Trace
        }
    }
}

/// Component/feature that originated the event.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub struct EventSource(Cow<'static, str>);

impl EventSource {
    pub const GENERAL: Self = Self::const_str("general");
    pub const SCAN: Self = Self::const_str("scan");
    pub const CLEANUP: Self = Self::const_str("cleanup");
    pub const CATALOG: Self = Self::const_str("catalog");
    pub const STORAGE: Self = Self::const_str("storage");

    const fn const_str(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Borrow the underlying identifier used for logging/telemetry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for EventSource {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for EventSource {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}
