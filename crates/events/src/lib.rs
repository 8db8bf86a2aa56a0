#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for async communication in mediagc
//!
//! Library crates never print. Progress and diagnostics leave the reconciler
//! as events on an unbounded channel; the CLI decides how to render and log
//! them.
//!
//! ## Architecture
//!
//! - **Domain-driven events**: events grouped by functional domain (scan, cleanup)
//! - **Unified `EventEmitter` trait**: single fire-and-forget API for all emissions
//! - **Metadata envelope**: every event travels with an [`EventMeta`] for log correlation

pub mod meta;
pub use meta::{EventLevel, EventMeta, EventSource};

pub mod events;
pub use events::{AppEvent, CleanupEvent, FailureContext, GeneralEvent, ScanEvent};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// An event together with its emission metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub meta: EventMeta,
    pub event: AppEvent,
}

impl EventMessage {
    /// Wrap an event, deriving level and source from the event itself
    #[must_use]
    pub fn new(event: AppEvent) -> Self {
        let meta = EventMeta::new(event.log_level(), event.event_source());
        Self { meta, event }
    }

    /// Wrap an event and tag it with a correlation id (operation id)
    #[must_use]
    pub fn with_correlation(event: AppEvent, correlation_id: impl Into<String>) -> Self {
        let mut message = Self::new(event);
        message.meta = message.meta.with_correlation_id(correlation_id);
        message
    }
}

/// Type alias for event sender
pub type EventSender = UnboundedSender<EventMessage>;

/// Type alias for event receiver
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<EventMessage>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The unified trait for emitting events throughout mediagc
///
/// Emission is fire-and-forget: a missing or dropped receiver never affects
/// the operation producing the events.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Correlation id attached to every emitted event, if any
    fn correlation_id(&self) -> Option<&str> {
        None
    }

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            let message = match self.correlation_id() {
                Some(id) => EventMessage::with_correlation(event, id),
                None => EventMessage::new(event),
            };
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(message);
        }
    }

    /// Emit a debug log event
    fn emit_debug(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::debug(message)));
    }

    /// Emit a warning event
    fn emit_warning(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning(message)));
    }

    /// Emit a warning event with context
    fn emit_warning_with_context(&self, message: impl Into<String>, context: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning_with_context(
            message, context,
        )));
    }

    /// Emit an error event
    fn emit_error(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::error(message)));
    }

    /// Emit an operation started event
    fn emit_operation_started(&self, operation: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationStarted {
            operation: operation.into(),
        }));
    }

    /// Emit an operation completed event
    fn emit_operation_completed(&self, operation: impl Into<String>, success: bool) {
        self.emit(AppEvent::General(GeneralEvent::OperationCompleted {
            operation: operation.into(),
            success,
        }));
    }

    /// Emit an operation failed event
    fn emit_operation_failed(&self, operation: impl Into<String>, failure: FailureContext) {
        self.emit(AppEvent::General(GeneralEvent::OperationFailed {
            operation: operation.into(),
            failure,
        }));
    }
}

/// Implementation of `EventEmitter` for the raw `EventSender`
impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}

/// An emitter that drops everything, for callers without a progress sink
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEmitter;

impl EventEmitter for NullEmitter {
    fn event_sender(&self) -> Option<&EventSender> {
        None
    }
}
