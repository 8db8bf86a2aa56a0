//! Event handling and progress display

use console::{Style, Term};
use mediagc_events::{AppEvent, CleanupEvent, EventLevel, EventMessage, GeneralEvent, ScanEvent};

use crate::logging::log_event_with_tracing;

/// Event handler for progress display and user feedback
///
/// Status lines go to stderr so stdout stays clean for the final result.
pub struct EventHandler {
    term: Term,
    colors_enabled: bool,
    debug_enabled: bool,
    quiet: bool,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(colors_enabled: bool, debug_enabled: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            colors_enabled,
            debug_enabled,
            quiet,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, message: EventMessage) {
        log_event_with_tracing(&message);

        if self.quiet || !self.should_display(&message) {
            return;
        }

        let line = message.event.message();
        match message.meta.level {
            EventLevel::Error => self.show_error(&line),
            EventLevel::Warn => self.show_warning(&line),
            _ => self.show_status(&line),
        }
    }

    fn should_display(&self, message: &EventMessage) -> bool {
        if self.debug_enabled {
            return true;
        }
        match &message.event {
            AppEvent::General(
                GeneralEvent::DebugLog { .. }
                | GeneralEvent::OperationStarted { .. }
                | GeneralEvent::OperationCompleted { .. },
            )
            | AppEvent::Scan(ScanEvent::CatalogPage { .. } | ScanEvent::Completed { .. })
            | AppEvent::Cleanup(CleanupEvent::Completed { .. }) => false,
            _ => !matches!(message.meta.level, EventLevel::Trace | EventLevel::Debug),
        }
    }

    /// Show status message
    fn show_status(&self, message: &str) {
        let _ = self.term.write_line(message);
    }

    /// Show warning message
    fn show_warning(&self, message: &str) {
        let line = format!("warning: {message}");
        let line = if self.colors_enabled {
            Style::new().yellow().apply_to(line).to_string()
        } else {
            line
        };
        let _ = self.term.write_line(&line);
    }

    /// Show error message
    fn show_error(&self, message: &str) {
        let line = format!("error: {message}");
        let line = if self.colors_enabled {
            Style::new().red().bold().apply_to(line).to_string()
        } else {
            line
        };
        let _ = self.term.write_line(&line);
    }
}
