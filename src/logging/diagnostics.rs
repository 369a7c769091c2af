//! Tracing layer forwarding warnings to the presentation layer.
//!
//! Selection failures are returned as errors and also emitted as `warn!`
//! events. This layer turns those events into [`Diagnostic`] values on a
//! channel so a UI shell can surface them (e.g. a fallback banner).

use std::fmt::{self, Write as _};
use std::sync::mpsc::Sender;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// One captured diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the event.
    pub level: Level,
    /// The event's message.
    pub message: String,
    /// Remaining fields as `name=value` pairs, space separated.
    pub fields: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        if !self.fields.is_empty() {
            write!(f, " ({})", self.fields)?;
        }
        Ok(())
    }
}

/// Layer sending every event at `max_level` or more severe to a channel.
#[derive(Debug)]
pub struct DiagnosticLayer {
    sender: Sender<Diagnostic>,
    max_level: Level,
}

impl DiagnosticLayer {
    /// Forward `WARN` and `ERROR` events to `sender`.
    pub fn new(sender: Sender<Diagnostic>) -> Self {
        Self::with_max_level(sender, Level::WARN)
    }

    /// Forward events at `max_level` or more severe.
    pub fn with_max_level(sender: Sender<Diagnostic>, max_level: Level) -> Self {
        Self { sender, max_level }
    }
}

impl<S: Subscriber> Layer<S> for DiagnosticLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        // Level ordering: TRACE > DEBUG > INFO > WARN > ERROR
        if level > self.max_level {
            return;
        }

        let mut visitor = DiagnosticVisitor::default();
        event.record(&mut visitor);

        // Receiver gone means nobody is listening any more
        let _ = self.sender.send(Diagnostic {
            level,
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct DiagnosticVisitor {
    message: String,
    fields: String,
}

impl Visit for DiagnosticVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

impl DiagnosticVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}
