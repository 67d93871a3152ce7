use serde::Serialize;

/// What part of the session an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Category,
    Field,
    Generate,
    Notice,
    Render,
    Ignored,
}

/// One step of a viewing session, kept for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub sequence: u64,
    pub kind: EventKind,
    pub message: String,
}

/// Ordered session trace.
///
/// Sequence numbers keep increasing across `drain` calls so a host that
/// drains periodically can still order everything it has seen.
#[derive(Debug, Default)]
pub struct EventBus {
    next_sequence: u64,
    events: Vec<Event>,
    limit: Option<usize>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` events, dropping the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn emit(&mut self, kind: EventKind, message: impl Into<String>) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.events.push(Event {
            sequence,
            kind,
            message: message.into(),
        });
        if let Some(limit) = self.limit {
            if self.events.len() > limit {
                let excess = self.events.len() - limit;
                self.events.drain(..excess);
            }
        }
        sequence
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, EventKind};

    #[test]
    fn records_events_in_sequence() {
        let mut bus = EventBus::new();
        assert_eq!(bus.emit(EventKind::Category, "by_state"), 0);
        assert_eq!(bus.emit(EventKind::Field, "region=SP"), 1);
        assert_eq!(bus.events().len(), 2);
        assert_eq!(bus.last().unwrap().kind, EventKind::Field);
    }

    #[test]
    fn drain_clears_events_but_not_sequence() {
        let mut bus = EventBus::new();
        bus.emit(EventKind::Render, "home");
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.events().is_empty());
        assert_eq!(bus.emit(EventKind::Render, "points"), 1);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut bus = EventBus::with_limit(2);
        bus.emit(EventKind::Field, "a");
        bus.emit(EventKind::Field, "b");
        bus.emit(EventKind::Field, "c");
        let messages: Vec<&str> = bus.events().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(bus.events()[0].sequence, 1);
    }

    #[test]
    fn kinds_serialize_snake_case() {
        let mut bus = EventBus::new();
        bus.emit(EventKind::Notice, "missing level");
        let json = serde_json::to_string(&bus.events()[0]).unwrap();
        assert_eq!(
            json,
            r#"{"sequence":0,"kind":"notice","message":"missing level"}"#
        );
    }
}
