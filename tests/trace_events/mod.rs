//! Trace events emitted by searches when the `tracing` feature is on.

use std::fmt;
use std::sync::{Arc, Mutex};

use error_tree::{find, find_simple};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

use crate::common::{PointerError, ValueError, Wrapped};

/// Records every event as `field=value` pairs.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Recorder {
    fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }
}

struct Fields(String);

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(&format!("{}={:?}", field.name(), value));
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Fields(String::new());
        event.record(&mut fields);
        self.events.lock().unwrap().push((*event.metadata().level(), fields.0));
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn reconciling_search_emits_trace_events() {
    let recorder = Recorder::default();
    let err = Wrapped::new("outer", Box::new(PointerError(4)));

    let found = tracing::subscriber::with_default(recorder.clone(), || {
        find::<PointerError>(&err)
    });
    assert_eq!(found, Some(PointerError(4)));

    let events = recorder.events();
    assert!(events.iter().all(|(level, _)| *level == Level::TRACE));
    assert!(events
        .iter()
        .any(|(_, fields)| fields.contains("classified requested error shape")
            && fields.contains("kind=ValuePrimary")));
    assert!(events
        .iter()
        .any(|(_, fields)| fields.contains("error found in cause tree")
            && fields.contains("position=1")
            && fields.contains("path=Reconciled")));
}

#[test]
fn simple_search_never_classifies() {
    let recorder = Recorder::default();

    let found = tracing::subscriber::with_default(recorder.clone(), || {
        find_simple::<ValueError>(&Wrapped::new("outer", ValueError(1)))
    });
    assert_eq!(found, Some(ValueError(1)));

    let events = recorder.events();
    assert!(!events.iter().any(|(_, fields)| fields.contains("classified")));
    assert!(events.iter().any(|(_, fields)| fields.contains("path=Direct")));
}
