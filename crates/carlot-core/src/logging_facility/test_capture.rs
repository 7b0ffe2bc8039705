//! In-memory capture of operation lifecycle events
//!
//! Installs a layer that keeps every event carrying an `op` field, decoded into
//! a typed [`CapturedEvent`], so tests can assert on the facade's logging.

use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use carlot_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_EVENT,
    FIELD_OP, FIELD_REMOVED, FIELD_ROW_COUNT, FIELD_VEHICLE_ID,
};

/// Lifecycle position of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    End,
    EndError,
}

impl Phase {
    fn parse(value: &str) -> Option<Self> {
        match value {
            EVENT_START => Some(Phase::Start),
            EVENT_END => Some(Phase::End),
            EVENT_END_ERROR => Some(Phase::EndError),
            _ => None,
        }
    }
}

/// One captured operation event
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: String,
    pub phase: Option<Phase>,
    pub vehicle_id: Option<String>,
    pub err_code: Option<String>,
    pub duration_ms: Option<u64>,
    pub row_count: Option<u64>,
    pub removed: Option<bool>,
}

#[derive(Default)]
struct EventFields {
    op: Option<String>,
    phase: Option<Phase>,
    vehicle_id: Option<String>,
    err_code: Option<String>,
    duration_ms: Option<u64>,
    row_count: Option<u64>,
    removed: Option<bool>,
}

impl EventFields {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            FIELD_OP => self.op = Some(value),
            FIELD_EVENT => self.phase = Phase::parse(&value),
            FIELD_VEHICLE_ID => self.vehicle_id = Some(value),
            FIELD_ERR_CODE => self.err_code = Some(value),
            _ => {}
        }
    }

    fn into_event(self, level: Level) -> Option<CapturedEvent> {
        Some(CapturedEvent {
            level,
            op: self.op?,
            phase: self.phase,
            vehicle_id: self.vehicle_id,
            err_code: self.err_code,
            duration_ms: self.duration_ms,
            row_count: self.row_count,
            removed: self.removed,
        })
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            FIELD_DURATION_MS => self.duration_ms = Some(value),
            FIELD_ROW_COUNT => self.row_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == FIELD_REMOVED {
            self.removed = Some(value);
        }
    }

    // `%value` fields arrive here already formatted with Display
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.set_text(field.name(), format!("{:?}", value));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if let Some(captured) = fields.into_event(*event.metadata().level()) {
            self.events
                .lock()
                .map(|mut events| events.push(captured))
                .ok();
        }
    }
}

/// Shared handle to the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Every captured operation event, oldest first
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events for one operation name
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| e.op == op).collect()
    }

    /// Events for one operation touching one vehicle
    pub fn events_for_vehicle(&self, op: &str, vehicle_id: &str) -> Vec<CapturedEvent> {
        self.events_for_op(op)
            .into_iter()
            .filter(|e| e.vehicle_id.as_deref() == Some(vehicle_id))
            .collect()
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics unless an event for `op` in `phase` was captured.
    pub fn assert_event_exists(&self, op: &str, phase: Phase) {
        let found = self.count_events(|e| e.op == op && e.phase == Some(phase));
        assert!(found > 0, "no {:?} event captured for op={}", phase, op);
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only)
///
/// Every test in the process writes to the same buffer, so assertions should
/// key on an op name or vehicle id unique to the test.
///
/// ```
/// use carlot_core::logging_facility::test_capture::{init_test_capture, Phase};
/// use carlot_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", Phase::Start);
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_parses_schema_event_names() {
        assert_eq!(Phase::parse(EVENT_START), Some(Phase::Start));
        assert_eq!(Phase::parse(EVENT_END), Some(Phase::End));
        assert_eq!(Phase::parse(EVENT_END_ERROR), Some(Phase::EndError));
        assert_eq!(Phase::parse("list_all"), None);
    }

    #[test]
    fn test_events_without_op_are_dropped() {
        let mut fields = EventFields::default();
        fields.set_text(FIELD_VEHICLE_ID, "v1".to_string());
        assert!(fields.into_event(Level::DEBUG).is_none());
    }

    #[test]
    fn test_text_fields_are_typed() {
        let mut fields = EventFields::default();
        fields.set_text(FIELD_OP, "vehicle_update".to_string());
        fields.set_text(FIELD_EVENT, EVENT_END_ERROR.to_string());
        fields.set_text(FIELD_ERR_CODE, "ERR_NOT_FOUND".to_string());

        let event = fields.into_event(Level::ERROR).unwrap();
        assert_eq!(event.op, "vehicle_update");
        assert_eq!(event.phase, Some(Phase::EndError));
        assert_eq!(event.err_code.as_deref(), Some("ERR_NOT_FOUND"));
        assert!(event.vehicle_id.is_none());
    }
}
