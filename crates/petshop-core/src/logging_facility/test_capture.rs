//! In-memory event capture for log assertions in tests
//!
//! `init_test_capture()` installs a subscriber that keeps every event
//! (debug level included) in a shared buffer. The buffer is process-wide and
//! tests run in parallel, so assertions should filter on a value unique to
//! the test, usually the pet id.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use petshop_core_types::schema::{
    EVENT_STAGE, FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_PET_ID, FIELD_REQUEST_ID,
    FIELD_STAGE, FIELD_TRACE_ID,
};

/// One recorded event, every field rendered to a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
    /// Fields of the enclosing spans, inner spans overriding outer ones
    pub span_fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    /// `start`, `end`, `end_error` or `stage`
    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.span_fields.get(FIELD_REQUEST_ID).map(String::as_str)
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.span_fields.get(FIELD_TRACE_ID).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldRecorder(BTreeMap<String, String>);

impl FieldRecorder {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

/// Subscriber layer appending every event to a shared buffer
pub struct TestCaptureLayer {
    buffer: Buffer,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let buffer = Buffer::default();
        (
            Self {
                buffer: buffer.clone(),
            },
            TestCapture { buffer },
        )
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        attrs.record(&mut recorder);
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(recorder);
        }
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            if let Some(recorder) = span.extensions_mut().get_mut::<FieldRecorder>() {
                values.record(recorder);
            }
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);

        let mut span_fields = BTreeMap::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                if let Some(fields) = span.extensions().get::<FieldRecorder>() {
                    span_fields.extend(fields.0.clone());
                }
            }
        }

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: recorder.0,
            span_fields,
        };
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Read handle on the captured events
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events of `op` whose `field` equals `value`
    pub fn events_where(&self, op: &str, field: &str, value: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op) && e.field(field) == Some(value))
            .collect()
    }

    /// Events of `op` about one pet
    pub fn events_for_pet(&self, op: &str, pet_id: &str) -> Vec<CapturedEvent> {
        self.events_where(op, FIELD_PET_ID, pet_id)
    }

    /// Stage names logged by `op` for one pet, in emission order
    pub fn stages_for_pet(&self, op: &str, pet_id: &str) -> Vec<String> {
        self.events_for_pet(op, pet_id)
            .into_iter()
            .filter(|e| e.event() == Some(EVENT_STAGE))
            .filter_map(|e| e.field(FIELD_STAGE).map(str::to_string))
            .collect()
    }

    /// Number of captured `op`/`event` pairs matching `pet_id`
    pub fn count_for_pet(&self, op: &str, event: &str, pet_id: &str) -> usize {
        self.events_for_pet(op, pet_id)
            .iter()
            .filter(|e| e.event() == Some(event))
            .count()
    }

    /// # Panics
    ///
    /// Panics if no event of `op` with the given event name was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "no {}/{} event among {} captured",
            op,
            event,
            events.len()
        );
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber once per process and return its handle
///
/// # Example
///
/// ```
/// use petshop_core::logging_facility::test_capture::init_test_capture;
/// use petshop_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op", pet_id = "doc-pet");
/// assert_eq!(capture.events_for_pet("doc_example_op", "doc-pet").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            // a subscriber installed elsewhere wins; the handle then stays empty
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}
