//! Integration test support for the Royal Plate widget.
//!
//! Provides a recording host, a recording side channel, and a helper that
//! wires a full [`OrderView`] against in-memory storage, so tests can drive
//! complete add/edit/submit flows and assert on everything the widget asked
//! the page to do.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use royal_plate_widget::{
    MemoryStorage, OrderHost, OrderPayload, OrderView, SideChannel, WidgetConfig,
};
use url::Url;

/// Everything the widget asked the host page to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The cart container was re-rendered with this HTML.
    Rendered(String),
    /// The count badge was set.
    CountSet(usize),
    /// A toast was shown.
    Notified(String),
    /// A confirmation was requested.
    Confirmed(String),
    /// The visible order link was pointed at a URL.
    LinkSet(Url),
    /// A URL was opened in a new browsing context.
    Opened(Url),
}

/// Recording host with a scriptable confirmation answer.
#[derive(Debug)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    confirm_answer: AtomicBool,
}

impl RecordingHost {
    /// Create a host that answers confirmations with `true`.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        })
    }

    /// Script the answer for subsequent confirmation prompts.
    pub fn answer_confirmations_with(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    /// All recorded events, in order.
    #[must_use]
    pub fn events(&self) -> Vec<HostEvent> {
        self.lock().clone()
    }

    /// The most recent rendered HTML, if any render happened.
    #[must_use]
    pub fn last_render(&self) -> Option<String> {
        self.lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                HostEvent::Rendered(html) => Some(html.clone()),
                _ => None,
            })
    }

    /// The most recent badge value, if any was set.
    #[must_use]
    pub fn last_count(&self) -> Option<usize> {
        self.lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                HostEvent::CountSet(count) => Some(*count),
                _ => None,
            })
    }

    /// All toast messages, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Notified(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// All URLs opened in new browsing contexts, in order.
    #[must_use]
    pub fn opened_urls(&self) -> Vec<Url> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Opened(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: HostEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HostEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrderHost for RecordingHost {
    fn render_cart(&self, html: &str) {
        self.record(HostEvent::Rendered(html.to_owned()));
    }

    fn set_cart_count(&self, count: usize) {
        self.record(HostEvent::CountSet(count));
    }

    fn notify(&self, message: &str) {
        self.record(HostEvent::Notified(message.to_owned()));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.record(HostEvent::Confirmed(prompt.to_owned()));
        self.confirm_answer.load(Ordering::SeqCst)
    }

    fn open_url(&self, url: &Url) {
        self.record(HostEvent::Opened(url.clone()));
    }

    fn set_order_link(&self, url: &Url) {
        self.record(HostEvent::LinkSet(url.clone()));
    }
}

/// Recording side channel; captures dispatched payloads instead of POSTing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSideChannel {
    payloads: Arc<Mutex<Vec<OrderPayload>>>,
}

impl RecordingSideChannel {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All dispatched payloads, in order.
    #[must_use]
    pub fn payloads(&self) -> Vec<OrderPayload> {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SideChannel for RecordingSideChannel {
    fn dispatch(&self, payload: OrderPayload) {
        self.payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload);
    }
}

/// A fully wired widget over in-memory storage.
pub struct TestContext {
    /// The view under test.
    pub view: OrderView<Arc<MemoryStorage>, Arc<RecordingHost>>,
    /// Shared handle to the backing storage.
    pub storage: Arc<MemoryStorage>,
    /// Shared handle to the recording host.
    pub host: Arc<RecordingHost>,
    /// The recording side channel the view dispatches to.
    pub side_channel: RecordingSideChannel,
}

impl TestContext {
    /// Wire a view with the default configuration and a recording side
    /// channel.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        let storage = Arc::new(MemoryStorage::new());
        let host = RecordingHost::new();
        let side_channel = RecordingSideChannel::new();
        let view = OrderView::with_side_channel(
            Arc::clone(&storage),
            Arc::clone(&host),
            Box::new(side_channel.clone()),
            WidgetConfig::default(),
        );
        Self {
            view,
            storage,
            host,
            side_channel,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a tracing subscriber once for the test binary.
pub fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "royal_plate_widget=debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}
