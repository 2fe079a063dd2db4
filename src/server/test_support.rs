use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts tracing events of every level on the current thread.
#[derive(Clone, Default)]
pub struct EventCounter {
    total: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let counter = Self::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        (counter, tracing::subscriber::set_default(subscriber))
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.total.fetch_add(1, Ordering::SeqCst);
        if *event.metadata().level() == Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}
