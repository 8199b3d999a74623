/// Destination for user-interaction events.
///
/// Components that emit events receive a sink explicitly instead of reaching
/// for a globally mounted dispatcher.
pub trait EventSink {
    fn log_event(&self, category: &str, action: &str, label: Option<&str>);
}

/// Sink that forwards every event to the `tracing` pipeline.
pub struct TracingEvents;

impl EventSink for TracingEvents {
    fn log_event(&self, category: &str, action: &str, label: Option<&str>) {
        tracing::info!(category, action, label, "analytics event");
    }
}
