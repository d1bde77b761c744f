use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "grocery_backend";

/// Forwards domain log lines to `tracing`, tagged with the component that
/// emitted them (e.g. `grocery_item`, `category`).
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, component = self.component, "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, component = self.component, "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, component = self.component, "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, component = self.component, "{message}");
    }
}
