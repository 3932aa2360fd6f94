// ============================================================
// Layer 6 — Tracing Reporter
// ============================================================
// Forwards pipeline diagnostics to the `tracing` macros.
// Where they end up (console, filter level) is decided by the
// subscriber installed in main.rs.

use crate::domain::traits::Reporter;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
