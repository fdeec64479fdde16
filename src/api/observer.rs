use tracing::debug;

use crate::core::models::ExtractedFields;

/// Hook called once a command has been validated, right before its reply is
/// built. It must not influence the reply.
pub trait InteractionObserver {
    fn on_command(&self, fields: &ExtractedFields);
}

/// Emits a `debug` event per command.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl InteractionObserver for TracingObserver {
    fn on_command(&self, fields: &ExtractedFields) {
        #[cfg(feature = "debug-logs")]
        debug!(title = %fields.title, role = ?fields.role, "Building poll reply");

        #[cfg(not(feature = "debug-logs"))]
        debug!(
            title_len = fields.title.len(),
            has_role = fields.role.is_some(),
            "Building poll reply"
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl InteractionObserver for NoopObserver {
    fn on_command(&self, _fields: &ExtractedFields) {}
}
