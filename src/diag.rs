use std::sync::Mutex;

/// Capability for surfacing non-fatal diagnostics to the caller.
///
/// The core never talks to a global logger directly; it warns through
/// whatever sink it is handed. Shape extraction warns exactly once per
/// empty-result path (no boundary found, or a boundary that collapsed
/// below a triangle).
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Sink that forwards warnings to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Sink that records warnings in memory for later inspection.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings recorded so far, in emission order.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for BufferSink {
    fn warn(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(message.to_owned()),
        }
    }
}
