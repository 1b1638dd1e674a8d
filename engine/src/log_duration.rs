use std::time::{Duration, Instant};

/// Logs how long its scope took when dropped.
#[derive(Debug)]
pub struct LogDuration {
    operation: String,
    start: Instant,
}

impl LogDuration {
    pub fn new(operation: impl Into<String>) -> Self {
        Self { operation: operation.into(), start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

impl Drop for LogDuration {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(operation = %self.operation, took_ms = elapsed.as_millis() as u64, "operation finished");
    }
}

/// Time the rest of the enclosing scope: `log_duration!("search");`
#[macro_export]
macro_rules! log_duration {
    ($operation:expr) => {
        let _log_duration_guard = $crate::log_duration::LogDuration::new($operation);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_elapsed_time() {
        let guard = LogDuration::new("sleep");
        std::thread::sleep(Duration::from_millis(5));
        assert!(guard.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn macro_binds_guard_to_scope() {
        log_duration!("scoped");
        let total: u64 = (1..=10).sum();
        assert_eq!(total, 55);
    }
}
