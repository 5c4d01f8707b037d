//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases for a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// The tenant domain has been resolved (or fell back to the default).
    DomainResolved,
    /// Catalog data for the page has been assembled.
    DataReady,
    /// Request completed successfully.
    Completion,
    /// An error occurred.
    Error(String),
}

impl LifecyclePhase {
    /// Mark name used in the timing context.
    pub fn mark_name(&self) -> &'static str {
        match self {
            LifecyclePhase::DomainResolved => "domain_resolved",
            LifecyclePhase::DataReady => "data_ready",
            LifecyclePhase::Completion => "completion",
            LifecyclePhase::Error(_) => "error",
        }
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Record a lifecycle phase.
    pub fn mark_phase(&mut self, phase: &LifecyclePhase) {
        self.mark(phase.mark_name());
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from start to a named mark.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Time between two marks, if both were recorded in order.
    pub fn between(&self, from: &str, to: &str) -> Option<Duration> {
        let from = self.marks.get(from)?;
        let to = self.marks.get(to)?;
        to.checked_duration_since(*from)
    }

    /// Names of all recorded marks.
    pub fn mark_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.marks.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_are_recorded() {
        let mut timing = TimingContext::new();
        timing.mark_phase(&LifecyclePhase::DomainResolved);
        timing.mark_phase(&LifecyclePhase::DataReady);

        assert!(timing.since_start("domain_resolved").is_some());
        assert!(timing.between("domain_resolved", "data_ready").is_some());
        assert_eq!(timing.mark_names(), vec!["data_ready", "domain_resolved"]);
    }

    #[test]
    fn test_missing_mark() {
        let timing = TimingContext::default();
        assert!(timing.since_start("completion").is_none());
        assert!(timing.between("start", "completion").is_none());
    }
}
