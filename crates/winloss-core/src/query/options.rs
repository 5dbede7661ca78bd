use crate::config::DEFAULT_DEDUPE_INTERVAL_MS;

/// Per-query revalidation behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Refetch when the application regains focus.
    pub revalidate_on_focus: bool,
    /// Entries younger than this are reused without a new request.
    pub dedupe_interval_ms: f64,
}

impl QueryOptions {
    /// Options for AI narrative insights: never refetched on focus.
    pub fn insight() -> Self {
        Self {
            revalidate_on_focus: false,
            ..Self::default()
        }
    }

    pub fn with_dedupe_interval(mut self, interval_ms: f64) -> Self {
        self.dedupe_interval_ms = interval_ms;
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            revalidate_on_focus: true,
            dedupe_interval_ms: DEFAULT_DEDUPE_INTERVAL_MS,
        }
    }
}
