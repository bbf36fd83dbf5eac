//! Runtime options for a machine instance.

use serde::{Deserialize, Serialize};

/// Default limit on sub-machine nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Per-instance engine options.
///
/// Missing fields fall back to their defaults when deserialized, so a partial
/// document is enough:
///
/// ```rust
/// use nestfsm::config::EngineOptions;
///
/// let options: EngineOptions = serde_json::from_str(r#"{ "record_history": true }"#).unwrap();
/// assert!(options.record_history);
/// assert_eq!(options.max_depth, nestfsm::config::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Deepest sub-machine level an event may be forwarded to. The top-level
    /// machine is level 0. A parent's limit also bounds every machine below
    /// it; the smallest limit along the chain applies.
    pub max_depth: usize,

    /// Record committed state changes in the instance's history.
    ///
    /// `reset` keeps the records, so without `history_limit` the history
    /// grows by one record per state change for the life of the instance.
    pub record_history: bool,

    /// Keep at most this many history records, dropping the oldest.
    pub history_limit: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            record_history: false,
            history_limit: None,
        }
    }
}

impl EngineOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_history() {
        let options = EngineOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!options.record_history);
        assert_eq!(options.history_limit, None);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let options: EngineOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EngineOptions::default());
    }

    #[test]
    fn fields_override_defaults() {
        let options: EngineOptions =
            serde_json::from_str(r#"{ "max_depth": 2, "record_history": true, "history_limit": 8 }"#)
                .unwrap();
        assert_eq!(options.max_depth, 2);
        assert!(options.record_history);
        assert_eq!(options.history_limit, Some(8));
    }

    #[test]
    fn builder_methods_set_fields() {
        let options = EngineOptions::default()
            .with_max_depth(4)
            .with_history(true)
            .with_history_limit(32);
        assert_eq!(options.max_depth, 4);
        assert!(options.record_history);
        assert_eq!(options.history_limit, Some(32));
    }
}
