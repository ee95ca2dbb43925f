//! Structured progress reporting
//!
//! The core emits progress as typed events instead of printing. Consumers
//! implement [`ProgressHandler`]: the CLI renders human-readable lines,
//! tests collect events with [`ProgressLog`], and [`NullProgress`] discards
//! everything.

use serde::{Deserialize, Serialize};

/// Progress notification from a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// All reference data is seeded and committed
    SeedingCompleted {
        stores: usize,
        products: usize,
        items: usize,
        customers: usize,
    },

    /// A batch of orders was committed mid-day
    BatchCommitted { total_orders: u64 },

    /// The day loop crossed into a new month
    MonthCompleted {
        year: i32,
        month: u32,
        total_orders: u64,
    },

    /// The run finished; totals are final
    RunCompleted {
        total_orders: u64,
        total_lines: u64,
        total_customizations: u64,
    },
}

/// Consumer of progress events
pub trait ProgressHandler {
    fn on_event(&mut self, event: &ProgressEvent);
}

/// Handler that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressHandler for NullProgress {
    fn on_event(&mut self, _event: &ProgressEvent) {}
}

/// Handler that records every event, for tests and inspection
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    events: Vec<ProgressEvent>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ProgressHandler for ProgressLog {
    fn on_event(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_log_records_in_order() {
        let mut log = ProgressLog::new();
        log.on_event(&ProgressEvent::BatchCommitted { total_orders: 1000 });
        log.on_event(&ProgressEvent::MonthCompleted {
            year: 2024,
            month: 2,
            total_orders: 81_500,
        });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.events()[0],
            ProgressEvent::BatchCommitted { total_orders: 1000 }
        );
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = ProgressEvent::MonthCompleted {
            year: 2024,
            month: 3,
            total_orders: 10,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"month_completed\""));
    }
}
