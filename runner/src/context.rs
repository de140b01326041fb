//! In-memory stand-in for the host runtime.

use meridian_interface::{Event, HostInterface, Slot};
use serde_json::{json, Value};

/// Tracks the current execution slot, the append-only event log, and a JSON
/// trace entry for every host call made since the last drain.
#[derive(Debug, Default)]
pub struct ExecutionContext {
  execution_slot: Slot,
  events: Vec<Event>,
  trace: Vec<Value>,
}

impl ExecutionContext {
  pub fn new() -> Self {
    ExecutionContext::default()
  }

  pub fn set_execution_slot(&mut self, slot: Slot) {
    self.execution_slot = slot;
  }

  pub fn execution_slot(&self) -> Slot {
    self.execution_slot
  }

  /// Events emitted so far, oldest first.
  pub fn events(&self) -> &[Event] {
    &self.events
  }

  /// Hands back the host-call trace entries recorded since the last drain.
  pub fn drain_trace(&mut self) -> Vec<Value> {
    std::mem::take(&mut self.trace)
  }

  fn record(&mut self, entry: Value) {
    self.trace.push(entry);
  }
}

impl HostInterface for ExecutionContext {
  fn emit_event(&mut self, data: String) {
    tracing::debug!(slot = %self.execution_slot, %data, "event emitted");
    self.events.push(Event {
      context: self.execution_slot,
      data: data.clone(),
    });
    self.record(json!({
      "emit_event": {
        "data": data,
      }
    }));
  }
}
