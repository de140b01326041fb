//! # Meridian Interface
//!
//! Core types and traits shared between contracts and host implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod encoding;

/// An execution-scheduling coordinate. The chain advances in periods, each
/// period carrying several parallel threads; slots order period-first.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Slot {
  pub period: u64,
  pub thread: u8,
}

impl Slot {
  pub fn new(period: u64, thread: u8) -> Self {
    Slot { period, thread }
  }
}

impl fmt::Display for Slot {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "(period: {}, thread: {})", self.period, self.thread)
  }
}

/// An entry of the host's append-only event log, stamped with the slot it was
/// emitted in. Events become observable by external callers and indexers once
/// the call that produced them completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub context: Slot,
  pub data: String,
}

/// The host functions a contract can import. The host runtime provides the
/// real implementation; harnesses and tests substitute their own.
#[mockall::automock]
pub trait HostInterface {
  /// Appends an informational message to the host's event log.
  fn emit_event(&mut self, data: String);
}

/// A minimal host that records emitted events in order. Useful in unit tests
/// and for running entry points without a bound host implementation.
#[derive(Debug, Default)]
pub struct MockHost {
  events: Vec<String>,
}

impl MockHost {
  pub fn new() -> Self {
    MockHost::default()
  }

  /// Events emitted so far, oldest first.
  pub fn events(&self) -> &[String] {
    &self.events
  }
}

impl HostInterface for MockHost {
  fn emit_event(&mut self, data: String) {
    self.events.push(data);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slots_order_period_first() {
    let mut slots = vec![Slot::new(2, 0), Slot::new(1, 31), Slot::new(1, 0)];
    slots.sort();
    assert_eq!(
      slots,
      vec![Slot::new(1, 0), Slot::new(1, 31), Slot::new(2, 0)]
    );
  }

  #[test]
  fn mock_host_records_events_in_order() {
    let mut host = MockHost::new();
    host.emit_event("first".to_string());
    host.emit_event("second".to_string());
    assert_eq!(host.events(), ["first", "second"]);
  }
}
