//! Execution-config model, deserialized from JSON.

use std::cmp::Ordering;

use meridian_interface::Slot;
use serde::Deserialize;

/// All steps to execute within one slot. Configs are ordered and deduplicated
/// by slot only, matching how the chain schedules execution.
#[derive(Debug, Deserialize)]
pub struct SlotExecutionSteps {
  pub slot: Slot,
  #[serde(default)]
  pub execution_steps: Vec<Step>,
}

impl PartialEq for SlotExecutionSteps {
  fn eq(&self, other: &Self) -> bool {
    self.slot == other.slot
  }
}

impl Eq for SlotExecutionSteps {}

impl Ord for SlotExecutionSteps {
  fn cmp(&self, other: &Self) -> Ordering {
    self.slot.cmp(&other.slot)
  }
}

impl PartialOrd for SlotExecutionSteps {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// A named execution step.
#[derive(Debug, Deserialize)]
pub struct Step {
  pub name: String,
  pub config: StepConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepConfig {
  /// Invoke an exported contract handler with the given input bytes.
  CallHandler {
    target_handler: String,
    #[serde(default)]
    input: Vec<u8>,
  },
  /// Dump the event log accumulated so far into the trace.
  ReadEvents,
}
