//! Mock-host execution harness for the contract entry points.
//!
//! Feeds configured steps to the contract against an in-memory host and
//! produces a JSON execution trace of every host call and handler output.

pub mod config;
pub mod context;
pub mod step;

pub use config::{SlotExecutionSteps, Step, StepConfig};
pub use context::ExecutionContext;
pub use step::execute_step;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use serde_json::{json, Value};

/// Runs every configured slot in order and returns the full execution trace
/// together with the final host state.
pub fn execute_slots(
  executions: BTreeSet<SlotExecutionSteps>,
) -> Result<(Value, ExecutionContext)> {
  let mut ctx = ExecutionContext::new();
  let mut trace = Vec::new();
  for SlotExecutionSteps {
    slot,
    execution_steps,
  } in executions
  {
    tracing::debug!(%slot, steps = execution_steps.len(), "executing slot");
    let mut slot_trace = Vec::new();
    for Step { name, config } in execution_steps {
      let step_trace = execute_step(&mut ctx, slot, config)?;
      slot_trace.push(json!({
        "execute_step": {
          "name": name,
          "output": step_trace,
        }
      }));
    }
    trace.push(json!({
      "execute_slot": {
        "execution_slot": slot,
        "output": slot_trace,
      }
    }));
  }
  Ok((Value::Array(trace), ctx))
}

/// Reads a JSON execution config, runs it, and writes the pretty-printed
/// trace to `output`.
pub fn run(config_path: &Path, output: &Path) -> Result<()> {
  if !config_path.is_file() {
    bail!("{} isn't a file", config_path.display());
  }
  if config_path.extension().unwrap_or_default() != "json" {
    bail!("{} extension should be .json", config_path.display());
  }
  let config = fs::read(config_path)?;
  let executions: BTreeSet<SlotExecutionSteps> = serde_json::from_slice(&config)?;

  let (trace, ctx) = execute_slots(executions)?;
  tracing::info!(events = ctx.events().len(), "execution finished");

  let file = fs::File::create(output)?;
  serde_json::to_writer_pretty(file, &trace)?;
  Ok(())
}
