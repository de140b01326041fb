//! Single-step execution against the mock host.

use anyhow::Result;
use meridian_contract::dispatch;
use meridian_interface::Slot;
use serde_json::{json, Value};

use crate::{config::StepConfig, context::ExecutionContext};

/// Executes one configured step in the given slot and returns its trace
/// object. Host calls made by the handler land in the `calls` array; handler
/// input and output bytes are hex-encoded for the trace.
pub fn execute_step(
  ctx: &mut ExecutionContext,
  slot: Slot,
  config: StepConfig,
) -> Result<Value> {
  ctx.set_execution_slot(slot);
  match config {
    StepConfig::CallHandler {
      target_handler,
      input,
    } => {
      tracing::info!(%slot, handler = %target_handler, "calling handler");
      let output = dispatch(ctx, &target_handler, &input)?;
      let calls = ctx.drain_trace();
      Ok(json!({
        "call_handler": {
          "target_handler": target_handler,
          "input": hex::encode(&input),
          "calls": calls,
          "output": hex::encode(output),
        }
      }))
    }
    StepConfig::ReadEvents => {
      let events = ctx.events().to_vec();
      Ok(json!({
        "read_events": {
          "events": events,
        }
      }))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn calling_main_traces_both_host_calls() {
    let mut ctx = ExecutionContext::new();
    let trace = execute_step(
      &mut ctx,
      Slot::new(1, 0),
      StepConfig::CallHandler {
        target_handler: "main".to_string(),
        input: vec![],
      },
    )
    .unwrap();
    let call = &trace["call_handler"];
    assert_eq!(call["output"], "");
    assert_eq!(call["calls"].as_array().unwrap().len(), 2);
    assert_eq!(call["calls"][0]["emit_event"]["data"], "Hello, world!");
    assert_eq!(
      call["calls"][1]["emit_event"]["data"],
      "Calling the main function"
    );
  }

  #[test]
  fn calling_receive_traces_the_output_bytes() {
    let mut ctx = ExecutionContext::new();
    let trace = execute_step(
      &mut ctx,
      Slot::new(1, 0),
      StepConfig::CallHandler {
        target_handler: "receive".to_string(),
        input: vec![0xff, 0x00],
      },
    )
    .unwrap();
    let call = &trace["call_handler"];
    assert_eq!(call["input"], "ff00");
    assert_eq!(call["output"], "7265636569766564");
    assert!(call["calls"].as_array().unwrap().is_empty());
  }

  #[test]
  fn unknown_handlers_fail_the_step() {
    let mut ctx = ExecutionContext::new();
    let err = execute_step(
      &mut ctx,
      Slot::new(0, 0),
      StepConfig::CallHandler {
        target_handler: "transfer".to_string(),
        input: vec![],
      },
    )
    .unwrap_err();
    assert!(err.to_string().contains("transfer"));
  }

  #[test]
  fn read_events_reports_the_log_so_far() {
    let mut ctx = ExecutionContext::new();
    execute_step(
      &mut ctx,
      Slot::new(3, 2),
      StepConfig::CallHandler {
        target_handler: "main".to_string(),
        input: vec![],
      },
    )
    .unwrap();
    let trace = execute_step(&mut ctx, Slot::new(3, 3), StepConfig::ReadEvents).unwrap();
    let events = trace["read_events"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["context"]["period"], 3);
    assert_eq!(events[0]["context"]["thread"], 2);
    assert_eq!(events[0]["data"], "Hello, world!");
  }
}
