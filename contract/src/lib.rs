//! A minimal contract: `main` announces itself on the event log, `receive`
//! answers inter-contract calls with a fixed payload.
//!
//! Entry points are written against the [`HostInterface`] seam so the same
//! code runs under the production host or any test harness. Both are total:
//! they ignore their input buffer and touch no contract storage.

use meridian_interface::{encoding::string_to_bytes, HostInterface};
use thiserror::Error;

/// Called by the host on deployment or direct invocation. The input buffer is
/// ignored; two informational events are appended to the host's event log.
pub fn main(host: &mut impl HostInterface, _input: &[u8]) {
  host.emit_event("Hello, world!".to_string());
  host.emit_event("Calling the main function".to_string());
}

/// Called by the host when another contract or account sends us a message.
/// Ignores the input and returns the fixed payload `"received"`.
pub fn receive(_host: &mut impl HostInterface, _input: &[u8]) -> Vec<u8> {
  string_to_bytes("received")
}

/// The contract exports no handler with the requested name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("contract exports no handler named `{0}`")]
pub struct UnknownHandler(pub String);

/// Resolves an exported entry point by name and runs it, the way the host
/// looks up the target handler of an inbound call. `main` has no return
/// value, so it dispatches to empty output bytes.
pub fn dispatch(
  host: &mut impl HostInterface,
  handler: &str,
  input: &[u8],
) -> Result<Vec<u8>, UnknownHandler> {
  match handler {
    "main" => {
      main(host, input);
      Ok(Vec::new())
    }
    "receive" => Ok(receive(host, input)),
    other => Err(UnknownHandler(other.to_string())),
  }
}
