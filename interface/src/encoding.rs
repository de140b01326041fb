//! String/byte conversions for the host ABI.
//!
//! Entry-point inputs and outputs travel as opaque byte buffers; these helpers
//! convert between those buffers and UTF-8 strings.

use std::str::Utf8Error;

/// The UTF-8 bytes of `s`, in the buffer representation the ABI expects.
pub fn string_to_bytes(s: &str) -> Vec<u8> {
  s.as_bytes().to_vec()
}

/// Reads a UTF-8 string back out of an ABI byte buffer.
pub fn bytes_to_string(bytes: &[u8]) -> Result<String, Utf8Error> {
  std::str::from_utf8(bytes).map(str::to_owned)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn string_round_trips_through_bytes() {
    let bytes = string_to_bytes("received");
    assert_eq!(bytes, b"received");
    assert_eq!(bytes_to_string(&bytes).unwrap(), "received");
  }

  #[test]
  fn non_utf8_buffers_are_rejected() {
    assert!(bytes_to_string(&[0xff, 0x00]).is_err());
  }
}
