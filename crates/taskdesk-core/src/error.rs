use thiserror::Error;

/// A date string that none of the accepted
/// layouts could interpret.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
#[error("could not interpret {input:?} as a date")]
pub struct DateParseError {
  pub input: String
}

impl DateParseError {
  pub fn new(input: &str) -> Self {
    Self {
      input: input.to_string()
    }
  }
}

/// Failure of the mark-done request.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum RequestError {
  #[error("server answered with status {0}")]
  Status(u16),
  #[error("network error: {0}")]
  Transport(String)
}
