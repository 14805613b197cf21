use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Path prefix of the endpoint that marks
/// a task as done.
pub const DEFAULT_DONE_ENDPOINT: &str =
  "/tasks/done";

/// Status text shown in a task row once
/// the backend acknowledged completion.
pub const DONE_STATUS: &str = "done";

/// Identifier the server rendered into a
/// row's `data-id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
  /// Returns `None` for an absent or
  /// blank attribute value.
  pub fn from_attribute(
    raw: Option<&str>
  ) -> Option<Self> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
      return None;
    }
    Some(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DoneRequest {
  pub checked: bool
}

impl DoneRequest {
  pub fn checked() -> Self {
    Self { checked: true }
  }
}

/// Joins the endpoint prefix and the task
/// id, tolerating a trailing slash on the
/// prefix.
#[must_use]
pub fn done_path(
  prefix: &str,
  id: &TaskId
) -> String {
  format!(
    "{}/{}",
    prefix.trim_end_matches('/'),
    id.as_str()
  )
}
