//! Browser-independent behavior of the task
//! list pages: the due-date picker and the
//! mark-done checkboxes.

pub mod config;
pub mod datetime;
pub mod error;
pub mod picker;
pub mod toggle;

pub use config::PageConfig;
pub use error::{
  DateParseError,
  RequestError
};
pub use picker::{
  ClickTarget,
  DatePicker,
  InitOutcome,
  PickerDom,
  SubmitDecision,
  SubmitRejection
};
pub use toggle::{
  DoneEndpoint,
  TaskDoneToggle,
  TaskRow,
  ToggleState
};
