//! Keeps the visible due-date input, the
//! calendar popup and the hidden canonical
//! field consistent.

use std::fmt;

use chrono::NaiveDate;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::datetime::{
  format_display_date,
  format_due_date,
  parse_date
};
use crate::error::DateParseError;

/// Element handles the picker reads and
/// writes.
pub trait PickerDom {
  fn display_value(&self) -> String;

  fn set_display_value(
    &mut self,
    value: &str
  );

  fn set_due_value(&mut self, value: &str);

  fn show_popup(&mut self);

  fn hide_popup(&mut self);
}

/// Where a document click landed relative
/// to the picker.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ClickTarget {
  InsidePopup,
  DisplayInput,
  Elsewhere
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SubmitRejection {
  MissingDate,
  InvalidDate
}

impl SubmitRejection {
  /// Text shown in the blocking alert.
  pub fn message(self) -> &'static str {
    match self {
      | SubmitRejection::MissingDate => {
        "Please select a due date"
      }
      | SubmitRejection::InvalidDate => {
        "Please select a valid date"
      }
    }
  }
}

impl fmt::Display for SubmitRejection {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.message())
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SubmitDecision {
  Proceed(NaiveDate),
  Cancel(SubmitRejection)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
  DefaultedToToday(NaiveDate),
  Restored(NaiveDate),
  /// The hidden field was left untouched.
  Unparsed(DateParseError)
}

#[derive(Debug)]
pub struct DatePicker<D> {
  dom: D
}

impl<D: PickerDom> DatePicker<D> {
  pub fn new(dom: D) -> Self {
    Self { dom }
  }

  pub fn dom(&self) -> &D {
    &self.dom
  }

  pub fn dom_mut(&mut self) -> &mut D {
    &mut self.dom
  }

  pub fn open_popup(&mut self) {
    self.dom.show_popup();
  }

  /// Applies a value emitted by the
  /// calendar widget. An empty value is
  /// ignored and yields `Ok(None)`.
  #[tracing::instrument(skip(self))]
  pub fn commit_selection(
    &mut self,
    selected: &str
  ) -> Result<Option<NaiveDate>, DateParseError>
  {
    if selected.trim().is_empty() {
      debug!(
        "calendar emitted an empty \
         selection"
      );
      return Ok(None);
    }

    let date = match parse_date(selected)
    {
      | Ok(date) => date,
      | Err(err) => {
        warn!(
          error = %err,
          "ignoring calendar selection"
        );
        return Err(err);
      }
    };

    self.dom.set_display_value(
      &format_display_date(date)
    );
    self.write_due(date);
    self.dom.hide_popup();
    Ok(Some(date))
  }

  pub fn dismiss_on_click(
    &mut self,
    target: ClickTarget
  ) {
    if target == ClickTarget::Elsewhere {
      self.dom.hide_popup();
    }
  }

  /// Seeds the hidden field on page load.
  /// A server-rendered value that fails to
  /// parse is logged and left alone.
  #[tracing::instrument(skip(self))]
  pub fn initialize(
    &mut self,
    today: NaiveDate
  ) -> InitOutcome {
    let current = self.dom.display_value();
    if current.is_empty() {
      self.dom.set_display_value(
        &format_display_date(today)
      );
      self.write_due(today);
      return InitOutcome::DefaultedToToday(
        today
      );
    }

    match parse_date(&current) {
      | Ok(date) => {
        self.write_due(date);
        InitOutcome::Restored(date)
      }
      | Err(err) => {
        error!(
          error = %err,
          "failed formatting existing \
           due date"
        );
        InitOutcome::Unparsed(err)
      }
    }
  }

  /// Re-derives the hidden field from the
  /// visible text and decides whether the
  /// form may be submitted.
  #[tracing::instrument(skip(self))]
  pub fn guard_submit(
    &mut self
  ) -> SubmitDecision {
    let current = self.dom.display_value();
    if current.is_empty() {
      info!(
        "blocking submit without due \
         date"
      );
      return SubmitDecision::Cancel(
        SubmitRejection::MissingDate
      );
    }

    match parse_date(&current) {
      | Ok(date) => {
        self.write_due(date);
        SubmitDecision::Proceed(date)
      }
      | Err(err) => {
        info!(
          error = %err,
          "blocking submit with invalid \
           due date"
        );
        SubmitDecision::Cancel(
          SubmitRejection::InvalidDate
        )
      }
    }
  }

  fn write_due(&mut self, date: NaiveDate) {
    let canonical = format_due_date(date);
    debug!(
      due = %canonical,
      "formatted due date"
    );
    self.dom.set_due_value(&canonical);
  }
}
