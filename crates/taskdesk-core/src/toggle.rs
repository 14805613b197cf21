//! One-way "mark done" checkbox.
//!
//! The checkbox is forced to checked
//! before the request goes out and is never
//! rolled back. A failed request only
//! leaves a log line behind.

use async_trait::async_trait;
use taskdesk_shared::{
  DONE_STATUS,
  DoneRequest,
  TaskId
};
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::error::RequestError;

/// Handles for one rendered task row.
pub trait TaskRow {
  fn task_id(&self) -> Option<TaskId>;

  fn is_checked(&self) -> bool;

  fn set_checked(&mut self, checked: bool);

  /// Returns `false` when the row has no
  /// status cell.
  fn set_status_text(
    &mut self,
    text: &str
  ) -> bool;
}

/// Backend call acknowledging a finished
/// task. Any 2xx answer is `Ok`.
#[async_trait(?Send)]
pub trait DoneEndpoint {
  async fn mark_done(
    &self,
    id: &TaskId,
    request: &DoneRequest
  ) -> Result<(), RequestError>;
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum ToggleState {
  #[default]
  Unchecked,
  CheckedPending,
  CheckedConfirmed
}

#[derive(Debug)]
pub struct TaskDoneToggle<R> {
  row:   R,
  state: ToggleState
}

impl<R: TaskRow> TaskDoneToggle<R> {
  pub fn new(row: R) -> Self {
    let state = if row.is_checked() {
      ToggleState::CheckedPending
    } else {
      ToggleState::Unchecked
    };
    Self { row, state }
  }

  pub fn state(&self) -> ToggleState {
    self.state
  }

  pub fn row(&self) -> &R {
    &self.row
  }

  /// Forces the checkbox to checked. Runs
  /// while the change event is still being
  /// dispatched.
  pub fn lock(&mut self) -> ToggleState {
    if !self.row.is_checked() {
      debug!(
        "re-checking task checkbox"
      );
    }
    self.row.set_checked(true);
    self.state = ToggleState::CheckedPending;
    self.state
  }

  /// Tells the backend the task is done and
  /// writes the status cell on success.
  /// Never fails: request errors are logged
  /// and the optimistic state is kept.
  #[tracing::instrument(skip_all)]
  pub async fn notify<E>(
    &mut self,
    endpoint: &E
  ) -> ToggleState
  where
    E: DoneEndpoint + ?Sized
  {
    let Some(id) = self.row.task_id() else {
      warn!(
        "task checkbox has no data-id; \
         skipping update"
      );
      return self.state;
    };

    info!(task_id = %id, "marking task done");

    match endpoint
      .mark_done(&id, &DoneRequest::checked())
      .await
    {
      | Ok(()) => {
        if !self
          .row
          .set_status_text(DONE_STATUS)
        {
          debug!(
            task_id = %id,
            "row has no status cell"
          );
        }
        self.state =
          ToggleState::CheckedConfirmed;
      }
      | Err(RequestError::Status(status)) => {
        error!(
          task_id = %id,
          status,
          "request failed"
        );
      }
      | Err(
        err @ RequestError::Transport(_)
      ) => {
        error!(
          task_id = %id,
          error = %err,
          "network error"
        );
      }
    }

    self.state
  }

  /// `lock` followed by `notify`.
  pub async fn activate<E>(
    &mut self,
    endpoint: &E
  ) -> ToggleState
  where
    E: DoneEndpoint + ?Sized
  {
    self.lock();
    self.notify(endpoint).await
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use async_trait::async_trait;
  use taskdesk_shared::{
    DoneRequest,
    TaskId
  };

  use super::{
    DoneEndpoint,
    TaskDoneToggle,
    TaskRow,
    ToggleState
  };
  use crate::error::RequestError;

  #[derive(Debug, Clone)]
  struct FakeRow {
    id:      Option<&'static str>,
    checked: bool,
    status:  Option<String>
  }

  impl FakeRow {
    fn new(id: &'static str) -> Self {
      Self {
        id:      Some(id),
        checked: true,
        status:  Some("pending".to_string())
      }
    }
  }

  impl TaskRow for FakeRow {
    fn task_id(&self) -> Option<TaskId> {
      TaskId::from_attribute(self.id)
    }

    fn is_checked(&self) -> bool {
      self.checked
    }

    fn set_checked(
      &mut self,
      checked: bool
    ) {
      self.checked = checked;
    }

    fn set_status_text(
      &mut self,
      text: &str
    ) -> bool {
      match self.status.as_mut() {
        | Some(cell) => {
          *cell = text.to_string();
          true
        }
        | None => false
      }
    }
  }

  struct FakeEndpoint {
    answer: Result<(), RequestError>,
    calls:  RefCell<Vec<(String, DoneRequest)>>
  }

  impl FakeEndpoint {
    fn answering(
      answer: Result<(), RequestError>
    ) -> Self {
      Self {
        answer,
        calls: RefCell::new(Vec::new())
      }
    }
  }

  #[async_trait(?Send)]
  impl DoneEndpoint for FakeEndpoint {
    async fn mark_done(
      &self,
      id: &TaskId,
      request: &DoneRequest
    ) -> Result<(), RequestError> {
      self
        .calls
        .borrow_mut()
        .push((id.to_string(), *request));
      self.answer.clone()
    }
  }

  #[tokio::test]
  async fn success_confirms_and_marks_status_done()
   {
    let endpoint =
      FakeEndpoint::answering(Ok(()));
    let mut toggle =
      TaskDoneToggle::new(FakeRow::new("42"));

    let state =
      toggle.activate(&endpoint).await;

    assert_eq!(
      state,
      ToggleState::CheckedConfirmed
    );
    assert_eq!(
      toggle.row().status.as_deref(),
      Some("done")
    );
    assert_eq!(
      endpoint.calls.borrow().as_slice(),
      &[(
        "42".to_string(),
        DoneRequest { checked: true }
      )]
    );
  }

  #[tokio::test]
  async fn uncheck_intent_is_overridden() {
    let endpoint =
      FakeEndpoint::answering(Ok(()));
    let mut row = FakeRow::new("7");
    row.checked = false;
    let mut toggle = TaskDoneToggle::new(row);
    assert_eq!(
      toggle.state(),
      ToggleState::Unchecked
    );

    toggle.activate(&endpoint).await;

    assert!(toggle.row().checked);
    assert!(endpoint.calls.borrow()[0].1.checked);
  }

  #[tokio::test]
  async fn lock_checks_the_box_before_any_request()
   {
    let endpoint =
      FakeEndpoint::answering(Ok(()));
    let mut row = FakeRow::new("42");
    row.checked = false;
    let mut toggle = TaskDoneToggle::new(row);

    assert_eq!(
      toggle.lock(),
      ToggleState::CheckedPending
    );
    assert!(toggle.row().checked);
    assert!(endpoint.calls.borrow().is_empty());

    let pending = toggle.notify(&endpoint);
    assert!(endpoint.calls.borrow().is_empty());

    assert_eq!(
      pending.await,
      ToggleState::CheckedConfirmed
    );
    assert_eq!(
      toggle.row().status.as_deref(),
      Some("done")
    );
  }

  #[tokio::test]
  async fn server_error_keeps_optimistic_state()
   {
    for status in [404_u16, 500] {
      let endpoint =
        FakeEndpoint::answering(Err(
          RequestError::Status(status)
        ));
      let mut toggle = TaskDoneToggle::new(
        FakeRow::new("42")
      );

      let state =
        toggle.activate(&endpoint).await;

      assert_eq!(
        state,
        ToggleState::CheckedPending
      );
      assert!(toggle.row().checked);
      assert_eq!(
        toggle.row().status.as_deref(),
        Some("pending")
      );
      assert_eq!(
        endpoint.calls.borrow().len(),
        1
      );
    }
  }

  #[tokio::test]
  async fn network_error_keeps_optimistic_state()
   {
    let endpoint =
      FakeEndpoint::answering(Err(
        RequestError::Transport(
          "connection refused".to_string()
        )
      ));
    let mut toggle =
      TaskDoneToggle::new(FakeRow::new("42"));

    let state =
      toggle.activate(&endpoint).await;

    assert_eq!(
      state,
      ToggleState::CheckedPending
    );
    assert_eq!(
      toggle.row().status.as_deref(),
      Some("pending")
    );
  }

  #[tokio::test]
  async fn missing_status_cell_is_skipped() {
    let endpoint =
      FakeEndpoint::answering(Ok(()));
    let mut row = FakeRow::new("3");
    row.status = None;
    let mut toggle = TaskDoneToggle::new(row);

    assert_eq!(
      toggle.activate(&endpoint).await,
      ToggleState::CheckedConfirmed
    );
    assert_eq!(toggle.row().status, None);
  }

  #[tokio::test]
  async fn missing_id_sends_nothing() {
    let endpoint =
      FakeEndpoint::answering(Ok(()));
    let mut row = FakeRow::new("");
    row.checked = false;
    let mut toggle = TaskDoneToggle::new(row);

    assert_eq!(
      toggle.activate(&endpoint).await,
      ToggleState::CheckedPending
    );
    assert!(toggle.row().checked);
    assert!(endpoint.calls.borrow().is_empty());
  }
}
