use std::rc::Rc;

use gloo::events::EventListener;
use taskdesk_core::{
  PageConfig,
  TaskDoneToggle,
  TaskRow
};
use taskdesk_shared::TaskId;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlInputElement
};

use crate::api::FetchDoneEndpoint;

#[derive(Clone)]
pub struct BrowserRow {
  checkbox:             HtmlInputElement,
  row_selector:         Rc<str>,
  status_cell_selector: Rc<str>
}

impl BrowserRow {
  fn status_cell(&self) -> Option<Element> {
    self
      .checkbox
      .closest(&self.row_selector)
      .ok()
      .flatten()?
      .query_selector(
        &self.status_cell_selector
      )
      .ok()
      .flatten()
  }
}

impl TaskRow for BrowserRow {
  fn task_id(&self) -> Option<TaskId> {
    TaskId::from_attribute(
      self
        .checkbox
        .get_attribute("data-id")
        .as_deref()
    )
  }

  fn is_checked(&self) -> bool {
    self.checkbox.checked()
  }

  fn set_checked(&mut self, checked: bool) {
    self.checkbox.set_checked(checked);
  }

  fn set_status_text(
    &mut self,
    text: &str
  ) -> bool {
    match self.status_cell() {
      | Some(cell) => {
        cell.set_text_content(Some(text));
        true
      }
      | None => false
    }
  }
}

/// Attaches the mark-done handler to every
/// task checkbox and returns how many were
/// bound.
#[tracing::instrument(skip_all)]
pub fn mount(
  document: &Document,
  config: &PageConfig
) -> u32 {
  let checkboxes = match document
    .query_selector_all(
      &config.checkbox_selector
    ) {
    | Ok(list) => list,
    | Err(error) => {
      tracing::error!(
        selector = %config.checkbox_selector,
        error = ?error,
        "invalid checkbox selector"
      );
      return 0;
    }
  };

  let endpoint = Rc::new(
    FetchDoneEndpoint::new(
      &config.done_endpoint
    )
  );
  let row_selector: Rc<str> =
    config.row_selector.as_str().into();
  let status_cell_selector: Rc<str> =
    config
      .status_cell_selector
      .as_str()
      .into();

  let mut bound = 0;
  for index in 0..checkboxes.length() {
    let Some(checkbox) = checkboxes
      .item(index)
      .and_then(|node| {
        node
          .dyn_into::<HtmlInputElement>()
          .ok()
      })
    else {
      continue;
    };

    let row = BrowserRow {
      checkbox:             checkbox
        .clone(),
      row_selector:         row_selector
        .clone(),
      status_cell_selector:
        status_cell_selector.clone()
    };
    let endpoint = endpoint.clone();

    EventListener::new(
      &checkbox,
      "change",
      move |_| {
        let mut toggle =
          TaskDoneToggle::new(row.clone());
        toggle.lock();

        let endpoint = endpoint.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            toggle
              .notify(endpoint.as_ref())
              .await;
          }
        );
      }
    )
    .forget();
    bound += 1;
  }

  bound
}
