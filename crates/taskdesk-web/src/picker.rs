use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{
  EventListener,
  EventListenerOptions
};
use taskdesk_core::{
  ClickTarget,
  DatePicker,
  PageConfig,
  PickerDom,
  SubmitDecision
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Document,
  Element,
  Event,
  HtmlInputElement,
  Node
};

use crate::page;

pub struct BrowserPickerDom {
  input:        HtmlInputElement,
  due:          HtmlInputElement,
  popup:        Element,
  hidden_class: String
}

impl PickerDom for BrowserPickerDom {
  fn display_value(&self) -> String {
    self.input.value()
  }

  fn set_display_value(
    &mut self,
    value: &str
  ) {
    self.input.set_value(value);
  }

  fn set_due_value(&mut self, value: &str) {
    self.due.set_value(value);
  }

  fn show_popup(&mut self) {
    if let Err(error) = self
      .popup
      .class_list()
      .remove_1(&self.hidden_class)
    {
      tracing::error!(
        error = ?error,
        "failed showing calendar popup"
      );
    }
  }

  fn hide_popup(&mut self) {
    if let Err(error) = self
      .popup
      .class_list()
      .add_1(&self.hidden_class)
    {
      tracing::error!(
        error = ?error,
        "failed hiding calendar popup"
      );
    }
  }
}

/// Wires the picker to the create/edit
/// form. Fails when the page has no such
/// form.
#[tracing::instrument(skip_all)]
pub fn mount(
  document: &Document,
  config: &PageConfig
) -> anyhow::Result<()> {
  let input = page::input_by_id(
    document,
    &config.due_input_id
  )?;
  let due = page::input_by_id(
    document,
    &config.due_hidden_id
  )?;
  let popup = page::element_by_id(
    document,
    &config.popup_id
  )?;
  let calendar = page::element_by_id(
    document,
    &config.calendar_id
  )?;
  let form = page::query(
    document,
    &config.form_selector
  )?;

  let picker = Rc::new(RefCell::new(
    DatePicker::new(BrowserPickerDom {
      input:        input.clone(),
      due,
      popup:        popup.clone(),
      hidden_class: config
        .hidden_class
        .clone()
    })
  ));

  let outcome = picker
    .borrow_mut()
    .initialize(
      chrono::Local::now().date_naive()
    );
  tracing::debug!(
    ?outcome,
    "initialized due-date picker"
  );

  {
    let picker = picker.clone();
    EventListener::new(
      &input,
      "click",
      move |_| {
        picker.borrow_mut().open_popup();
      }
    )
    .forget();
  }

  {
    let picker = picker.clone();
    EventListener::new(
      &calendar,
      "change",
      move |event| {
        let selected = selection_text(
          selected_value(event)
        );
        let committed = picker
          .borrow_mut()
          .commit_selection(&selected);
        if let Err(error) = committed {
          tracing::debug!(
            error = %error,
            "calendar change left the \
             picker unchanged"
          );
        }
      }
    )
    .forget();
  }

  {
    let picker = picker.clone();
    EventListener::new(
      document,
      "click",
      move |event| {
        let target = classify_click(
          event, &popup, &input
        );
        picker
          .borrow_mut()
          .dismiss_on_click(target);
      }
    )
    .forget();
  }

  EventListener::new_with_options(
    &form,
    "submit",
    EventListenerOptions::enable_prevent_default(),
    move |event| {
      let decision =
        picker.borrow_mut().guard_submit();
      if let SubmitDecision::Cancel(
        rejection
      ) = decision
      {
        event.prevent_default();
        gloo::dialogs::alert(
          rejection.message()
        );
      }
    }
  )
  .forget();

  tracing::info!(
    "mounted due-date picker"
  );
  Ok(())
}

fn selected_value(
  event: &Event
) -> Option<String> {
  let target = event.target()?;
  js_sys::Reflect::get(
    target.as_ref(),
    &JsValue::from_str("value")
  )
  .ok()?
  .as_string()
}

/// Absent or non-string values count as an
/// empty selection.
fn selection_text(
  value: Option<String>
) -> String {
  value.unwrap_or_default()
}

fn classify_click(
  event: &Event,
  popup: &Element,
  input: &HtmlInputElement
) -> ClickTarget {
  let Some(node) =
    event.target().and_then(|target| {
      target.dyn_into::<Node>().ok()
    })
  else {
    return ClickTarget::Elsewhere;
  };

  let input_node: &Node = input.as_ref();
  click_target(
    popup.contains(Some(&node)),
    node.is_same_node(Some(input_node))
  )
}

fn click_target(
  inside_popup: bool,
  on_display_input: bool
) -> ClickTarget {
  if inside_popup {
    ClickTarget::InsidePopup
  } else if on_display_input {
    ClickTarget::DisplayInput
  } else {
    ClickTarget::Elsewhere
  }
}
