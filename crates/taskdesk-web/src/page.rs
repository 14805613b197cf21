use anyhow::{
  Context,
  anyhow
};
use taskdesk_core::PageConfig;
use taskdesk_core::config::CONFIG_ELEMENT_ID;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlInputElement
};

pub fn load_config(
  document: &Document
) -> PageConfig {
  let raw = document
    .get_element_by_id(CONFIG_ELEMENT_ID)
    .and_then(|element| {
      element.text_content()
    });

  PageConfig::load(raw.as_deref())
}

pub fn element_by_id(
  document: &Document,
  id: &str
) -> anyhow::Result<Element> {
  document
    .get_element_by_id(id)
    .with_context(|| {
      format!("missing #{id} element")
    })
}

pub fn input_by_id(
  document: &Document,
  id: &str
) -> anyhow::Result<HtmlInputElement> {
  element_by_id(document, id)?
    .dyn_into::<HtmlInputElement>()
    .map_err(|_| {
      anyhow!(
        "#{id} is not an input element"
      )
    })
}

pub fn query(
  document: &Document,
  selector: &str
) -> anyhow::Result<Element> {
  document
    .query_selector(selector)
    .map_err(|error| {
      anyhow!(
        "invalid selector {selector:?}: \
         {error:?}"
      )
    })?
    .with_context(|| {
      format!(
        "no element matches \
         {selector:?}"
      )
    })
}
