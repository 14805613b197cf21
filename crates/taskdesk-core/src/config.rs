use anyhow::Context;
use serde::Deserialize;
use taskdesk_shared::DEFAULT_DONE_ENDPOINT;

/// Id of the optional
/// `<script type="application/json">`
/// block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str =
  "taskdesk-config";

/// Element lookups and endpoint used by
/// the page bindings. Every field falls back
/// to the markup the server renders.
#[derive(
  Debug, Clone, Deserialize, PartialEq, Eq,
)]
#[serde(default)]
pub struct PageConfig {
  pub due_input_id:         String,
  pub popup_id:             String,
  pub calendar_id:          String,
  pub due_hidden_id:        String,
  pub form_selector:        String,
  pub hidden_class:         String,
  pub checkbox_selector:    String,
  pub row_selector:         String,
  pub status_cell_selector: String,
  pub done_endpoint:        String
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      due_input_id:         "dueDate"
        .to_string(),
      popup_id:             "calendarContainer"
        .to_string(),
      calendar_id:          "callyPicker"
        .to_string(),
      due_hidden_id:        "due".to_string(),
      form_selector:        "form".to_string(),
      hidden_class:         "hidden"
        .to_string(),
      checkbox_selector:    ".row-checkbox"
        .to_string(),
      row_selector:         "tr".to_string(),
      status_cell_selector: "td:nth-child(3)"
        .to_string(),
      done_endpoint:        DEFAULT_DONE_ENDPOINT
        .to_string()
    }
  }
}

impl PageConfig {
  pub fn from_json(
    raw: &str
  ) -> anyhow::Result<Self> {
    serde_json::from_str(raw).context(
      "failed parsing page config json"
    )
  }

  /// Resolves the embedded config block.
  /// Absent or blank means defaults; a
  /// malformed block is logged and ignored.
  pub fn load(raw: Option<&str>) -> Self {
    let Some(raw) = raw
      .map(str::trim)
      .filter(|raw| !raw.is_empty())
    else {
      tracing::debug!(
        "no page config block; using \
         defaults"
      );
      return Self::default();
    };

    match Self::from_json(raw) {
      | Ok(config) => {
        tracing::info!(
          ?config,
          "loaded page config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "failed parsing page config \
           from markup"
        );
        Self::default()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::PageConfig;

  #[test]
  fn defaults_match_rendered_markup() {
    let config = PageConfig::default();
    assert_eq!(config.due_input_id, "dueDate");
    assert_eq!(
      config.popup_id,
      "calendarContainer"
    );
    assert_eq!(
      config.calendar_id,
      "callyPicker"
    );
    assert_eq!(config.due_hidden_id, "due");
    assert_eq!(
      config.checkbox_selector,
      ".row-checkbox"
    );
    assert_eq!(
      config.done_endpoint,
      "/tasks/done"
    );
  }

  #[test]
  fn partial_block_overrides_only_given_fields()
   {
    let config = PageConfig::load(Some(
      r#"{"done_endpoint": "/api/done", "hidden_class": "is-hidden"}"#
    ));
    assert_eq!(
      config.done_endpoint,
      "/api/done"
    );
    assert_eq!(
      config.hidden_class,
      "is-hidden"
    );
    assert_eq!(config.due_hidden_id, "due");
  }

  #[test]
  fn missing_or_blank_block_uses_defaults()
  {
    assert_eq!(
      PageConfig::load(None),
      PageConfig::default()
    );
    assert_eq!(
      PageConfig::load(Some("  \n")),
      PageConfig::default()
    );
  }

  #[test]
  fn malformed_block_falls_back_to_defaults()
   {
    assert!(
      PageConfig::from_json("{not json")
        .is_err()
    );
    assert_eq!(
      PageConfig::load(Some("{not json")),
      PageConfig::default()
    );
  }
}
