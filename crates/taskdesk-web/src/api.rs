use async_trait::async_trait;
use gloo::net::http::Request;
use taskdesk_core::{
  DoneEndpoint,
  RequestError
};
use taskdesk_shared::{
  DoneRequest,
  TaskId,
  done_path
};

pub struct FetchDoneEndpoint {
  prefix: String
}

impl FetchDoneEndpoint {
  pub fn new(prefix: &str) -> Self {
    Self {
      prefix: prefix.to_string()
    }
  }
}

#[async_trait(?Send)]
impl DoneEndpoint for FetchDoneEndpoint {
  async fn mark_done(
    &self,
    id: &TaskId,
    request: &DoneRequest
  ) -> Result<(), RequestError> {
    let url = done_path(&self.prefix, id);
    tracing::debug!(%url, "posting task update");

    let response = Request::post(&url)
      .header(
        "Content-Type",
        "application/json"
      )
      .json(request)
      .map_err(|e| {
        RequestError::Transport(format!(
          "failed to encode body: {e}"
        ))
      })?
      .send()
      .await
      .map_err(|e| {
        RequestError::Transport(
          e.to_string()
        )
      })?;

    if response.ok() {
      Ok(())
    } else {
      Err(RequestError::Status(
        response.status()
      ))
    }
  }
}
