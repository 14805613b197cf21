mod api;
mod page;
mod picker;
mod rows;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting taskdesk page bindings"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    tracing::error!(
      "no document available; nothing \
       to bind"
    );
    return;
  };

  let config =
    page::load_config(&document);

  if let Err(error) =
    picker::mount(&document, &config)
  {
    tracing::info!(
      error = %format!("{error:#}"),
      "due-date picker not mounted"
    );
  }

  let bound =
    rows::mount(&document, &config);
  tracing::info!(
    checkboxes = bound,
    "bound task checkboxes"
  );
}
