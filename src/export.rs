//! Snapshot Export
//!
//! Offers the current dashboard state as a JSON file download.

use dashboard_core::DashboardSnapshot;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_error(value: JsValue) -> String {
    format!("{:?}", value)
}

/// Trigger a browser download of `snapshot`; returns the file name.
pub fn download_snapshot(snapshot: &DashboardSnapshot) -> Result<String, String> {
    let json = snapshot.to_pretty_json().map_err(|e| e.to_string())?;
    let file_name = snapshot.file_name();

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("No document")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "Not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(file_name)
}
