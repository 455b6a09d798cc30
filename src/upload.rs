//! Image Upload
//!
//! Reads a picked file into a `data:` URL for image items.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// First file of an `<input type="file">` change event
pub fn first_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    // Allow picking the same file again
    input.set_value("");
    file
}

/// Read a file as a `data:` URL
pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(js_err)?;

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let done = reader.clone();
        let onload = Closure::once(move |_ev: web_sys::Event| {
            let result = done.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once(move |_ev: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("failed to read file"));
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });

    reader.read_as_data_url(&file).map_err(js_err)?;
    let result = JsFuture::from(promise).await.map_err(js_err)?;
    result
        .as_string()
        .ok_or_else(|| "FileReader result is not a string".to_string())
}
