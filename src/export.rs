//! PNG Export
//!
//! Bindings to the `html-to-image` library loaded by index.html.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "htmlToImage"], js_name = toPng, catch)]
    async fn to_png(node: &web_sys::HtmlElement, options: JsValue) -> Result<JsValue, JsValue>;
}

pub const EXPORT_FILE_NAME: &str = "tier-list.png";

const LIGHT_BACKGROUND: &str = "#f3f4f6";
const DARK_BACKGROUND: &str = "#111827";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportOptions<'a> {
    quality: f64,
    pixel_ratio: f64,
    background_color: &'a str,
}

/// Render `node` to a PNG and download it
pub async fn export_png(node: &web_sys::HtmlElement, dark_mode: bool) -> Result<(), String> {
    let options = ExportOptions {
        quality: 1.0,
        pixel_ratio: 2.0,
        background_color: if dark_mode { DARK_BACKGROUND } else { LIGHT_BACKGROUND },
    };
    let js_options = serde_wasm_bindgen::to_value(&options)
        .map_err(|e| format!("Failed to serialize options: {}", e))?;

    let data_url = to_png(node, js_options)
        .await
        .map_err(|e| format!("toPng failed: {:?}", e))?
        .as_string()
        .ok_or_else(|| "toPng returned a non-string".to_string())?;

    download(&data_url, EXPORT_FILE_NAME)
}

fn download(href: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("no document")?;
    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    link.set_download(file_name);
    link.set_href(href);
    link.click();
    Ok(())
}
