//! 3Dmol.js bindings for the structure viewer.
//!
//! Rendering always starts from scratch: the host element is emptied, its
//! height locked, and a new viewer created on it. Nothing is reused between
//! renders.
//!
//! On non-WASM targets there is no page to draw into, so rendering only logs.

use protlens_core::StructurePayload;

/// Element id of the viewer host.
pub const VIEWER_ELEMENT_ID: &str = "viewer";

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::logger::tracing::debug;
    use js_sys::{Object, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use protlens_core::config::{
        CARTOON_COLOR, STRUCTURE_FORMAT, VIEWER_BACKGROUND, VIEWER_HEIGHT,
    };
    use protlens_core::StructurePayload;

    #[wasm_bindgen]
    extern "C" {
        type GlViewer;

        #[wasm_bindgen(catch, js_namespace = ["$3Dmol"], js_name = createViewer)]
        fn create_viewer(element: &web_sys::Element, config: &JsValue)
            -> Result<GlViewer, JsValue>;

        #[wasm_bindgen(method, js_name = addModel)]
        fn add_model(this: &GlViewer, data: &str, format: &str) -> JsValue;

        #[wasm_bindgen(method, js_name = setStyle)]
        fn set_style(this: &GlViewer, selection: &JsValue, style: &JsValue);

        #[wasm_bindgen(method, js_name = zoomTo)]
        fn zoom_to(this: &GlViewer);

        #[wasm_bindgen(method)]
        fn render(this: &GlViewer);
    }

    fn object(entries: &[(&str, JsValue)]) -> Result<JsValue, String> {
        let obj = Object::new();
        for (key, value) in entries {
            Reflect::set(&obj, &JsValue::from_str(key), value)
                .map_err(|e| format!("Failed to set {}: {:?}", key, e))?;
        }
        Ok(obj.into())
    }

    pub fn render_structure(element_id: &str, payload: &StructurePayload) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document available")?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| format!("Element #{} not found", element_id))?;

        element.set_inner_html("");
        if let Some(host) = element.dyn_ref::<web_sys::HtmlElement>() {
            host.style()
                .set_property("height", VIEWER_HEIGHT)
                .map_err(|e| format!("Failed to lock viewer height: {:?}", e))?;
        }

        let config = object(&[("backgroundColor", JsValue::from_str(VIEWER_BACKGROUND))])?;
        let viewer = create_viewer(&element, &config)
            .map_err(|e| format!("3Dmol viewer unavailable: {:?}", e))?;

        viewer.add_model(payload.as_str(), STRUCTURE_FORMAT);
        let cartoon = object(&[("color", JsValue::from_str(CARTOON_COLOR))])?;
        let style = object(&[("cartoon", cartoon)])?;
        viewer.set_style(&Object::new().into(), &style);
        viewer.zoom_to();
        viewer.render();

        debug!("Rendered structure ({} lines)", payload.line_count());
        Ok(())
    }
}

/// Renders `payload` into the element with id `element_id`.
#[cfg(target_arch = "wasm32")]
pub fn render_structure(element_id: &str, payload: &StructurePayload) -> Result<(), String> {
    web::render_structure(element_id, payload)
}

/// Renders `payload` into the element with id `element_id`.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_structure(element_id: &str, payload: &StructurePayload) -> Result<(), String> {
    dioxus::logger::tracing::info!(
        "3D rendering is web-only; skipping #{} ({} lines)",
        element_id,
        payload.line_count()
    );
    Ok(())
}

/// Whether this build can draw structures.
pub fn is_supported() -> bool {
    cfg!(target_arch = "wasm32")
}
