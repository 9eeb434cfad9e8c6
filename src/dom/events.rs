// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// closure.forget() es seguro en listeners de elementos: al quitar el elemento
// del DOM el navegador limpia sus listeners. Los listeners de document solo
// se registran una vez, en el arranque del módulo.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::document;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Ejecutar `handler` cuando el documento esté listo.
/// Si `DOMContentLoaded` ya pasó, se ejecuta inmediatamente.
pub fn on_dom_ready<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    let ready_state = js_sys::Reflect::get(&doc, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    if ready_state != "loading" {
        handler();
        return Ok(());
    }

    let closure = Closure::once(move |_e: Event| handler());
    doc.add_event_listener_with_callback(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
