// ============================================================================
// KOBO SYNC WIDGET - Sync manual de formularios con KoboToolbox (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: DOM de alertas y del botón de sync
// - ViewModels: máquina de estados del sync + recarga por estado pendiente
// - Services: SOLO comunicación HTTP y validación de URLs
// - Host: costuras con el navegador (timers, página, botón)
// - Models: respuesta del servidor y tipos de UI
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod host;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_dom_ready;
use crate::host::PageHost;
use crate::models::{AlertKind, FormTemplateId};
use crate::views::DomSyncButton;

// Instancia global de la App (una por carga de página)
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.log_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 Kobo sync widget cargado");

    app_instance();

    // Listener global: se registra una sola vez aquí
    on_dom_ready(|| {
        check_sync_status();
    })?;

    Ok(())
}

/// App global, creada en el primer uso
fn app_instance() -> Rc<App> {
    APP.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| Rc::new(App::new(CONFIG.clone())))
            .clone()
    })
}

/// Sync manual de un formulario: `manualSyncToKobo(id, button?)`.
/// Sin `button` se usa el elemento del evento en curso (`onclick` inline).
#[wasm_bindgen(js_name = manualSyncToKobo)]
pub fn manual_sync_to_kobo(form_template_id: JsValue, button: Option<HtmlElement>) {
    let Some(form_template_id) = form_template_id_from_js(&form_template_id) else {
        log::error!("❌ formTemplateId inválido: {:?}", form_template_id);
        return;
    };

    // window.event solo existe durante el dispatch: resolver antes de await
    let Some(button) = button.or_else(current_event_element) else {
        log::error!("❌ manualSyncToKobo sin botón ni evento en curso");
        return;
    };

    let app = app_instance();
    wasm_bindgen_futures::spawn_local(async move {
        let button = DomSyncButton::new(button);
        let phase = app
            .sync_viewmodel()
            .trigger(&form_template_id, &button)
            .await;
        log::debug!("🏁 Sync de {} terminó en {:?}", form_template_id, phase);
    });
}

/// Mostrar una alerta: `showAlert(kind, message, allowMarkup?)`
#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(kind: &str, message: &str, allow_markup: Option<bool>) {
    app_instance()
        .page()
        .show_alert(AlertKind::from_name(kind), message, allow_markup.unwrap_or(false));
}

/// Valor decodificado de una cookie
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str) -> Option<String> {
    utils::get_cookie(name)
}

/// Revisar el marcador `data-sync-status`; `true` si se programó una recarga
#[wasm_bindgen(js_name = checkSyncStatus)]
pub fn check_sync_status() -> bool {
    app_instance().poll_viewmodel().check()
}

fn form_template_id_from_js(value: &JsValue) -> Option<FormTemplateId> {
    if let Some(raw) = value.as_string() {
        return Some(FormTemplateId::new(raw));
    }
    value.as_f64().map(FormTemplateId::from_number)
}

fn current_event_element() -> Option<HtmlElement> {
    let window = web_sys::window()?;
    let event = js_sys::Reflect::get(&window, &JsValue::from_str("event"))
        .ok()?
        .dyn_into::<Event>()
        .ok()?;

    event
        .current_target()
        .or_else(|| event.target())
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
}
