// ============================================================================
// ALERT VIEW - Alertas flotantes descartables
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{body, on_click, remove_class, ElementBuilder};
use crate::host::{AlertPanel, DismissControl, Scheduler};
use crate::models::{AlertContent, AlertKind};
use crate::utils::{ALERT_FADE_OUT_MS, ALERT_LIFETIME_MS, ALERT_PANEL_STYLE};

/// Panel de alerta insertado en `document.body`
pub struct DomAlertPanel {
    element: Element,
}

impl AlertPanel for DomAlertPanel {
    fn hide(&self) {
        if let Err(e) = remove_class(&self.element, "show") {
            log::warn!("⚠️ No se pudo ocultar la alerta: {:?}", e);
        }
    }

    fn remove(&self) {
        // Element.remove() no falla si ya no está en el documento
        self.element.remove();
    }
}

/// Botón ✕ del panel
pub struct DomCloseButton {
    element: Element,
}

impl DismissControl for DomCloseButton {
    fn on_dismiss(&self, mut handler: Box<dyn FnMut()>) -> Result<(), String> {
        on_click(&self.element, move |_e| handler())
            .map_err(|e| format!("No se pudo registrar el cierre de la alerta: {:?}", e))
    }
}

/// Construir el panel y su botón de cierre (sin insertarlo)
pub fn render_alert(
    kind: AlertKind,
    message: &str,
    allow_markup: bool,
) -> Result<(Element, Element), JsValue> {
    let panel = ElementBuilder::new("div")?
        .class(&kind.panel_class())
        .attr("style", ALERT_PANEL_STYLE)?
        .attr("role", "alert")?;

    let panel = match AlertContent::for_kind(kind, message, allow_markup) {
        AlertContent::Text(text) => panel.text(&text)?,
        AlertContent::Markup(markup) => panel.html(&markup),
    };

    let close = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("data-bs-dismiss", "alert")?
        .attr("aria-label", "Close")?
        .build();

    let panel = panel.child(&close)?.build();
    Ok((panel, close))
}

/// Mostrar una alerta: insertar en body, cierre manual y auto-cierre
pub fn show_alert<S>(
    kind: AlertKind,
    message: &str,
    allow_markup: bool,
    scheduler: &Rc<S>,
) -> Result<Rc<DomAlertPanel>, JsValue>
where
    S: Scheduler + 'static,
{
    let (element, close) = render_alert(kind, message, allow_markup)?;
    body()?.append_child(&element)?;

    let panel = Rc::new(DomAlertPanel { element });
    let close = DomCloseButton { element: close };

    mount_alert(panel.clone(), &close, scheduler).map_err(|e| JsValue::from_str(&e))?;
    log::debug!("🔔 Alerta {:?} mostrada", kind);
    Ok(panel)
}

/// Conectar el cierre manual (inmediato) y armar el auto-cierre
pub fn mount_alert<P, C, S>(panel: Rc<P>, close: &C, scheduler: &Rc<S>) -> Result<(), String>
where
    P: AlertPanel + 'static,
    C: DismissControl,
    S: Scheduler + 'static,
{
    {
        let panel = panel.clone();
        close.on_dismiss(Box::new(move || panel.remove()))?;
    }

    schedule_auto_dismiss(panel, scheduler);
    Ok(())
}

/// Ocultar a los 5000 ms y quitar del documento 150 ms después
pub fn schedule_auto_dismiss<P, S>(panel: Rc<P>, scheduler: &Rc<S>)
where
    P: AlertPanel + 'static,
    S: Scheduler + 'static,
{
    let inner = scheduler.clone();
    scheduler.schedule(
        ALERT_LIFETIME_MS,
        Box::new(move || {
            panel.hide();
            inner.schedule(ALERT_FADE_OUT_MS, Box::new(move || panel.remove()));
        }),
    );
}
