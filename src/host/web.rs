// ============================================================================
// WEB HOST - Implementación de las costuras sobre web-sys + gloo
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config::WidgetConfig;
use crate::dom::{get_attribute, query_selector, window};
use crate::host::{PageHost, Scheduler};
use crate::models::AlertKind;
use crate::utils::get_cookie;
use crate::views::show_alert;

/// Scheduler sobre `setTimeout` (gloo-timers), sin cancelación
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, action).forget();
    }
}

/// Página del navegador
pub struct BrowserPage {
    config: WidgetConfig,
    scheduler: Rc<GlooScheduler>,
}

impl BrowserPage {
    pub fn new(config: WidgetConfig, scheduler: Rc<GlooScheduler>) -> Self {
        Self { config, scheduler }
    }
}

impl PageHost for BrowserPage {
    fn confirm(&self, message: &str) -> bool {
        let Some(win) = window() else {
            return false;
        };
        match win.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("❌ window.confirm falló: {:?}", e);
                false
            }
        }
    }

    fn reload(&self) {
        log::info!("🔄 Recargando página");
        if let Some(win) = window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ location.reload falló: {:?}", e);
            }
        }
    }

    fn show_alert(&self, kind: AlertKind, message: &str, allow_markup: bool) {
        if let Err(e) = show_alert(kind, message, allow_markup, &self.scheduler) {
            log::error!("❌ Error mostrando alerta: {:?}", e);
        }
    }

    fn csrf_token(&self) -> Option<String> {
        get_cookie(&self.config.csrf_cookie_name)
    }

    fn sync_status(&self) -> Option<String> {
        let selector = self.config.sync_status_selector();
        match query_selector(&selector) {
            Ok(element) => element.and_then(|el| get_attribute(&el, &self.config.sync_status_attribute)),
            Err(e) => {
                log::warn!("⚠️ Selector {} inválido: {:?}", selector, e);
                None
            }
        }
    }
}
