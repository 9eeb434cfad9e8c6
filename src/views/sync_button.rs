// ============================================================================
// SYNC BUTTON VIEW - Estado visual del botón de sync
// ============================================================================

use web_sys::HtmlElement;

use crate::dom::{append_child, append_text, remove_attribute, set_attribute, set_text_content, ElementBuilder};
use crate::host::SyncButton;
use crate::utils::{SPINNER_CLASS, SYNCING_LABEL};

/// Botón del DOM que lanzó el sync
pub struct DomSyncButton {
    element: HtmlElement,
}

impl DomSyncButton {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl SyncButton for DomSyncButton {
    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn is_disabled(&self) -> bool {
        self.element.has_attribute("disabled")
    }

    fn show_loading(&self) -> Result<(), String> {
        set_attribute(&self.element, "disabled", "")
            .map_err(|e| format!("No se pudo deshabilitar el botón: {:?}", e))?;

        set_text_content(&self.element, "");
        let spinner = ElementBuilder::new("span")
            .and_then(|b| b.attr("aria-hidden", "true"))
            .map(|b| b.class(SPINNER_CLASS).build())
            .map_err(|e| format!("No se pudo crear el spinner: {:?}", e))?;
        append_child(&self.element, &spinner)
            .and_then(|_| append_text(&self.element, SYNCING_LABEL))
            .map_err(|e| format!("No se pudo mostrar el indicador: {:?}", e))
    }

    fn restore(&self, label: &str) {
        if let Err(e) = remove_attribute(&self.element, "disabled") {
            log::warn!("⚠️ No se pudo rehabilitar el botón: {:?}", e);
        }
        set_text_content(&self.element, label);
    }
}
