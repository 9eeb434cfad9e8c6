// ============================================================================
// CONFIG - Configuración del widget (tiempo de compilación)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Prefijo del endpoint de sync; el id del formulario se añade como segmento
    pub sync_endpoint: String,
    /// Substring que debe contener el host de `form_url` para mostrarlo
    pub trusted_domain: String,
    pub csrf_cookie_name: String,
    pub sync_status_attribute: String,
    pub sync_pending_value: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            sync_endpoint: "/forms/kobo/sync".to_string(),
            trusted_domain: "kobotoolbox.org".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            sync_status_attribute: "data-sync-status".to_string(),
            sync_pending_value: "sync_pending".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sync_endpoint: option_env!("KOBO_SYNC_ENDPOINT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.sync_endpoint),
            trusted_domain: option_env!("KOBO_TRUSTED_DOMAIN")
                .map(|s| s.to_string())
                .unwrap_or(defaults.trusted_domain),
            csrf_cookie_name: option_env!("CSRF_COOKIE_NAME")
                .map(|s| s.to_string())
                .unwrap_or(defaults.csrf_cookie_name),
            sync_status_attribute: option_env!("SYNC_STATUS_ATTRIBUTE")
                .map(|s| s.to_string())
                .unwrap_or(defaults.sync_status_attribute),
            sync_pending_value: option_env!("SYNC_PENDING_VALUE")
                .map(|s| s.to_string())
                .unwrap_or(defaults.sync_pending_value),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
        }
    }

    /// URL del endpoint de sync para un formulario (`{endpoint}/{id}/`)
    pub fn sync_url(&self, form_template_id: &crate::models::FormTemplateId) -> String {
        format!(
            "{}/{}/",
            self.sync_endpoint.trim_end_matches('/'),
            form_template_id.path_segment()
        )
    }

    /// Selector CSS del marcador de estado (`[data-sync-status]`)
    pub fn sync_status_selector(&self) -> String {
        format!("[{}]", self.sync_status_attribute)
    }

    /// Nivel de log efectivo; `None` si el logging está deshabilitado
    pub fn log_level(&self) -> Option<log::Level> {
        if !self.enable_logging {
            return None;
        }
        Some(self.log_level.parse().unwrap_or(log::Level::Info))
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: WidgetConfig = WidgetConfig::from_env();
}
