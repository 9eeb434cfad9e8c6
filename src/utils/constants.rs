// Tiempos fijos del widget (milisegundos)

/// Espera entre la alerta de éxito y la recarga de la página
pub const SUCCESS_RELOAD_DELAY_MS: u32 = 1_500;

/// Vida de una alerta antes de ocultarse
pub const ALERT_LIFETIME_MS: u32 = 5_000;

/// Margen para la transición `fade` antes de quitar la alerta del DOM
pub const ALERT_FADE_OUT_MS: u32 = 150;

/// Espera antes de recargar mientras un sync está pendiente
pub const PENDING_POLL_DELAY_MS: u32 = 30_000;

/// Estilo inline del panel de alerta (esquina superior derecha)
pub const ALERT_PANEL_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; max-width: 400px;";

pub const CONFIRM_SYNC_MESSAGE: &str =
    "Sync this form to KoboToolbox? This will update the form structure and reference data.";

pub const SYNCING_LABEL: &str = "Syncing...";
pub const SPINNER_CLASS: &str = "spinner-border spinner-border-sm me-2";
