use crate::models::AlertKind;

/// Programar una acción tras `delay_ms`. Sin cancelación: una recarga de la
/// página descarta cualquier acción pendiente.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>);
}

/// Operaciones de página que usa el widget
pub trait PageHost {
    /// Diálogo sí/no; `false` si el usuario cancela
    fn confirm(&self, message: &str) -> bool;

    /// Recargar la página actual
    fn reload(&self);

    /// Mostrar una alerta flotante
    fn show_alert(&self, kind: AlertKind, message: &str, allow_markup: bool);

    /// Token CSRF (cookie ya decodificada)
    fn csrf_token(&self) -> Option<String>;

    /// Valor del marcador de estado de sync renderizado por el servidor
    fn sync_status(&self) -> Option<String>;
}

/// Botón que dispara el sync
pub trait SyncButton {
    /// Texto actual del botón
    fn label(&self) -> String;

    /// Deshabilitado (p.ej. con un sync ya en curso)
    fn is_disabled(&self) -> bool;

    /// Deshabilitar y mostrar el indicador de carga
    fn show_loading(&self) -> Result<(), String>;

    /// Rehabilitar con `label` como texto plano
    fn restore(&self, label: &str);
}

/// Panel de alerta ya insertado en el documento
pub trait AlertPanel {
    /// Pasar al estado visual oculto (inicia la transición)
    fn hide(&self);

    /// Quitar del documento. Debe tolerar llamadas repetidas.
    fn remove(&self);
}

/// Control de cierre manual (botón ✕) de una alerta
pub trait DismissControl {
    /// Registrar `handler` para cada activación del control
    fn on_dismiss(&self, handler: Box<dyn FnMut()>) -> Result<(), String>;
}
