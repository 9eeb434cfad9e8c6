// ============================================================================
// SYNC TRIGGER STATE - Estado de un click de sync (efímero)
// ============================================================================

use std::cell::{Cell, RefCell};

use crate::models::SyncPhase;

/// Fase actual y etiqueta original del botón durante un click
pub struct SyncTriggerState {
    phase: Cell<SyncPhase>,
    original_label: RefCell<Option<String>>,
}

impl SyncTriggerState {
    pub fn new() -> Self {
        Self {
            phase: Cell::new(SyncPhase::Idle),
            original_label: RefCell::new(None),
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase.get()
    }

    /// Cambiar de fase; una transición inesperada se registra pero se aplica
    pub fn advance(&self, next: SyncPhase) {
        let current = self.phase();
        if !current.can_transition_to(next) {
            log::warn!("⚠️ Transición inesperada {:?} -> {:?}", current, next);
        }
        log::debug!("🔀 {:?} -> {:?}", current, next);
        self.phase.set(next);
    }

    pub fn remember_label(&self, label: String) {
        *self.original_label.borrow_mut() = Some(label);
    }

    pub fn original_label(&self) -> String {
        self.original_label.borrow().clone().unwrap_or_default()
    }
}

impl Default for SyncTriggerState {
    fn default() -> Self {
        Self::new()
    }
}
