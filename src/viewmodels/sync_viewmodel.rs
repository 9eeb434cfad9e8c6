// ============================================================================
// SYNC VIEWMODEL - Sync manual de un formulario con KoboToolbox
// ============================================================================
// idle → confirming → (cancelado → idle) | requesting
// requesting → (éxito → reloading) | (fallo/error → idle)
// ============================================================================

use std::rc::Rc;

use crate::host::{PageHost, Scheduler, SyncButton};
use crate::models::{AlertKind, FormTemplateId, SyncOutcome, SyncPhase};
use crate::services::{trusted_form_url, SyncTransport};
use crate::state::SyncTriggerState;
use crate::utils::{CONFIRM_SYNC_MESSAGE, SUCCESS_RELOAD_DELAY_MS};

pub struct SyncViewModel<H, T, S> {
    host: Rc<H>,
    transport: T,
    scheduler: Rc<S>,
    trusted_domain: String,
}

impl<H, T, S> SyncViewModel<H, T, S>
where
    H: PageHost + 'static,
    T: SyncTransport,
    S: Scheduler,
{
    pub fn new(host: Rc<H>, transport: T, scheduler: Rc<S>, trusted_domain: impl Into<String>) -> Self {
        Self {
            host,
            transport,
            scheduler,
            trusted_domain: trusted_domain.into(),
        }
    }

    /// Ejecutar un click de sync completo. Devuelve la fase final
    /// (`Idle` o `Reloading`); ningún error sale de aquí.
    pub async fn trigger<B: SyncButton>(
        &self,
        form_template_id: &FormTemplateId,
        button: &B,
    ) -> SyncPhase {
        let state = SyncTriggerState::new();

        if button.is_disabled() {
            log::info!("⏳ Sync de {} ya en curso, click ignorado", form_template_id);
            return state.phase();
        }

        state.advance(SyncPhase::Confirming);
        if !self.host.confirm(CONFIRM_SYNC_MESSAGE) {
            log::info!("🚫 Sync de {} cancelado por el usuario", form_template_id);
            state.advance(SyncPhase::Idle);
            return state.phase();
        }

        state.remember_label(button.label());
        if let Err(e) = button.show_loading() {
            log::warn!("⚠️ {}", e);
        }

        state.advance(SyncPhase::Requesting);
        log::info!("🔄 Sincronizando formulario {} con KoboToolbox", form_template_id);

        let csrf_token = self.host.csrf_token();
        let result = self
            .transport
            .request_sync(form_template_id, csrf_token.as_deref())
            .await;
        let outcome = SyncOutcome::from_result(result);

        self.render_outcome(&outcome, &state, button);
        state.phase()
    }

    fn render_outcome<B: SyncButton>(
        &self,
        outcome: &SyncOutcome,
        state: &SyncTriggerState,
        button: &B,
    ) {
        match outcome {
            SyncOutcome::Synced { form_url, .. } => {
                log::info!("✅ Sync completado");
                self.host
                    .show_alert(AlertKind::Success, &outcome.alert_message(), false);

                if let Some(url) = form_url
                    .as_deref()
                    .and_then(|raw| trusted_form_url(raw, &self.trusted_domain))
                {
                    self.host.show_alert(AlertKind::Info, &url.notice_markup(), true);
                }

                // El botón sigue deshabilitado hasta la recarga
                let host = self.host.clone();
                self.scheduler
                    .schedule(SUCCESS_RELOAD_DELAY_MS, Box::new(move || host.reload()));
                state.advance(SyncPhase::Reloading);
            }
            SyncOutcome::Rejected { message } => {
                log::warn!("❌ Sync rechazado: {:?}", message);
                self.host
                    .show_alert(AlertKind::Error, &outcome.alert_message(), false);
                button.restore(&state.original_label());
                state.advance(SyncPhase::Idle);
            }
            SyncOutcome::TransportError { message } => {
                log::error!("❌ Error de transporte en sync: {}", message);
                self.host
                    .show_alert(AlertKind::Error, &outcome.alert_message(), false);
                button.restore(&state.original_label());
                state.advance(SyncPhase::Idle);
            }
        }
    }
}
