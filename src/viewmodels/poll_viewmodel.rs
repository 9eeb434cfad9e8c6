// ============================================================================
// POLL VIEWMODEL - Recarga mientras haya un sync pendiente
// ============================================================================
// Una sola recarga programada al cargar la página; sin repetición ni cancelación
// ============================================================================

use std::rc::Rc;

use crate::host::{PageHost, Scheduler};
use crate::utils::PENDING_POLL_DELAY_MS;

pub struct PollViewModel<H, S> {
    host: Rc<H>,
    scheduler: Rc<S>,
    pending_value: String,
}

impl<H, S> PollViewModel<H, S>
where
    H: PageHost + 'static,
    S: Scheduler,
{
    pub fn new(host: Rc<H>, scheduler: Rc<S>, pending_value: impl Into<String>) -> Self {
        Self {
            host,
            scheduler,
            pending_value: pending_value.into(),
        }
    }

    /// Leer el marcador de estado y programar la recarga si está pendiente.
    /// Devuelve `true` si se programó.
    pub fn check(&self) -> bool {
        let status = self.host.sync_status();
        if status.as_deref() != Some(self.pending_value.as_str()) {
            log::debug!("📋 Estado de sync: {:?}, sin recarga", status);
            return false;
        }

        log::info!(
            "⏰ Sync pendiente, recargando en {} ms",
            PENDING_POLL_DELAY_MS
        );
        let host = self.host.clone();
        self.scheduler
            .schedule(PENDING_POLL_DELAY_MS, Box::new(move || host.reload()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{ManualScheduler, RecordingPage};

    fn check_with(status: Option<&str>) -> (Rc<RecordingPage>, Rc<ManualScheduler>, bool) {
        let page = Rc::new(RecordingPage {
            status: status.map(str::to_string),
            ..RecordingPage::default()
        });
        let scheduler = Rc::new(ManualScheduler::new());
        let scheduled = PollViewModel::new(page.clone(), scheduler.clone(), "sync_pending").check();
        (page, scheduler, scheduled)
    }

    #[test]
    fn pending_status_schedules_one_reload_at_30s() {
        let (page, scheduler, scheduled) = check_with(Some("sync_pending"));
        assert!(scheduled);
        assert_eq!(scheduler.scheduled_delays(), vec![30_000]);

        scheduler.advance(29_999);
        assert_eq!(page.reloads.get(), 0);
        scheduler.advance(1);
        assert_eq!(page.reloads.get(), 1);

        scheduler.advance(120_000);
        assert_eq!(page.reloads.get(), 1);
    }

    #[test]
    fn other_values_schedule_nothing() {
        for status in [Some("synced"), Some("sync_failed"), Some(""), Some("SYNC_PENDING"), None] {
            let (page, scheduler, scheduled) = check_with(status);
            assert!(!scheduled);
            assert_eq!(scheduler.pending(), 0);
            scheduler.advance(60_000);
            assert_eq!(page.reloads.get(), 0);
        }
    }
}
