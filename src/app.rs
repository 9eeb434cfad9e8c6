// ============================================================================
// APP - Composición del widget sobre el navegador
// ============================================================================

use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::host::{BrowserPage, GlooScheduler};
use crate::services::KoboSyncClient;
use crate::viewmodels::{PollViewModel, SyncViewModel};

pub type BrowserSyncViewModel = SyncViewModel<BrowserPage, KoboSyncClient, GlooScheduler>;
pub type BrowserPollViewModel = PollViewModel<BrowserPage, GlooScheduler>;

/// Aplicación: configuración + implementaciones del navegador
pub struct App {
    config: WidgetConfig,
    scheduler: Rc<GlooScheduler>,
    page: Rc<BrowserPage>,
}

impl App {
    pub fn new(config: WidgetConfig) -> Self {
        let scheduler = Rc::new(GlooScheduler);
        let page = Rc::new(BrowserPage::new(config.clone(), scheduler.clone()));
        Self {
            config,
            scheduler,
            page,
        }
    }

    pub fn page(&self) -> Rc<BrowserPage> {
        self.page.clone()
    }

    pub fn sync_viewmodel(&self) -> BrowserSyncViewModel {
        SyncViewModel::new(
            self.page.clone(),
            KoboSyncClient::new(self.config.clone()),
            self.scheduler.clone(),
            self.config.trusted_domain.clone(),
        )
    }

    pub fn poll_viewmodel(&self) -> BrowserPollViewModel {
        PollViewModel::new(
            self.page.clone(),
            self.scheduler.clone(),
            self.config.sync_pending_value.clone(),
        )
    }
}
