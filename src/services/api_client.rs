// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una única petición: POST {endpoint}/{form_template_id}/
// ============================================================================

use gloo_net::http::Request;

use crate::config::WidgetConfig;
use crate::error::SyncError;
use crate::models::{FormTemplateId, SyncResponse};

/// Transporte de la petición de sync
#[allow(async_fn_in_trait)]
pub trait SyncTransport {
    async fn request_sync(
        &self,
        form_template_id: &FormTemplateId,
        csrf_token: Option<&str>,
    ) -> Result<SyncResponse, SyncError>;
}

/// Cliente HTTP del endpoint de sync Kobo (gloo-net / fetch)
#[derive(Clone)]
pub struct KoboSyncClient {
    config: WidgetConfig,
}

impl KoboSyncClient {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }
}

impl SyncTransport for KoboSyncClient {
    async fn request_sync(
        &self,
        form_template_id: &FormTemplateId,
        csrf_token: Option<&str>,
    ) -> Result<SyncResponse, SyncError> {
        if form_template_id.as_str().trim().is_empty() {
            return Err(SyncError::Request("missing form template id".to_string()));
        }

        let url = self.config.sync_url(form_template_id);
        log::info!("📤 POST {}", url);

        let mut request = Request::post(&url).header("Content-Type", "application/json");
        match csrf_token {
            Some(token) => request = request.header("X-CSRFToken", token),
            None => log::warn!(
                "⚠️ Cookie {} no encontrada, petición sin X-CSRFToken",
                self.config.csrf_cookie_name
            ),
        }

        let response = request.send().await.map_err(SyncError::network)?;
        let status = response.status();
        let body = response.text().await.map_err(SyncError::network)?;

        log::debug!("📥 HTTP {} ({} bytes)", status, body.len());

        let parsed = SyncResponse::parse(status, &body)?;
        if let Some(asset_uid) = &parsed.asset_uid {
            log::info!("📋 Asset Kobo: {}", asset_uid);
        }
        Ok(parsed)
    }
}
