pub mod api_client;
pub mod url_guard;

pub use api_client::{KoboSyncClient, SyncTransport};
pub use url_guard::{trusted_form_url, TrustedFormUrl};
