pub mod alert;
pub mod sync_button;

pub use alert::{mount_alert, render_alert, schedule_auto_dismiss, show_alert, DomAlertPanel, DomCloseButton};
pub use sync_button::DomSyncButton;
