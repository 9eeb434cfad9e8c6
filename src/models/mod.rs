pub mod sync;
pub mod alert;

pub use sync::{FormTemplateId, SyncOutcome, SyncPhase, SyncResponse};
pub use alert::{AlertContent, AlertKind};
