pub mod sync_viewmodel;
pub mod poll_viewmodel;

pub use sync_viewmodel::SyncViewModel;
pub use poll_viewmodel::PollViewModel;
