// ============================================================================
// STATE MODULE - Estado efímero con Rc<RefCell>
// ============================================================================

pub mod sync_state;

pub use sync_state::*;
