// ============================================================================
// HOST MODULE - Costuras entre la lógica del widget y el navegador
// ============================================================================

pub mod traits;
pub mod web;

#[cfg(test)]
pub mod testing;

pub use traits::*;
pub use web::*;
