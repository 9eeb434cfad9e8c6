// ============================================================================
// ERRORES - Fallos de transporte/parseo de la petición de sync
// ============================================================================
// El Display de cada variante es el mensaje que ve el usuario tras "Error: "
// ============================================================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// La petición no llegó a completarse (fetch rechazado, red caída)
    #[error("{0}")]
    Network(String),

    /// El cuerpo de la respuesta no es el JSON esperado
    #[error("Unexpected response (HTTP {status}): {reason}")]
    Parse { status: u16, reason: String },

    /// No se pudo construir la petición
    #[error("Invalid request: {0}")]
    Request(String),
}

impl SyncError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}
