// Utils compartidos

pub mod constants;
pub mod cookies;

pub use constants::*;
pub use cookies::*;
