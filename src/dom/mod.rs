// ============================================================================
// DOM MODULE - Helpers para manipulação do DOM
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;

pub use element::*;
pub use builder::*;
pub use events::*;
