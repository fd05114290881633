//! Middleware del sistema
//! 
//! Este módulo contiene los avisos flash que sobreviven a una redirección.

pub mod flash;

pub use flash::{Flash, FlashKind};
