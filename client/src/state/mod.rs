//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `ui`) so individual
//! components can depend on small focused models.

pub mod chat;
pub mod session;
pub mod ui;
