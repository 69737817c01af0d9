//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod avatar;
pub mod clock;
pub mod emoji;
pub mod grouping;
pub mod storage;
