//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (route access,
//! local storage, link checks) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod storage;
pub mod url;
