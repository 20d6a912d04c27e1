//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate storage, guard, and validation concerns from page
//! and component logic so each can be tested natively without a browser.

pub mod dates;
pub mod form;
pub mod guard;
pub mod session_store;
