//! Reactive client state shared through context.

pub mod sidebar;
