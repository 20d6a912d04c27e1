//! Reusable UI components shared across pages.

pub mod app_sidebar;
pub mod league_card;
pub mod password_input;
pub mod sidebar;
