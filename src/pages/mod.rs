//! Route components, one module per screen.

pub mod dashboard;
pub mod league_create;
pub mod league_detail;
pub mod league_drivers;
pub mod league_join;
pub mod login;
pub mod register;
