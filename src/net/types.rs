//! Canonical client-side records for server data.
//!
//! DESIGN
//! ======
//! The backend's field naming varies across endpoints and versions, so these
//! types are never deserialized directly from responses. `net::normalize`
//! probes the raw JSON and builds them; page code only ever sees this stable
//! shape.

/// A league entry for the dashboard chooser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueSummary {
    /// League identifier, stringified from whatever the backend sent.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// The selected league as shown on the detail and driver screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeagueDetail {
    /// League identifier (string form).
    pub id: String,
    /// Display name; `"Lega"` when the backend omitted one.
    pub name: String,
    /// Free-text description; empty when absent.
    pub description: String,
    /// Whether the current user administers this league. Per-user-per-league,
    /// not a property of the league itself.
    pub is_super_user: bool,
    /// Creation time in unix seconds, if the backend provided a usable value.
    pub created_at: Option<i64>,
    /// Last-update time in unix seconds, if usable.
    pub updated_at: Option<i64>,
}

/// A Formula 1 driver row in the selection table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Driver {
    /// Driver identifier (string form).
    pub id: String,
    /// Full driver name; `"Pilota {n}"` when the backend omitted one.
    pub name: String,
    /// Team name; `"N/D"` when unknown.
    pub team: String,
    /// Race number as displayed, possibly empty.
    pub number: String,
}
