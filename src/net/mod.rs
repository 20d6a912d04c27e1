//! Network layer: API endpoints, canonical records, and the response
//! normalizer that absorbs the backend's inconsistent payload shapes.

pub mod api;
pub mod normalize;
pub mod types;
