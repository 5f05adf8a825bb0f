//! API data transfer objects.

pub mod api;
pub mod linked;
pub mod record;
