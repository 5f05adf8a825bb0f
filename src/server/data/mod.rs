//! Data access layer.
//!
//! Repositories over the linked database tables and over the Sanity dataset. Repositories
//! return raw `DbErr` / `sanity_client::Error` results; deciding what a failure means is left
//! to the services above them.

pub mod cms;
pub mod linked;
pub mod person;
pub mod sponsor;
pub mod team;

#[cfg(test)]
mod tests;
