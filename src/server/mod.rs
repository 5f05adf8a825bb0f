//! Server application core modules.
//!
//! Everything behind the crosslink HTTP API: resolution of references between Supabase rows
//! and Sanity documents, the cache they share, link auditing & repair, webhook-driven profile
//! sync and the scheduled link audit.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
