//! Server application models.
//!
//! Application state shared by every handler and the CMS document types resolvers read.

pub mod app;
pub mod cms;
