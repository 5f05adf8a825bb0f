//! HTTP controller endpoints for the crosslink API.
//!
//! Handlers build a resolver or link service around the shared [`AppState`] for the duration of
//! one request. Resolvers never fail, so read endpoints answer 404 when the primary record is
//! missing and leave the counterpart empty when it cannot be resolved.
//!
//! [`AppState`]: crate::server::model::app::AppState

pub mod cache;
pub mod link;
pub mod matches;
pub mod player;
pub mod sponsor;
pub mod team;
pub mod webhook;
