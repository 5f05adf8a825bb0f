//! Scheduled link maintenance.
//!
//! Links drift whenever an editor changes a document or a row is edited directly in the
//! database. The scheduler audits every link on a cron schedule and logs the counts so drift
//! shows up in the logs before it shows up on the website.

pub mod cron;
