//! Keeping links between rows and documents in step.
//!
//! [`audit::LinkAuditService`] finds and repairs drift in bulk. Changes the CMS reports through
//! [`webhook::WebhookService`] are applied by [`sync::ProfileSyncService`] for player profiles
//! and by [`document::DocumentLinkService`] for the other linked document types.

pub mod audit;
pub mod document;
pub mod sync;
pub mod webhook;

#[cfg(test)]
mod tests;

pub use audit::{LinkAuditService, LinkFinding, LinkReport, LinkStatus, LinkedEntity, RepairSummary};
pub use document::DocumentLinkService;
pub use sync::ProfileSyncService;
pub use webhook::{WebhookEvent, WebhookOperation, WebhookOutcome, WebhookService};
