use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    service::{
        link::{LinkAuditService, LinkReport},
        resolver::ReferenceCache,
    },
};

/// Initialize and start the cron job scheduler
///
/// Registers the link audit on `cron` and starts the scheduler. The audit only reports;
/// repairs are requested through the API.
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, keep it alive for the jobs to run
/// - `Err(Error::SchedulerError)` - Invalid cron expression or the scheduler failed to start
pub async fn start_scheduler(
    cron: &str,
    db: &DatabaseConnection,
    cms_client: &sanity_client::Client,
    cache: &Arc<ReferenceCache>,
) -> Result<JobScheduler, Error> {
    let sched = JobScheduler::new().await?;

    let db = db.clone();
    let cms_client = cms_client.clone();
    let cache = Arc::clone(cache);

    sched
        .add(Job::new_async(cron, move |_, _| {
            let db = db.clone();
            let cms_client = cms_client.clone();
            let cache = Arc::clone(&cache);

            Box::pin(async move {
                let service = LinkAuditService::new(&db, &cms_client, &cache);

                match service.audit_all().await {
                    Ok(report) => log_report(&report),
                    Err(e) => tracing::error!("Error auditing links: {:?}", e),
                }
            })
        })?)
        .await?;

    sched.start().await?;

    tracing::info!("Scheduled link audit on {}", cron);

    Ok(sched)
}

fn log_report(report: &LinkReport) {
    if report.drift + report.dangling_reference + report.repairable() == 0 {
        tracing::info!(
            consistent = report.consistent,
            unlinked = report.unlinked,
            "Link audit found no drift"
        );

        return;
    }

    tracing::warn!(
        consistent = report.consistent,
        unlinked = report.unlinked,
        missing_back_reference = report.missing_back_reference,
        missing_forward_reference = report.missing_forward_reference,
        drift = report.drift,
        dangling_reference = report.dangling_reference,
        "Link audit found {} repairable link(s)",
        report.repairable()
    );
}
