//! Link drift detection & repair.
//!
//! Links between rows and documents are written from both sides and nothing keeps them in
//! step. The audit compares every linked table with every published document of its type and
//! classifies each row. Repair only fills in a missing half of a link; rows where the two
//! sides disagree are left for an editor.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::{
    data::{
        cms::DocumentRepository,
        linked::{LinkedRecordRepository, RecordTable},
    },
    error::Error,
    model::cms::{CmsDocument, MatchGallery, PlayerProfile, SponsorDocument, TeamDocument},
    service::resolver::{key, source::non_empty, DocumentSource, ReferenceCache},
};

/// Entity kinds that live in both systems
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkedEntity {
    Player,
    Match,
    Sponsor,
    Team,
}

/// State of the link between a row and its document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinkStatus {
    /// Row and document point at each other
    Consistent,
    /// Neither side references the other
    Unlinked,
    /// The document points at the row but the row has no `sanity_id`
    MissingBackReference { document_id: String },
    /// The row points at a document that has no external id
    MissingForwardReference { document_id: String },
    /// The row points at a document that points at another row
    Drift {
        document_id: String,
        document_record_id: String,
    },
    /// The row's `sanity_id` names no published document
    DanglingReference { document_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkFinding {
    pub entity: LinkedEntity,
    pub record_id: String,
    #[serde(flatten)]
    pub status: LinkStatus,
}

/// Audit result across every linked table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkReport {
    pub consistent: usize,
    pub unlinked: usize,
    pub missing_back_reference: usize,
    pub missing_forward_reference: usize,
    pub drift: usize,
    pub dangling_reference: usize,
    /// Every row that is not consistent
    pub findings: Vec<LinkFinding>,
}

impl LinkReport {
    /// Tally findings into a report
    pub fn from_findings(findings: impl IntoIterator<Item = LinkFinding>) -> Self {
        let mut report = Self::default();
        for finding in findings {
            report.record(finding);
        }

        report
    }

    fn record(&mut self, finding: LinkFinding) {
        match finding.status {
            LinkStatus::Consistent => {
                self.consistent += 1;
                return;
            }
            LinkStatus::Unlinked => self.unlinked += 1,
            LinkStatus::MissingBackReference { .. } => self.missing_back_reference += 1,
            LinkStatus::MissingForwardReference { .. } => self.missing_forward_reference += 1,
            LinkStatus::Drift { .. } => self.drift += 1,
            LinkStatus::DanglingReference { .. } => self.dangling_reference += 1,
        }

        self.findings.push(finding);
    }

    /// Number of findings [`LinkAuditService::repair`] can fix
    pub fn repairable(&self) -> usize {
        self.missing_back_reference + self.missing_forward_reference
    }
}

/// Outcome of a repair pass
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RepairSummary {
    /// Rows given the `sanity_id` of the document pointing at them
    pub back_references_set: usize,
    /// Documents given the id of the row pointing at them
    pub forward_references_set: usize,
    /// Drifted & dangling links, these need an editor
    pub skipped: usize,
    pub failed: usize,
}

/// Classify a row against the published documents of its type
fn classify<R, D>(
    row: &R,
    documents_by_id: &HashMap<&str, &D>,
    documents_by_record: &HashMap<&str, &D>,
) -> LinkStatus
where
    R: DocumentSource,
    D: CmsDocument,
{
    if let Some(document_id) = non_empty(row.sanity_id()) {
        let Some(document) = documents_by_id.get(document_id) else {
            return LinkStatus::DanglingReference {
                document_id: document_id.to_string(),
            };
        };

        return match non_empty(document.external_id()) {
            None => LinkStatus::MissingForwardReference {
                document_id: document_id.to_string(),
            },
            Some(record_id) if record_id == row.record_id() => LinkStatus::Consistent,
            Some(record_id) => LinkStatus::Drift {
                document_id: document_id.to_string(),
                document_record_id: record_id.to_string(),
            },
        };
    }

    match documents_by_record.get(row.record_id()) {
        Some(document) => LinkStatus::MissingBackReference {
            document_id: document.document_id().to_string(),
        },
        None => LinkStatus::Unlinked,
    }
}

pub struct LinkAuditService<'a> {
    db: &'a DatabaseConnection,
    cms: &'a sanity_client::Client,
    cache: &'a ReferenceCache,
}

impl<'a> LinkAuditService<'a> {
    /// Creates a new instance of [`LinkAuditService`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self { db, cms, cache }
    }

    /// Classify every row of a linked table
    ///
    /// Reads every row and every published document of the type, findings are in row id
    /// order. Unlike the resolvers, a failed query is returned as an error since a partial
    /// audit would under-report drift.
    pub async fn audit<E, D>(&self, entity: LinkedEntity) -> Result<Vec<LinkFinding>, Error>
    where
        E: RecordTable,
        D: CmsDocument,
    {
        let rows = LinkedRecordRepository::<_, E>::new(self.db).get_all().await?;
        let documents = DocumentRepository::new(self.cms).get_all::<D>().await?;

        let documents_by_id: HashMap<&str, &D> = documents
            .iter()
            .map(|document| (document.document_id(), document))
            .collect();

        let mut documents_by_record: HashMap<&str, &D> = HashMap::new();
        for document in &documents {
            if let Some(record_id) = non_empty(document.external_id()) {
                documents_by_record.entry(record_id).or_insert(document);
            }
        }

        Ok(rows
            .iter()
            .map(|row| LinkFinding {
                entity,
                record_id: row.record_id().to_string(),
                status: classify(row, &documents_by_id, &documents_by_record),
            })
            .collect())
    }

    pub async fn audit_players(&self) -> Result<Vec<LinkFinding>, Error> {
        self.audit::<entity::prelude::People, PlayerProfile>(LinkedEntity::Player)
            .await
    }

    pub async fn audit_matches(&self) -> Result<Vec<LinkFinding>, Error> {
        self.audit::<entity::prelude::Match, MatchGallery>(LinkedEntity::Match)
            .await
    }

    pub async fn audit_sponsors(&self) -> Result<Vec<LinkFinding>, Error> {
        self.audit::<entity::prelude::Sponsors, SponsorDocument>(LinkedEntity::Sponsor)
            .await
    }

    pub async fn audit_teams(&self) -> Result<Vec<LinkFinding>, Error> {
        self.audit::<entity::prelude::Teams, TeamDocument>(LinkedEntity::Team)
            .await
    }

    /// Audit every linked table into a single report
    pub async fn audit_all(&self) -> Result<LinkReport, Error> {
        let (players, matches, sponsors, teams) = futures::try_join!(
            self.audit_players(),
            self.audit_matches(),
            self.audit_sponsors(),
            self.audit_teams(),
        )?;

        Ok(LinkReport::from_findings(
            players.into_iter().chain(matches).chain(sponsors).chain(teams),
        ))
    }

    /// Fill in the missing half of every repairable link in `report`
    ///
    /// A failed write is logged and counted, the remaining findings are still repaired.
    /// Cache entries for every entity that was written to are dropped.
    pub async fn repair(&self, report: &LinkReport) -> RepairSummary {
        let mut summary = RepairSummary::default();
        let mut touched: Vec<LinkedEntity> = Vec::new();

        for finding in &report.findings {
            let result = match finding.entity {
                LinkedEntity::Player => {
                    self.repair_finding::<entity::prelude::People, PlayerProfile>(finding)
                        .await
                }
                LinkedEntity::Match => {
                    self.repair_finding::<entity::prelude::Match, MatchGallery>(finding)
                        .await
                }
                LinkedEntity::Sponsor => {
                    self.repair_finding::<entity::prelude::Sponsors, SponsorDocument>(finding)
                        .await
                }
                LinkedEntity::Team => {
                    self.repair_finding::<entity::prelude::Teams, TeamDocument>(finding)
                        .await
                }
            };

            match (result, &finding.status) {
                (Ok(true), LinkStatus::MissingBackReference { .. }) => {
                    summary.back_references_set += 1
                }
                (Ok(true), _) => summary.forward_references_set += 1,
                (Ok(false), LinkStatus::Drift { .. } | LinkStatus::DanglingReference { .. }) => {
                    summary.skipped += 1;
                    continue;
                }
                (Ok(false), _) => continue,
                (Err(err), _) => {
                    tracing::error!(
                        "Failed to repair {:?} link for row {}: {}",
                        finding.entity,
                        finding.record_id,
                        err
                    );
                    summary.failed += 1;
                    continue;
                }
            }

            if !touched.contains(&finding.entity) {
                touched.push(finding.entity);
            }
        }

        for entity in touched {
            self.invalidate(entity);
        }

        tracing::info!(
            back_references_set = summary.back_references_set,
            forward_references_set = summary.forward_references_set,
            skipped = summary.skipped,
            failed = summary.failed,
            "Link repair finished"
        );

        summary
    }

    /// Returns whether a write was made, `false` for findings that are not repairable
    async fn repair_finding<E, D>(&self, finding: &LinkFinding) -> Result<bool, Error>
    where
        E: RecordTable,
        D: CmsDocument,
    {
        match &finding.status {
            LinkStatus::MissingBackReference { document_id } => {
                let updated = LinkedRecordRepository::<_, E>::new(self.db)
                    .set_sanity_id(&finding.record_id, Some(document_id))
                    .await?;

                Ok(updated)
            }
            LinkStatus::MissingForwardReference { document_id } => {
                DocumentRepository::new(self.cms)
                    .set_external_id::<D>(document_id, &finding.record_id)
                    .await?;

                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Drop every cached entry for an entity's table & document type
    fn invalidate(&self, entity: LinkedEntity) {
        let (table, doc_type) = match entity {
            LinkedEntity::Player => (entity::prelude::People::TABLE, PlayerProfile::DOCUMENT_TYPE),
            LinkedEntity::Match => (entity::prelude::Match::TABLE, MatchGallery::DOCUMENT_TYPE),
            LinkedEntity::Sponsor => (
                entity::prelude::Sponsors::TABLE,
                SponsorDocument::DOCUMENT_TYPE,
            ),
            LinkedEntity::Team => (entity::prelude::Teams::TABLE, TeamDocument::DOCUMENT_TYPE),
        };

        let removed = self.cache.delete_prefix(&key::table_prefix(table))
            + self
                .cache
                .delete_prefix(&key::document_type_prefix(doc_type));

        tracing::debug!("Dropped {} cached {} entries", removed, table);
    }
}
