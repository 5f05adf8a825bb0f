use sanity_client::{Mutation, Params};

use crate::server::model::cms::CmsDocument;

/// Queries & patches documents of a [`CmsDocument`] type
///
/// Every query is parameterised, ids are never interpolated into GROQ.
pub struct DocumentRepository<'a> {
    client: &'a sanity_client::Client,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(client: &'a sanity_client::Client) -> Self {
        Self { client }
    }

    /// Get a document by `_id`
    pub async fn get_by_id<D: CmsDocument>(
        &self,
        document_id: &str,
    ) -> Result<Option<D>, sanity_client::Error> {
        let params = Params::new()
            .with("docType", D::DOCUMENT_TYPE)
            .with("id", document_id);

        self.client
            .fetch("*[_type == $docType && _id == $id][0]", &params)
            .await
    }

    /// Get the document whose external-id field holds `record_id`
    pub async fn get_by_external_id<D: CmsDocument>(
        &self,
        record_id: &str,
    ) -> Result<Option<D>, sanity_client::Error> {
        let query = format!(
            "*[_type == $docType && {} == $externalId][0]",
            D::EXTERNAL_ID_FIELD
        );
        let params = Params::new()
            .with("docType", D::DOCUMENT_TYPE)
            .with("externalId", record_id);

        self.client.fetch(&query, &params).await
    }

    /// Get every document whose `_id` is in `document_ids`
    pub async fn get_many_by_ids<D: CmsDocument>(
        &self,
        document_ids: &[&str],
    ) -> Result<Vec<D>, sanity_client::Error> {
        if document_ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = Params::new()
            .with("docType", D::DOCUMENT_TYPE)
            .with("ids", document_ids.to_vec());

        let documents = self
            .client
            .fetch("*[_type == $docType && _id in $ids]", &params)
            .await?;

        Ok(documents.unwrap_or_default())
    }

    /// Get every document whose external-id field is in `record_ids`
    pub async fn get_many_by_external_ids<D: CmsDocument>(
        &self,
        record_ids: &[&str],
    ) -> Result<Vec<D>, sanity_client::Error> {
        if record_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "*[_type == $docType && {} in $externalIds]",
            D::EXTERNAL_ID_FIELD
        );
        let params = Params::new()
            .with("docType", D::DOCUMENT_TYPE)
            .with("externalIds", record_ids.to_vec());

        let documents = self.client.fetch(&query, &params).await?;

        Ok(documents.unwrap_or_default())
    }

    /// Get every published document of the type
    pub async fn get_all<D: CmsDocument>(&self) -> Result<Vec<D>, sanity_client::Error> {
        let params = Params::new().with("docType", D::DOCUMENT_TYPE);

        let documents = self
            .client
            .fetch(
                "*[_type == $docType && !(_id in path(\"drafts.**\"))]",
                &params,
            )
            .await?;

        Ok(documents.unwrap_or_default())
    }

    /// Point a document's external-id field at `record_id`
    pub async fn set_external_id<D: CmsDocument>(
        &self,
        document_id: &str,
        record_id: &str,
    ) -> Result<(), sanity_client::Error> {
        self.client
            .mutate(&[Mutation::set_field(
                document_id,
                D::EXTERNAL_ID_FIELD,
                record_id,
            )])
            .await?;

        Ok(())
    }

    /// Remove a document's external-id field
    pub async fn unset_external_id<D: CmsDocument>(
        &self,
        document_id: &str,
    ) -> Result<(), sanity_client::Error> {
        self.client
            .mutate(&[Mutation::unset_field(document_id, D::EXTERNAL_ID_FIELD)])
            .await?;

        Ok(())
    }
}
