/*
[INPUT]:  Document ids and account ids
[OUTPUT]: Document objects
[POS]:    HTTP layer - document read and simulation endpoints
[UPDATE]: When document endpoints change
*/

use super::client::path_segment;
use crate::http::{IncreaseClient, Result};
use crate::types::{Document, SimulateDocumentParams};

impl IncreaseClient {
    /// GET /documents/{document_id}
    pub async fn retrieve_document(&self, document_id: &str) -> Result<Document> {
        let id = path_segment("document_id", document_id)?;
        self.get_json(&format!("/documents/{id}"), &[]).await
    }

    /// Simulate generating an account verification letter
    ///
    /// POST /simulations/documents
    pub async fn simulate_document(&self, params: &SimulateDocumentParams) -> Result<Document> {
        self.post_json("/simulations/documents", Some(params)).await
    }
}
