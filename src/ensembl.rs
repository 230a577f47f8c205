use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::constants::{ENSEMBL_LOOKUP_URL, ENSEMBL_XREF_URL};
use crate::error::Result;
use crate::types::GeneAnnotations;

#[derive(Debug, Deserialize)]
struct XrefEntry {
    id: String,
    #[serde(rename = "type", default)]
    xref_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupEntry {
    display_name: Option<String>,
}

/// Client for the two Ensembl REST endpoints used by the pipeline.
///
/// The endpoints differ in cardinality: the symbol cross-reference takes one
/// accession per call, while the id lookup accepts a bulk identifier list,
/// hence the single/batch split below.
pub struct EnsemblRest {
    client: reqwest::Client,
}

impl EnsemblRest {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Picks the gene id out of an xref response: the first entry carrying a
    /// non-empty type field. A response with no usable entry resolves to
    /// `None` and logs one notice.
    fn gene_id_from_xrefs(uniprot_id: &str, entries: Vec<XrefEntry>) -> Option<String> {
        let gene_id = entries
            .into_iter()
            .find(|entry| entry.xref_type.as_deref().is_some_and(|t| !t.is_empty()))
            .map(|entry| entry.id);

        if gene_id.is_none() {
            info!("Failed to retrieve Ensembl id for: {}", uniprot_id);
        }
        gene_id
    }

    fn lookup_request(&self, gene_ids: &[String]) -> Result<reqwest::Request> {
        let request = self
            .client
            .post(ENSEMBL_LOOKUP_URL)
            .header(ACCEPT, "application/json")
            .json(&json!({ "ids": gene_ids }))
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl GeneAnnotations for EnsemblRest {
    async fn gene_id_for_uniprot(&self, uniprot_id: &str) -> Result<Option<String>> {
        let url = format!("{ENSEMBL_XREF_URL}/{uniprot_id}?content-type=application/json");
        let entries: Vec<XrefEntry> = self.client.get(&url).send().await?.json().await?;

        Ok(Self::gene_id_from_xrefs(uniprot_id, entries))
    }

    async fn symbols_for_gene_ids(&self, gene_ids: &[String]) -> Result<HashMap<String, String>> {
        // Unknown ids come back as null entries; drop those so the caller
        // sees a map of resolved symbols only.
        let response: HashMap<String, Option<LookupEntry>> = self
            .client
            .execute(self.lookup_request(gene_ids)?)
            .await?
            .json()
            .await?;

        Ok(response
            .into_iter()
            .filter_map(|(gene_id, entry)| {
                entry
                    .and_then(|e| e.display_name)
                    .map(|symbol| (gene_id, symbol))
            })
            .collect())
    }
}
