use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// One row of the TEP index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TepEntry {
    /// Absolute URL of the TEP detail page.
    pub link: String,
    /// Therapeutic / disease area.
    pub disease: String,
    /// Short description of the target.
    pub description: String,
}

/// One flattened output row: a TEP entry crossed with a UniProt accession
/// and its Ensembl translation. `uniprot_id` is absent for entries whose
/// detail page referenced no accession; `gene_id` and `symbol` are absent
/// when the respective lookup found no match.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TepRecord {
    pub gene_id: Option<String>,
    pub symbol: Option<String>,
    pub link: String,
    pub disease: String,
    pub description: String,
    pub uniprot_id: Option<String>,
}

/// Source of the TEP pages themselves.
#[async_trait]
pub trait TepSource {
    /// Fetches the HTML of the TEP index page.
    async fn index_page(&self) -> Result<String>;

    /// Fetches the HTML of one TEP detail page.
    async fn detail_page(&self, url: &str) -> Result<String>;
}

/// Gene annotation lookups backing the identifier translation stage.
#[async_trait]
pub trait GeneAnnotations {
    /// Resolves a UniProt accession to an Ensembl gene id, `None` when the
    /// service has no usable cross-reference for it.
    async fn gene_id_for_uniprot(&self, uniprot_id: &str) -> Result<Option<String>>;

    /// Resolves a batch of Ensembl gene ids to display symbols. Ids the
    /// service does not know are simply absent from the returned map.
    async fn symbols_for_gene_ids(&self, gene_ids: &[String]) -> Result<HashMap<String, String>>;
}
