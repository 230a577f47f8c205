use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::error::Result;
use crate::scrapers::{tep_detail, tep_list};
use crate::types::{GeneAnnotations, TepEntry, TepRecord, TepSource};

/// Runs the four stages in sequence: index scrape, per-TEP accession scrape,
/// identifier translation, and the symbol join. Returns the flattened rows
/// ready for serialization.
pub async fn run(
    source: &dyn TepSource,
    annotations: &dyn GeneAnnotations,
) -> Result<Vec<TepRecord>> {
    let entries = tep_list::parse_index(&source.index_page().await?)?;
    info!("Number of TEPs retrieved: {}", entries.len());

    // Explode each entry into one row per accession. Entries whose detail
    // page references no accession keep a placeholder row so they survive
    // through to the output with null identifier fields.
    info!("Retrieving uniprot IDs.");
    let mut rows: Vec<(TepEntry, Option<String>)> = Vec::new();
    for entry in entries {
        let html = source.detail_page(&entry.link).await?;
        let uniprot_ids = tep_detail::extract_uniprot_ids(&entry.link, &html);
        if uniprot_ids.is_empty() {
            rows.push((entry, None));
        } else {
            for uniprot_id in uniprot_ids {
                rows.push((entry.clone(), Some(uniprot_id)));
            }
        }
    }
    info!("After exploding data by uniprot IDs, number of rows: {}", rows.len());

    // One translation call per distinct accession.
    info!("Fetching Ensembl IDs for uniprot ids.");
    let mut translations: HashMap<String, Option<String>> = HashMap::new();
    for uniprot_id in rows.iter().filter_map(|(_, id)| id.as_ref()) {
        if !translations.contains_key(uniprot_id) {
            let gene_id = annotations.gene_id_for_uniprot(uniprot_id).await?;
            translations.insert(uniprot_id.clone(), gene_id);
        }
    }

    // One batched symbol call over the distinct gene ids, first-seen order.
    info!("Retrieving gene symbols for each Ensembl ID.");
    let mut seen = HashSet::new();
    let mut gene_ids = Vec::new();
    for gene_id in rows
        .iter()
        .filter_map(|(_, id)| id.as_ref())
        .filter_map(|uniprot_id| translations[uniprot_id].as_ref())
    {
        if seen.insert(gene_id.clone()) {
            gene_ids.push(gene_id.clone());
        }
    }
    let symbols = annotations.symbols_for_gene_ids(&gene_ids).await?;

    // Outer join on gene id: rows without a matching symbol keep a null
    // symbol rather than being dropped.
    let records = rows
        .into_iter()
        .map(|(entry, uniprot_id)| {
            let gene_id = uniprot_id
                .as_ref()
                .and_then(|id| translations[id].clone());
            let symbol = gene_id.as_ref().and_then(|id| symbols.get(id).cloned());
            TepRecord {
                gene_id,
                symbol,
                link: entry.link,
                disease: entry.disease,
                description: entry.description,
                uniprot_id,
            }
        })
        .collect();

    Ok(records)
}
