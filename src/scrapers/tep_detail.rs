use scraper::{Html, Selector};
use tracing::info;

/// Extracts UniProt accessions from a TEP detail page.
///
/// Accessions are linked rather than printed: any anchor whose href contains
/// "uniprot" points at a protein record, and the accession is the final path
/// segment of that href. Anchors without an href are skipped. Finding none is
/// a normal condition for some TEPs and is only logged.
pub fn extract_uniprot_ids(detail_url: &str, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").unwrap();

    let mut ids = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains("uniprot") {
            continue;
        }
        match href.rsplit('/').next() {
            Some(id) if !id.is_empty() => ids.push(id.to_string()),
            _ => {}
        }
    }

    if ids.is_empty() {
        info!("Failed to retrieve uniprot ids from this TEP: {}", detail_url);
    }

    ids
}
