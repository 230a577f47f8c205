use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use tep_scraper::pipeline;
use tep_scraper::types::{GeneAnnotations, TepSource};

struct StubSite {
    index: String,
    details: HashMap<String, String>,
}

#[async_trait]
impl TepSource for StubSite {
    async fn index_page(&self) -> tep_scraper::error::Result<String> {
        Ok(self.index.clone())
    }

    async fn detail_page(&self, url: &str) -> tep_scraper::error::Result<String> {
        Ok(self.details.get(url).cloned().unwrap_or_default())
    }
}

struct StubAnnotations {
    gene_ids: HashMap<String, String>,
    symbols: HashMap<String, String>,
}

#[async_trait]
impl GeneAnnotations for StubAnnotations {
    async fn gene_id_for_uniprot(
        &self,
        uniprot_id: &str,
    ) -> tep_scraper::error::Result<Option<String>> {
        Ok(self.gene_ids.get(uniprot_id).cloned())
    }

    async fn symbols_for_gene_ids(
        &self,
        gene_ids: &[String],
    ) -> tep_scraper::error::Result<HashMap<String, String>> {
        Ok(gene_ids
            .iter()
            .filter_map(|id| self.symbols.get(id).map(|s| (id.clone(), s.clone())))
            .collect())
    }
}

fn index_with_rows(rows: &str) -> String {
    format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
}

fn detail_with_accessions(accessions: &[&str]) -> String {
    let anchors: String = accessions
        .iter()
        .map(|id| format!(r#"<a href="https://www.uniprot.org/uniprot/{id}">{id}</a>"#))
        .collect();
    format!("<html><body>{anchors}</body></html>")
}

#[tokio::test]
async fn single_row_end_to_end() -> Result<()> {
    let site = StubSite {
        index: index_with_rows(
            r#"<tr>
                <td><a href="https://x/tep/foo">FOO</a></td>
                <td>FOO gene</td>
                <td>Cancer</td>
            </tr>"#,
        ),
        details: HashMap::from([(
            "https://x/tep/foo".to_string(),
            detail_with_accessions(&["P12345"]),
        )]),
    };
    let annotations = StubAnnotations {
        gene_ids: HashMap::from([("P12345".to_string(), "ENSG00000000001".to_string())]),
        symbols: HashMap::from([("ENSG00000000001".to_string(), "FOO".to_string())]),
    };

    let records = pipeline::run(&site, &annotations).await?;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.gene_id.as_deref(), Some("ENSG00000000001"));
    assert_eq!(record.symbol.as_deref(), Some("FOO"));
    assert_eq!(record.link, "https://x/tep/foo");
    assert_eq!(record.disease, "Cancer");
    assert_eq!(record.description, "FOO gene");
    assert_eq!(record.uniprot_id.as_deref(), Some("P12345"));
    Ok(())
}

#[tokio::test]
async fn rows_without_symbols_survive_the_join() -> Result<()> {
    let site = StubSite {
        index: index_with_rows(
            r#"<tr>
                <td><a href="/tep/bar">BAR</a></td>
                <td>BAR gene</td>
                <td>Inflammation</td>
            </tr>"#,
        ),
        details: HashMap::from([(
            "https://www.thesgc.org/tep/bar".to_string(),
            detail_with_accessions(&["Q99999"]),
        )]),
    };
    // The accession translates, but the symbol service knows nothing about
    // the resulting gene id.
    let annotations = StubAnnotations {
        gene_ids: HashMap::from([("Q99999".to_string(), "ENSG00000000002".to_string())]),
        symbols: HashMap::new(),
    };

    let records = pipeline::run(&site, &annotations).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].gene_id.as_deref(), Some("ENSG00000000002"));
    assert_eq!(records[0].symbol, None);
    Ok(())
}

#[tokio::test]
async fn entry_without_accessions_keeps_a_placeholder_row() -> Result<()> {
    let site = StubSite {
        index: index_with_rows(
            r#"<tr>
                <td><a href="/tep/empty">EMPTY</a></td>
                <td>No links</td>
                <td>Rare diseases</td>
            </tr>"#,
        ),
        details: HashMap::from([(
            "https://www.thesgc.org/tep/empty".to_string(),
            "<html><body><p>nothing linked</p></body></html>".to_string(),
        )]),
    };
    let annotations = StubAnnotations {
        gene_ids: HashMap::new(),
        symbols: HashMap::new(),
    };

    let records = pipeline::run(&site, &annotations).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].uniprot_id, None);
    assert_eq!(records[0].gene_id, None);
    assert_eq!(records[0].symbol, None);
    assert_eq!(records[0].disease, "Rare diseases");
    Ok(())
}

#[tokio::test]
async fn grouping_by_link_reconstructs_detail_output() -> Result<()> {
    let site = StubSite {
        index: index_with_rows(
            r#"<tr>
                <td><a href="/tep/multi">MULTI</a></td>
                <td>Two chains</td>
                <td>Oncology</td>
            </tr>
            <tr>
                <td><a href="/tep/solo">SOLO</a></td>
                <td>One chain</td>
                <td>Metabolism</td>
            </tr>"#,
        ),
        details: HashMap::from([
            (
                "https://www.thesgc.org/tep/multi".to_string(),
                detail_with_accessions(&["P11111", "P22222"]),
            ),
            (
                "https://www.thesgc.org/tep/solo".to_string(),
                detail_with_accessions(&["P33333"]),
            ),
        ]),
    };
    let annotations = StubAnnotations {
        gene_ids: HashMap::from([
            ("P11111".to_string(), "ENSG00000000011".to_string()),
            ("P22222".to_string(), "ENSG00000000022".to_string()),
            ("P33333".to_string(), "ENSG00000000033".to_string()),
        ]),
        symbols: HashMap::from([("ENSG00000000011".to_string(), "GENE11".to_string())]),
    };

    let records = pipeline::run(&site, &annotations).await?;
    assert_eq!(records.len(), 3);

    // Collecting accessions per detail link reconstructs the detail fetcher
    // output for each TEP, in order.
    let mut grouped: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in &records {
        grouped
            .entry(record.link.as_str())
            .or_default()
            .extend(record.uniprot_id.as_deref());
    }
    assert_eq!(
        grouped["https://www.thesgc.org/tep/multi"],
        vec!["P11111", "P22222"]
    );
    assert_eq!(grouped["https://www.thesgc.org/tep/solo"], vec!["P33333"]);

    // The join kept the rows whose gene ids had no symbol.
    let symbolless = records.iter().filter(|r| r.symbol.is_none()).count();
    assert_eq!(symbolless, 2);
    Ok(())
}
