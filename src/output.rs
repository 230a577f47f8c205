use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::types::TepRecord;

/// Serialization mode for the result set; output is gzip-compressed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One JSON record per line.
    JsonLines,
    /// A single JSON object keyed by gene id.
    KeyedObject,
}

pub fn write_records(path: &Path, records: &[TepRecord], mode: OutputMode) -> Result<()> {
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());

    match mode {
        OutputMode::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut encoder, record)?;
                encoder.write_all(b"\n")?;
            }
        }
        OutputMode::KeyedObject => {
            let mut keyed = serde_json::Map::new();
            for record in records {
                // Rows that never resolved to a gene id cannot be keyed.
                let Some(gene_id) = &record.gene_id else {
                    debug!("Skipping row without gene id in keyed output: {}", record.link);
                    continue;
                };
                keyed.insert(
                    gene_id.clone(),
                    json!({
                        "id": gene_id,
                        "symbol": record.symbol,
                        "link": record.link,
                        "disease": record.disease,
                        "uniprot_id": record.uniprot_id,
                    }),
                );
            }
            serde_json::to_writer(&mut encoder, &serde_json::Value::Object(keyed))?;
        }
    }

    encoder.finish()?;
    Ok(())
}
