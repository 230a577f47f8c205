/// TEP index page on the Structural Genomics Consortium site.
pub const SGC_TEP_URL: &str = "https://www.thesgc.org/tep";

/// Site origin used to absolutize relative detail links.
pub const SGC_BASE_URL: &str = "https://www.thesgc.org";

/// Ensembl REST endpoint mapping one UniProt accession to cross-references.
pub const ENSEMBL_XREF_URL: &str = "http://rest.ensembl.org/xrefs/symbol/homo_sapiens";

/// Ensembl REST endpoint for batched gene id lookups.
pub const ENSEMBL_LOOKUP_URL: &str = "http://rest.ensembl.org/lookup/id";
