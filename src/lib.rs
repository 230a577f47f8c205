pub mod constants;
pub mod ensembl;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod scrapers;
pub mod types;
