use scraper::{ElementRef, Html, Selector};

use crate::constants::SGC_BASE_URL;
use crate::error::{Result, ScraperError};
use crate::types::TepEntry;

/// Extracts TEP entries from the index page, in document order.
///
/// The listing lives in the last table on the page and cell positions are
/// load-bearing: the first cell holds the detail link, the second the target
/// description, the third the therapeutic area.
pub fn parse_index(html: &str) -> Result<Vec<TepEntry>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let table = document
        .select(&table_selector)
        .last()
        .ok_or_else(|| ScraperError::Structure("no table found on the TEP index page".into()))?;

    let mut entries = Vec::new();
    for row in table.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.len() < 3 {
            return Err(ScraperError::Structure(format!(
                "index row has {} cells, expected at least 3",
                cells.len()
            )));
        }

        let href = cells[0]
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| ScraperError::Structure("index row without a detail link".into()))?;

        entries.push(TepEntry {
            link: absolutize(href),
            description: cell_text(&cells[1]),
            disease: cell_text(&cells[2]),
        });
    }

    Ok(entries)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", SGC_BASE_URL, href)
    }
}
