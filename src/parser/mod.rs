//! Extraction of patch rows from the rendered Patches page.
//!
//! The page holds one `wikitable` per expansion era. Every marker table is
//! read positionally and the results are concatenated in document order.

pub mod date;
pub mod table;
pub mod text;
pub mod version;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::constants::MARKER_CLASS;
use crate::error::{Result, TimelineError};
use crate::types::PatchRow;

pub use date::parse_date_maybe;
pub use table::{extract_rows, extract_rows_from_table, table_cells, Cell, CellKind};
pub use text::clean_text;
pub use version::extract_version;

static MARKER_TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!("table.{}", MARKER_CLASS)).expect("table selector is valid")
});

/// All data tables in document order. Layout and navigation tables are skipped.
pub fn marker_tables(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&MARKER_TABLE_SELECTOR).collect()
}

/// Extracts patch rows from every marker table. An empty result is not an
/// error here; see [`extract_timeline`] for the checked variant.
pub fn extract_all_rows(document: &Html) -> Vec<PatchRow> {
    let mut all_rows = Vec::new();
    for (index, table) in marker_tables(document).into_iter().enumerate() {
        let rows = extract_rows_from_table(table);
        debug!("Table {} yielded {} patch rows", index, rows.len());
        all_rows.extend(rows);
    }
    all_rows
}

/// Parses the page HTML and extracts the timeline, failing when the page no
/// longer has the expected structure.
pub fn extract_timeline(html: &str) -> Result<Vec<PatchRow>> {
    let document = Html::parse_document(html);

    let table_count = marker_tables(&document).len();
    if table_count == 0 {
        return Err(TimelineError::NoTables);
    }

    let rows = extract_all_rows(&document);
    info!("Extracted {} patch rows from {} tables", rows.len(), table_count);
    if rows.is_empty() {
        return Err(TimelineError::NoRows);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTI_TABLE_HTML: &str = r#"
        <div>
            <table class="wikitable">
                <tr><td>Patch 4.1.3</td><td>9 January 2018</td><td>61021</td><td>Bug Fixes</td></tr>
            </table>
            <table class="navbox">
                <tr><td>Patch 9.9.9</td><td>1 January 2030</td><td>1</td></tr>
            </table>
            <table class="wikitable sortable">
                <tr><td>Patch 3.19.1</td><td>12 October 2017</td><td>58600</td><td>General</td></tr>
            </table>
        </div>
    "#;

    #[test]
    fn test_extract_all_rows_combines_tables_in_order() {
        let document = Html::parse_document(MULTI_TABLE_HTML);
        let rows = extract_all_rows(&document);

        let versions: Vec<&str> = rows.iter().map(|r| r.patch_id()).collect();
        assert_eq!(versions, vec!["4.1.3", "3.19.1"]);
    }

    #[test]
    fn test_extract_all_rows_empty_when_no_tables() {
        let document = Html::parse_document("<div>No tables</div>");
        assert!(extract_all_rows(&document).is_empty());
    }

    #[test]
    fn test_extract_timeline_no_tables_is_error() {
        let err = extract_timeline("<div>No tables</div>").unwrap_err();
        assert!(matches!(err, TimelineError::NoTables));
    }

    #[test]
    fn test_extract_timeline_no_rows_is_error() {
        let html = r#"<table class="wikitable"><tr><th>Notes</th></tr><tr><td>Patch 17</td></tr></table>"#;
        let err = extract_timeline(html).unwrap_err();
        assert!(matches!(err, TimelineError::NoRows));
    }
}
