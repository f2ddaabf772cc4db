use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::trace;

use super::date::parse_date_maybe;
use super::text::clean_text;
use super::version::extract_version;
use crate::types::PatchRow;

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("row selector is valid"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("cell selector is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Data,
}

/// A table cell reduced to its kind and raw text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub text: String,
}

impl Cell {
    pub fn header(text: impl Into<String>) -> Self {
        Self { kind: CellKind::Header, text: text.into() }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self { kind: CellKind::Data, text: text.into() }
    }
}

/// Builds patch rows from a table's cells.
///
/// Columns are positional: patch, release date (NA), build, then anything
/// else (highlights) which is ignored. Header rows are recognized by a
/// header first cell, since some tables on the page have no header row.
pub fn extract_rows(rows: &[Vec<Cell>]) -> Vec<PatchRow> {
    rows.iter().filter_map(|cells| extract_row(cells)).collect()
}

fn extract_row(cells: &[Cell]) -> Option<PatchRow> {
    let first = cells.first()?;
    if first.kind == CellKind::Header {
        return None;
    }

    let Some(patch_id) = extract_version(&first.text) else {
        trace!("Dropping row without a version: {:?}", clean_text(&first.text));
        return None;
    };

    let release_date_na = cells.get(1).and_then(|cell| parse_date_maybe(&cell.text));

    let build = cells
        .get(2)
        .map(|cell| clean_text(&cell.text))
        .filter(|text| !text.is_empty() && text != "-");

    Some(PatchRow::new(patch_id, build, release_date_na))
}

/// Reads every `tr` of a table into cells, keeping `th`/`td` as the kind.
pub fn table_cells(table: ElementRef<'_>) -> Vec<Vec<Cell>> {
    table
        .select(&ROW_SELECTOR)
        .map(|tr| {
            tr.select(&CELL_SELECTOR)
                .map(|cell| {
                    let kind = if cell.value().name() == "th" {
                        CellKind::Header
                    } else {
                        CellKind::Data
                    };
                    Cell {
                        kind,
                        text: cell.text().collect::<Vec<_>>().join(" "),
                    }
                })
                .collect()
        })
        .collect()
}

pub fn extract_rows_from_table(table: ElementRef<'_>) -> Vec<PatchRow> {
    extract_rows(&table_cells(table))
}
