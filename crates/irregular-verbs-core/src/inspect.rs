//! Read back the logical contents of a generated document.
//!
//! Only text is compared: cell text, row count, and column order. Container
//! bytes vary between writer versions and are ignored.

use camino::{Utf8Path, Utf8PathBuf};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};
use serde::Serialize;

use crate::error::{InspectError, InspectResult};
use crate::verbs::VerbEntry;

/// Text content recovered from a rendered verb document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableContents {
    /// Source path.
    pub path: Utf8PathBuf,
    /// Text of each paragraph preceding the table, blank ones included.
    pub paragraphs: Vec<String>,
    /// Header row cells.
    pub header: [String; 3],
    /// Data rows, in document order.
    pub rows: Vec<VerbEntry>,
}

impl TableContents {
    /// First non-blank paragraph, if any.
    pub fn title(&self) -> Option<&str> {
        self.paragraphs
            .iter()
            .map(String::as_str)
            .find(|p| !p.trim().is_empty())
    }

    /// Total table rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Open the `.docx` at `path` and extract its first table.
#[tracing::instrument]
pub fn inspect(path: &Utf8Path) -> InspectResult<TableContents> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    inspect_bytes(path, &bytes)
}

/// Extract the first table from raw `.docx` bytes. `path` is used for error reporting.
pub fn inspect_bytes(path: &Utf8Path, bytes: &[u8]) -> InspectResult<TableContents> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| InspectError::Parse {
        path: path.to_path_buf(),
        message: format!("{e:?}"),
    })?;

    let mut paragraphs = Vec::new();
    let mut grid: Option<Vec<Vec<String>>> = None;

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => paragraphs.push(paragraph_text(para)),
            DocumentChild::Table(table) => {
                grid = Some(table.rows.iter().map(row_cells).collect());
                break;
            }
            _ => {}
        }
    }

    let grid = grid.ok_or_else(|| InspectError::MissingTable {
        path: path.to_path_buf(),
    })?;

    let mut grid = grid.into_iter().enumerate();
    let (_, cells) = grid.next().ok_or_else(|| bad_row(path, 0, 0))?;
    let len = cells.len();
    let header = <[String; 3]>::try_from(cells).map_err(|_| bad_row(path, 0, len))?;

    let rows = grid
        .map(|(index, cells)| {
            let len = cells.len();
            <[String; 3]>::try_from(cells)
                .map(|[base, past, past_participle]| VerbEntry::new(base, past, past_participle))
                .map_err(|_| bad_row(path, index, len))
        })
        .collect::<InspectResult<Vec<_>>>()?;

    tracing::debug!(rows = rows.len(), "document inspected");

    Ok(TableContents {
        path: path.to_path_buf(),
        paragraphs,
        header,
        rows,
    })
}

fn bad_row(path: &Utf8Path, row: usize, cells: usize) -> InspectError {
    InspectError::BadRow {
        path: path.to_path_buf(),
        row,
        cells,
    }
}

#[allow(unreachable_patterns)]
fn row_cells(child: &TableChild) -> Vec<String> {
    match child {
        TableChild::TableRow(row) => row
            .cells
            .iter()
            .filter_map(|cell| match cell {
                TableRowChild::TableCell(cell) => Some(cell_text(&cell.children)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn cell_text(contents: &[TableCellContent]) -> String {
    contents
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
