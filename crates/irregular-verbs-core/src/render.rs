//! Render a [`VerbTable`] into a `.docx` document.
//!
//! Layout, top to bottom:
//! 1. Centered title heading ("Irregular Verbs", `Title` style)
//! 2. Centered bold 12pt subtitle naming the three columns
//! 3. One blank paragraph
//! 4. A three-column table in the "Light Grid Accent 1" style: bold centered
//!    header row, then one centered row per verb in table order, with the grid
//!    drawn in [`ACCENT_COLOR`]

use std::fs::File;
use std::io::{Seek, Write};

use camino::{Utf8Path, Utf8PathBuf};
use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Style, StyleType, Table, TableBorder,
    TableBorderPosition, TableBorders, TableCell, TableRow,
};
use serde::Serialize;

use crate::error::{RenderError, RenderResult};
use crate::verbs::VerbTable;

/// Document title text.
pub const TITLE: &str = "Irregular Verbs";

/// Subtitle paragraph text.
pub const SUBTITLE: &str = "Base (Present) | Past | Past Participle";

/// Header row cells, in column order.
pub const HEADER: [&str; 3] = ["Base (Present)", "Past", "Past Participle"];

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "irregular_verbs.docx";

const TITLE_STYLE_ID: &str = "Title";
const TABLE_STYLE_ID: &str = "LightGrid-Accent1";

// Font sizes are in half-points.
const TITLE_SIZE: usize = 56;
const SUBTITLE_SIZE: usize = 24;

// Column widths in twentieths of a point.
const COLUMN_WIDTH: usize = 3000;

/// Accent 1 of the default Office theme, used for the table grid.
pub const ACCENT_COLOR: &str = "4F81BD";

// Border widths are in eighths of a point.
const BORDER_SIZE: usize = 8;

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    /// Where the document was written.
    pub path: Utf8PathBuf,
    /// Number of verb rows written (header excluded).
    pub rows_written: usize,
}

/// Render `table` to a `.docx` file at `destination`, replacing any existing file.
///
/// The file is closed before this returns, on success and on failure.
#[tracing::instrument(skip(table), fields(verbs = table.len()))]
pub fn render(table: &VerbTable, destination: &Utf8Path) -> RenderResult<RenderSummary> {
    let file = File::create(destination.as_std_path()).map_err(|source| RenderError::Create {
        path: destination.to_path_buf(),
        source,
    })?;

    let rows_written = pack(table, file, destination)?;
    tracing::debug!(path = %destination, rows = rows_written, "document written");

    Ok(RenderSummary {
        path: destination.to_path_buf(),
        rows_written,
    })
}

/// Render `table` into any seekable sink. Returns the number of verb rows written.
pub fn render_to_writer<W: Write + Seek>(table: &VerbTable, writer: W) -> RenderResult<usize> {
    pack(table, writer, Utf8Path::new("<writer>"))
}

fn pack<W: Write + Seek>(table: &VerbTable, writer: W, path: &Utf8Path) -> RenderResult<usize> {
    build_document(table)
        .build()
        .pack(writer)
        .map_err(|e| RenderError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(table.len())
}

/// Assemble the in-memory document for `table`.
pub fn build_document(table: &VerbTable) -> Docx {
    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(TableRow::new(
        HEADER.iter().map(|text| cell(text, true)).collect(),
    ));
    rows.extend(table.iter().map(|entry| {
        TableRow::new(
            entry
                .cells()
                .iter()
                .map(|text| cell(text, false))
                .collect(),
        )
    }));

    // Direct table borders override the style's, so both carry the accent.
    let verbs = Table::new(rows)
        .style(TABLE_STYLE_ID)
        .set_borders(accent_grid())
        .set_grid(vec![COLUMN_WIDTH; HEADER.len()]);

    Docx::new()
        .add_style(
            Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
                .name("Title")
                .size(TITLE_SIZE),
        )
        .add_style(
            Style::new(TABLE_STYLE_ID, StyleType::Table)
                .name("Light Grid Accent 1")
                .set_borders(accent_grid()),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(TITLE))
                .style(TITLE_STYLE_ID)
                .align(AlignmentType::Center),
        )
        .add_paragraph(centered(
            Run::new().add_text(SUBTITLE).size(SUBTITLE_SIZE).bold(),
        ))
        .add_paragraph(Paragraph::new())
        .add_table(verbs)
}

fn accent_grid() -> TableBorders {
    [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ]
    .into_iter()
    .fold(TableBorders::new(), |borders, position| {
        borders.set(
            TableBorder::new(position)
                .size(BORDER_SIZE)
                .color(ACCENT_COLOR),
        )
    })
}

fn centered(run: Run) -> Paragraph {
    Paragraph::new().add_run(run).align(AlignmentType::Center)
}

fn cell(text: &str, bold: bool) -> TableCell {
    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(centered(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::{VerbEntry, build_table};
    use docx_rs::{
        Bold, DocumentChild, ParagraphChild, Sz, TableCellContent, TableChild, TableRowChild,
        read_docx,
    };
    use std::io::Cursor;
    use tempfile::TempDir;

    const BORDER_POSITIONS: [&str; 6] = ["top", "left", "bottom", "right", "insideH", "insideV"];

    fn packed(table: &VerbTable) -> Docx {
        let mut buf = Cursor::new(Vec::new());
        render_to_writer(table, &mut buf).unwrap();
        read_docx(&buf.into_inner()).unwrap()
    }

    fn sample() -> VerbTable {
        build_table([
            VerbEntry::new("go", "went", "gone"),
            VerbEntry::new("be", "was/were", "been"),
        ])
    }

    fn is_centered(para: &Paragraph) -> bool {
        para.property
            .alignment
            .as_ref()
            .is_some_and(|j| j.val == "center")
    }

    fn runs(para: &Paragraph) -> Vec<&Run> {
        para.children
            .iter()
            .filter_map(|child| match child {
                ParagraphChild::Run(run) => Some(run.as_ref()),
                _ => None,
            })
            .collect()
    }

    /// Cell paragraphs of the first table, grouped by row.
    #[allow(unreachable_patterns)]
    fn table_paragraphs(docx: &Docx) -> Vec<Vec<&Paragraph>> {
        let table = docx
            .document
            .children
            .iter()
            .find_map(|child| match child {
                DocumentChild::Table(table) => Some(table),
                _ => None,
            })
            .unwrap();

        table
            .rows
            .iter()
            .map(|row| match row {
                TableChild::TableRow(row) => row
                    .cells
                    .iter()
                    .flat_map(|cell| match cell {
                        TableRowChild::TableCell(cell) => cell
                            .children
                            .iter()
                            .filter_map(|content| match content {
                                TableCellContent::Paragraph(para) => Some(para.as_ref()),
                                _ => None,
                            })
                            .collect::<Vec<_>>(),
                        _ => Vec::new(),
                    })
                    .collect(),
                _ => Vec::new(),
            })
            .collect()
    }

    fn assert_accent_borders(borders: &serde_json::Value) {
        for position in BORDER_POSITIONS {
            assert_eq!(
                borders[position]["color"], ACCENT_COLOR,
                "{position} border should use the accent colour"
            );
            assert_eq!(borders[position]["borderType"], "single");
        }
    }

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn writes_file_and_reports_row_count() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(tmp.path().join("verbs.docx"));
        let table = build_table([
            VerbEntry::new("go", "went", "gone"),
            VerbEntry::new("run", "ran", "run"),
        ]);

        let summary = render(&table, &dest).unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.path, dest);
        assert!(dest.is_file());
        assert!(std::fs::metadata(&dest).unwrap().len() > 0);
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(tmp.path().join("verbs.docx"));
        std::fs::write(&dest, "not a document").unwrap();

        render(&build_table(Vec::new()), &dest).unwrap();

        let bytes = std::fs::read(&dest).unwrap();
        // .docx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn missing_directory_is_create_error() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(tmp.path().join("no-such-dir").join("verbs.docx"));

        let err = render(&build_table(Vec::new()), &dest).unwrap_err();

        assert!(matches!(err, RenderError::Create { .. }));
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn directory_destination_is_create_error() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(tmp.path().to_path_buf());

        let err = render(&build_table(Vec::new()), &dest).unwrap_err();

        assert!(matches!(err, RenderError::Create { .. }));
    }

    #[test]
    fn table_style_draws_accent_grid() {
        let docx = packed(&sample());

        let style = docx.styles.find_style_by_id(TABLE_STYLE_ID).unwrap();
        let property = serde_json::to_value(&style.table_property).unwrap();

        assert_accent_borders(&property["borders"]);
    }

    #[test]
    fn table_borders_use_accent_colour() {
        let docx = packed(&sample());
        let table = docx
            .document
            .children
            .iter()
            .find_map(|child| match child {
                DocumentChild::Table(table) => Some(table),
                _ => None,
            })
            .unwrap();

        let property = serde_json::to_value(&table.property).unwrap();

        assert_eq!(property["style"], TABLE_STYLE_ID);
        assert_accent_borders(&property["borders"]);
    }

    #[test]
    fn title_and_subtitle_are_centered_and_subtitle_is_bold_12pt() {
        let docx = packed(&sample());
        let paragraphs: Vec<&Paragraph> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(para.as_ref()),
                _ => None,
            })
            .collect();

        let (title, subtitle) = (paragraphs[0], paragraphs[1]);
        assert!(is_centered(title));
        assert!(is_centered(subtitle));

        let subtitle_runs = runs(subtitle);
        assert!(!subtitle_runs.is_empty());
        for run in subtitle_runs {
            assert_eq!(run.run_property.bold, Some(Bold::new()));
            assert_eq!(run.run_property.sz, Some(Sz::new(SUBTITLE_SIZE)));
        }
    }

    #[test]
    fn header_is_bold_and_every_cell_is_centered() {
        let docx = packed(&sample());
        let rows = table_paragraphs(&docx);

        assert_eq!(rows.len(), 3);
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 3, "row {index} should have three cells");
            for para in row {
                assert!(is_centered(para), "row {index} has an uncentered cell");
                let bold = runs(para).iter().all(|run| run.run_property.bold.is_some());
                assert_eq!(bold, index == 0, "only the header row is bold");
            }
        }
    }

    #[test]
    fn renders_into_memory() {
        let table = build_table([VerbEntry::new("be", "was/were", "been")]);
        let mut buf = Cursor::new(Vec::new());

        let rows = render_to_writer(&table, &mut buf).unwrap();

        assert_eq!(rows, 1);
        assert!(!buf.into_inner().is_empty());
    }
}
