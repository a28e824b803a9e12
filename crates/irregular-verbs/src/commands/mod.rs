//! Command implementations.

use irregular_verbs_core::VerbEntry;

pub mod generate;
pub mod info;
pub mod inspect;
pub mod list;

/// Format a header and verb rows as left-aligned, space-padded columns.
///
/// Returns one line per row, header first, without trailing whitespace.
pub fn format_rows(header: [&str; 3], rows: &[VerbEntry]) -> Vec<String> {
    let mut widths = [0usize; 3];
    let lines: Vec<[&str; 3]> = std::iter::once(header)
        .chain(rows.iter().map(VerbEntry::cells))
        .collect();

    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    lines
        .iter()
        .map(|[base, past, pp]| {
            format!(
                "{base:<bw$}  {past:<pw$}  {pp}",
                bw = widths[0],
                pw = widths[1],
            )
            .trim_end()
            .to_string()
        })
        .collect()
}
