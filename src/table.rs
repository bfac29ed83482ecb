//! Row table of in/out timecodes.
//!
//! The table is plain comma-separated text without a header:
//!
//! ```text
//! 00:00:01:00,00:00:04:12
//! 00:01:10:00,00:01:20:05
//! ```
//!
//! Blank lines are skipped. Cells are trimmed of whitespace and of
//! surrounding double quotes, which spreadsheet exports tend to add.

use std::path::{Path, PathBuf};

/// The table could not be read. Always fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read timecode table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed timecode table: line {line} has {found} columns, expected 2")]
    Columns { line: usize, found: usize },
}

/// One non-blank line of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based line number in the file.
    pub line: usize,
    pub start: String,
    pub end: String,
}

impl TableRow {
    /// The row as it would be written back to the table.
    pub fn raw(&self) -> String {
        format!("{},{}", self.start, self.end)
    }
}

/// Read and split the table at `path`.
///
/// # Errors
///
/// [`TableError::Read`] if the file cannot be read, [`TableError::Columns`]
/// if any row does not have exactly two columns.
pub fn read_table(path: &Path) -> Result<Vec<TableRow>, TableError> {
    let content = std::fs::read_to_string(path).map_err(|source| TableError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes of timecodes from {:?}", content.len(), path);

    parse_table(&content)
}

/// Split table text into rows.
pub fn parse_table(content: &str) -> Result<Vec<TableRow>, TableError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut rows = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(clean_cell).collect();
        let &[start, end] = cells.as_slice() else {
            return Err(TableError::Columns {
                line: idx + 1,
                found: cells.len(),
            });
        };

        rows.push(TableRow {
            line: idx + 1,
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(rows)
}

fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}
