//! In-memory roster table and row views.

use crate::schema::RosterSchema;

/// Returns the trimmed cell value, or `None` for the missing sentinel
/// (blank or a stringified "nan" left over from spreadsheet exports).
pub fn clean_cell(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(trimmed)
}

/// An ordered table of string cells with named columns.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to `name` (exact match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn row(&self, index: usize) -> Option<RosterRow<'_>> {
        self.rows.get(index).map(|cells| RosterRow {
            headers: &self.headers,
            cells,
        })
    }
}

/// Borrowed view of one table row paired with its headers.
#[derive(Debug, Clone, Copy)]
pub struct RosterRow<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> RosterRow<'a> {
    pub fn new(headers: &'a [String], cells: &'a [String]) -> Self {
        Self { headers, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn headers(&self) -> &'a [String] {
        self.headers
    }

    /// Raw cell under the exactly-named column.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|header| header == column)?;
        self.cells.get(index).map(String::as_str)
    }

    /// Cleaned cell under the exactly-named column ([`clean_cell`] applied).
    pub fn value(&self, column: &str) -> Option<&'a str> {
        self.get(column).and_then(clean_cell)
    }

    pub fn header_at(&self, index: usize) -> Option<&'a str> {
        self.headers.get(index).map(String::as_str)
    }

    pub fn cell_at(&self, index: usize) -> Option<&'a str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A loaded roster: the table plus the schema resolved for it at load time.
///
/// The pair is built once per load and shared immutably; every selection
/// reads through the same resolved column names.
#[derive(Debug, Clone)]
pub struct Roster {
    pub table: CsvTable,
    pub schema: RosterSchema,
}

impl Roster {
    pub fn row(&self, index: usize) -> Option<RosterRow<'_>> {
        self.table.row(index)
    }
}
