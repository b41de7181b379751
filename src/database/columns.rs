//! Field/column naming for each table.
//!
//! API payloads use camelCase field names while the schema uses snake_case
//! columns. Each table owns exactly one [`ColumnMap`] and every statement
//! that reads or writes that table goes through it, so the two naming
//! schemes never drift apart.

/// Static, bidirectional mapping between API field names and storage columns.
///
/// Entries are `(field, column)` pairs in projection order.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Storage column backing `field`, if the field is known.
    pub fn column_for(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, column)| *column)
    }

    /// Projection for SELECT and RETURNING lists.
    ///
    /// Renamed columns are aliased back to their field name so rows decode
    /// straight into the API-facing struct.
    pub fn select_list(&self) -> String {
        self.entries
            .iter()
            .map(|(field, column)| {
                if field == column {
                    column.to_string()
                } else {
                    format!("{} AS \"{}\"", column, field)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("id", "id"),
    ("title", "title"),
    ("salary", "salary"),
    ("equity", "equity"),
    ("companyHandle", "company_handle"),
]);

pub const APPLICATION_COLUMNS: ColumnMap =
    ColumnMap::new(&[("username", "username"), ("jobId", "job_id")]);
