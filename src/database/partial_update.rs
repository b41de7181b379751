use crate::database::columns::ColumnMap;
use crate::database::value::SqlValue;
use crate::error::{Error, Result};

/// SET clause for a partial UPDATE, with its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    /// e.g. `"title"=$1, "company_handle"=$2`
    pub set_cols: String,
    pub values: Vec<SqlValue>,
}

impl SetClause {
    /// Position of the first placeholder after the SET parameters.
    ///
    /// Callers put the row key here, e.g. `WHERE id = $<next_placeholder>`.
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Builds the SET clause for updating a subset of a row's fields.
///
/// `fields` is an ordered list of `(field, value)` pairs. Each field is
/// renamed through `aliases` when it has a column there and used as-is
/// otherwise. Placeholder `$n` always refers to the n-th entry of `fields`
/// and values are passed through untouched, explicit nulls included.
///
/// ```text
/// [("title", "dev"), ("companyHandle", "c1")]
///   => "title"=$1, "company_handle"=$2   ["dev", "c1"]
/// ```
pub fn sql_for_partial_update(
    fields: Vec<(&str, SqlValue)>,
    aliases: &ColumnMap,
) -> Result<SetClause> {
    if fields.is_empty() {
        return Err(Error::BadRequest("No data".to_string()));
    }

    let mut cols = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    for (idx, (field, value)) in fields.into_iter().enumerate() {
        let column = aliases.column_for(field).unwrap_or(field);
        cols.push(format!("{}=${}", quote_ident(column), idx + 1));
        values.push(value);
    }

    Ok(SetClause {
        set_cols: cols.join(", "),
        values,
    })
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
