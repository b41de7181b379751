use crate::database::value::SqlValue;

/// Optional search criteria; any subset may be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match.
    pub text_contains: Option<String>,
    /// Inclusive lower bound.
    pub min_numeric: Option<i32>,
    /// `Some(true)` keeps rows whose flag column is positive; `Some(false)`
    /// and `None` both leave the predicate out.
    pub flag_present: Option<bool>,
}

/// Columns the three criteria apply to.
#[derive(Debug, Clone, Copy)]
pub struct FilterColumns {
    pub text: &'static str,
    pub numeric: &'static str,
    pub flag: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterClause {
    /// Either empty or a complete `WHERE ...` fragment.
    pub where_clause: String,
    pub params: Vec<SqlValue>,
}

impl FilterClause {
    pub fn is_empty(&self) -> bool {
        self.where_clause.is_empty()
    }
}

/// Builds the WHERE clause for a search.
///
/// Predicates are always emitted in the same order (text, numeric, flag) and
/// joined with AND, so a given criterion lands on the same placeholder no
/// matter which of the others are set. The flag predicate never binds a
/// parameter.
pub fn build_filter(criteria: &FilterCriteria, columns: &FilterColumns) -> FilterClause {
    let mut filters = Vec::new();
    let mut params: Vec<SqlValue> = Vec::new();

    if let Some(text) = &criteria.text_contains {
        params.push(format!("%{}%", text).into());
        filters.push(format!("{} ILIKE ${}", columns.text, params.len()));
    }
    if let Some(min) = criteria.min_numeric {
        params.push(min.into());
        filters.push(format!("{} >= ${}", columns.numeric, params.len()));
    }
    if criteria.flag_present == Some(true) {
        filters.push(format!("{} > 0", columns.flag));
    }

    let where_clause = if filters.is_empty() {
        "".to_string()
    } else {
        format!("WHERE {}", filters.join(" AND "))
    };

    FilterClause {
        where_clause,
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: FilterColumns = FilterColumns {
        text: "title",
        numeric: "salary",
        flag: "equity",
    };

    #[test]
    fn no_criteria_is_an_unconditional_scan() {
        let clause = build_filter(&FilterCriteria::default(), &COLUMNS);
        assert!(clause.is_empty());
        assert!(clause.params.is_empty());
    }

    #[test]
    fn text_is_wrapped_in_wildcards() {
        let clause = build_filter(
            &FilterCriteria {
                text_contains: Some("eng".into()),
                ..Default::default()
            },
            &COLUMNS,
        );
        assert_eq!(clause.where_clause, "WHERE title ILIKE $1");
        assert_eq!(clause.params, vec![SqlValue::Text(Some("%eng%".into()))]);
    }

    #[test]
    fn minimum_is_inclusive() {
        let clause = build_filter(
            &FilterCriteria {
                min_numeric: Some(100),
                ..Default::default()
            },
            &COLUMNS,
        );
        assert_eq!(clause.where_clause, "WHERE salary >= $1");
        assert_eq!(clause.params, vec![SqlValue::Int(Some(100))]);
    }

    #[test]
    fn flag_binds_no_parameter() {
        let clause = build_filter(
            &FilterCriteria {
                flag_present: Some(true),
                ..Default::default()
            },
            &COLUMNS,
        );
        assert_eq!(clause.where_clause, "WHERE equity > 0");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn false_flag_is_the_same_as_absent() {
        let with_false = build_filter(
            &FilterCriteria {
                min_numeric: Some(10),
                flag_present: Some(false),
                ..Default::default()
            },
            &COLUMNS,
        );
        let absent = build_filter(
            &FilterCriteria {
                min_numeric: Some(10),
                ..Default::default()
            },
            &COLUMNS,
        );
        assert_eq!(with_false, absent);
    }

    #[test]
    fn all_criteria_in_fixed_order() {
        let clause = build_filter(
            &FilterCriteria {
                text_contains: Some("dev".into()),
                min_numeric: Some(5000),
                flag_present: Some(true),
            },
            &COLUMNS,
        );
        assert_eq!(
            clause.where_clause,
            "WHERE title ILIKE $1 AND salary >= $2 AND equity > 0"
        );
        assert_eq!(
            clause.params,
            vec![SqlValue::Text(Some("%dev%".into())), SqlValue::Int(Some(5000))]
        );
    }

    #[test]
    fn numeric_and_flag_without_text() {
        let clause = build_filter(
            &FilterCriteria {
                min_numeric: Some(1),
                flag_present: Some(true),
                ..Default::default()
            },
            &COLUMNS,
        );
        assert_eq!(clause.where_clause, "WHERE salary >= $1 AND equity > 0");
    }
}
