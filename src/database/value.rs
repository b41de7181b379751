use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// A bind parameter produced by the clause builders.
///
/// Nulls carry their storage type so an explicit `null` in a partial update
/// still binds as the column's type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Int(Option<i32>),
    Decimal(Option<Decimal>),
}

impl SqlValue {
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Int(v) => query.bind(v),
            SqlValue::Decimal(v) => query.bind(v),
        }
    }
}

/// Binds `values` onto `query` in order, so the n-th value fills `$n`.
pub fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        query = value.bind_to(query);
    }
    query
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(Some(value))
    }
}

impl From<Option<i32>> for SqlValue {
    fn from(value: Option<i32>) -> Self {
        SqlValue::Int(value)
    }
}

impl From<Option<Decimal>> for SqlValue {
    fn from(value: Option<Decimal>) -> Self {
        SqlValue::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_storage_type() {
        assert_eq!(SqlValue::from("dev"), SqlValue::Text(Some("dev".into())));
        assert_eq!(SqlValue::from(Some(5)), SqlValue::Int(Some(5)));
        assert_eq!(SqlValue::from(None::<Decimal>), SqlValue::Decimal(None));
    }
}
