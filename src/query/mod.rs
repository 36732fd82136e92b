//! Read queries over the ranking collections.
//!
//! A [`Query`] is built once per request and rendered either to a
//! parameterized SQL statement or to PostgREST query pairs. Tables and
//! columns are closed enums, so only filter values come from the caller.

mod columns;

pub use columns::{Column, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    fn rest(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Columns(Vec<Column>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: Column,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table: Table,
    selection: Selection,
    filters: Vec<Filter>,
    order: Option<(Column, Direction)>,
    limit: Option<usize>,
}

/// SQL text plus its positional parameters (`?1`, `?2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<String>,
}

impl Query {
    pub fn from(table: Table) -> Self {
        Self {
            table,
            selection: Selection::All,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &[Column]) -> Self {
        self.selection = Selection::Columns(columns.to_vec());
        self
    }

    /// Adds an equality filter; filters combine with AND.
    pub fn eq(mut self, column: Column, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column,
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, column: Column, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn to_sql(&self) -> SqlStatement {
        let mut sql = format!("SELECT {} FROM {}", self.sql_columns(), self.table.name());

        if !self.filters.is_empty() {
            let clauses: Vec<String> = self
                .filters
                .iter()
                .enumerate()
                .map(|(i, f)| format!("{} = ?{}", f.column.name(), i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some((column, direction)) = self.order {
            sql.push_str(&format!(" ORDER BY {} {}", column.name(), direction.sql()));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        SqlStatement {
            sql,
            params: self.filters.iter().map(|f| f.value.clone()).collect(),
        }
    }

    /// Renders the query string pairs of a PostgREST `GET /{table}` request.
    pub fn to_rest_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.rest_columns())];

        for filter in &self.filters {
            params.push((filter.column.name().to_string(), format!("eq.{}", filter.value)));
        }

        if let Some((column, direction)) = self.order {
            params.push((
                "order".to_string(),
                format!("{}.{}", column.name(), direction.rest()),
            ));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }

    fn sql_columns(&self) -> String {
        match &self.selection {
            Selection::All => "*".to_string(),
            Selection::Columns(columns) => join_names(columns, ", "),
        }
    }

    fn rest_columns(&self) -> String {
        match &self.selection {
            Selection::All => "*".to_string(),
            Selection::Columns(columns) => join_names(columns, ","),
        }
    }
}

fn join_names(columns: &[Column], separator: &str) -> String {
    columns
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(separator)
}
