//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from static table descriptors.
//! Identifiers come only from [`Table`] constants; every value is a `$n` placeholder.

/// Columns and primary key of one table.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    /// All selected columns, primary key first.
    pub columns: &'static [&'static str],
}

pub const POSTS: Table = Table {
    name: "pastebin",
    pk: "post_id",
    columns: &["post_id", "post_title", "post_desc"],
};

pub const COMMENTS: Table = Table {
    name: "comments",
    pk: "comment_id",
    columns: &["comment_id", "post_id", "comment_desc"],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn keyword(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(cols: &[&str]) -> String {
    cols.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

fn order_clause(order: Option<(&str, Direction)>) -> String {
    order
        .map(|(col, dir)| format!(" ORDER BY {} {}", quoted(col), dir.keyword()))
        .unwrap_or_default()
}

/// SELECT every row, optionally ordered.
pub fn select_all(table: &Table, order: Option<(&str, Direction)>) -> String {
    format!(
        "SELECT {} FROM {}{}",
        column_list(table.columns),
        quoted(table.name),
        order_clause(order)
    )
}

/// SELECT rows where `column = $1`, optionally ordered.
pub fn select_where(table: &Table, column: &str, order: Option<(&str, Direction)>) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1{}",
        column_list(table.columns),
        quoted(table.name),
        quoted(column),
        order_clause(order)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &Table) -> String {
    select_where(table, table.pk, None)
}

/// INSERT the given columns, bound as `$1..$n` in order. Returns the full row.
pub fn insert(table: &Table, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        column_list(columns),
        placeholders.join(", "),
        column_list(table.columns)
    )
}

/// UPDATE by primary key: SET columns bound as `$1..$n`, id bound last as `$n+1`.
pub fn update(table: &Table, columns: &[&str]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        columns.len() + 1
    )
}

/// DELETE by primary key bound as `$1`.
pub fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table.name), quoted(table.pk))
}
