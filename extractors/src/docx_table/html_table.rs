use crate::document_text::cell_text;
use regex::Regex;
use std::sync::LazyLock;

static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<table(?:\s[^>]*)?>(.*?)</table\s*>").expect("Invalid table regex")
});

static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<tr(?:\s[^>]*)?>(.*?)</tr\s*>").expect("Invalid row regex")
});

static TABLE_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<t[hd](?:\s[^>]*)?>(.*?)</t[hd]\s*>").expect("Invalid cell regex")
});

pub type TableRow = Vec<String>;
pub type Table = Vec<TableRow>;

/// Every table in `markup` as rows of cleaned cell text.
///
/// Rows without cells and tables without rows are dropped.
pub fn parse_tables(markup: &str) -> Vec<Table> {
    TABLE_BLOCK
        .captures_iter(markup)
        .map(|table| parse_rows(&table[1]))
        .filter(|rows| !rows.is_empty())
        .collect()
}

fn parse_rows(table_markup: &str) -> Table {
    TABLE_ROW
        .captures_iter(table_markup)
        .map(|row| {
            TABLE_CELL
                .captures_iter(&row[1])
                .map(|cell| cell_text(&cell[1]))
                .collect::<TableRow>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}
