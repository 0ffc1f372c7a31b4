//! Handle column selection strategies
//!
//! A [`ColumnSelector`] inspects the table and names the column holding the
//! channel handles. Selectors compose with [`FirstMatch`]; the default chain
//! tries the configured (or canonical) header name and then falls back to a
//! column whose values are mostly `@handles`.

use super::reader::InputTable;

/// Canonical header for the handle column
pub const DEFAULT_HANDLE_COLUMN: &str = "channel_user";

pub trait ColumnSelector: Send + Sync {
    /// Index of the chosen column, or `None` if this strategy finds nothing
    fn select(&self, table: &InputTable) -> Option<usize>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

/// Column with an exact header name
#[derive(Debug, Clone)]
pub struct NamedColumn {
    name: String,
}

impl NamedColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}

impl ColumnSelector for NamedColumn {
    fn select(&self, table: &InputTable) -> Option<usize> {
        table.column_index(&self.name)
    }

    fn describe(&self) -> String {
        format!("column named '{}'", self.name)
    }
}

/// First column where more than half of the non-empty cells start with `@`
#[derive(Debug, Clone, Default)]
pub struct HandlePrefixColumn;

impl ColumnSelector for HandlePrefixColumn {
    fn select(&self, table: &InputTable) -> Option<usize> {
        (0..table.headers.len()).find(|&index| {
            let (non_empty, prefixed) = table
                .column_values(index)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .fold((0usize, 0usize), |(total, at), v| {
                    (total + 1, at + usize::from(v.starts_with('@')))
                });
            non_empty > 0 && prefixed * 2 > non_empty
        })
    }

    fn describe(&self) -> String {
        "column of @handles".to_string()
    }
}

/// Tries each selector in order and returns the first hit
pub struct FirstMatch {
    selectors: Vec<Box<dyn ColumnSelector>>,
}

impl FirstMatch {
    pub fn new(selectors: Vec<Box<dyn ColumnSelector>>) -> Self {
        Self { selectors }
    }
}

impl ColumnSelector for FirstMatch {
    fn select(&self, table: &InputTable) -> Option<usize> {
        self.selectors.iter().find_map(|selector| {
            let index = selector.select(table)?;
            tracing::info!(
                strategy = %selector.describe(),
                column = %table.headers.get(index).map(String::as_str).unwrap_or(""),
                "Selected handle column"
            );
            Some(index)
        })
    }

    fn describe(&self) -> String {
        self.selectors
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Named column (configured, else `channel_user`), then the `@` heuristic
pub fn default_selector(configured: Option<&str>) -> FirstMatch {
    FirstMatch::new(vec![
        Box::new(NamedColumn::new(configured.unwrap_or(DEFAULT_HANDLE_COLUMN))),
        Box::new(HandlePrefixColumn),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> InputTable {
        InputTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_named_column() {
        let t = table(&["name", "channel_user"], &[&["A", "@a"]]);
        assert_eq!(NamedColumn::new("channel_user").select(&t), Some(1));
        assert_eq!(NamedColumn::new("Handle").select(&t), None);
    }

    #[test]
    fn test_prefix_heuristic_needs_majority() {
        let t = table(
            &["name", "mixed", "handles"],
            &[
                &["A", "@a", "@a"],
                &["B", "b", "@b"],
                &["C", "c", ""],
                &["D", "d", "d"],
            ],
        );
        assert_eq!(HandlePrefixColumn.select(&t), Some(2));
    }

    #[test]
    fn test_prefix_heuristic_ignores_blank_columns() {
        let t = table(&["empty", "names"], &[&["", "Alpha"], &["", "Beta"]]);
        assert_eq!(HandlePrefixColumn.select(&t), None);
    }

    #[test]
    fn test_default_selector_prefers_name() {
        let t = table(&["Handle", "channel_user"], &[&["@a", "x"]]);
        assert_eq!(default_selector(None).select(&t), Some(1));
        assert_eq!(default_selector(Some("Handle")).select(&t), Some(0));
    }

    #[test]
    fn test_default_selector_falls_back_to_heuristic() {
        let t = table(&["Name", "YouTube"], &[&["Alpha", "@alpha"], &["Beta", "@beta"]]);
        assert_eq!(default_selector(None).select(&t), Some(1));
    }

    #[test]
    fn test_no_column_found() {
        let t = table(&["Name"], &[&["Alpha"]]);
        let selector = default_selector(None);
        assert_eq!(selector.select(&t), None);
        assert_eq!(
            selector.describe(),
            "column named 'channel_user' or column of @handles"
        );
    }
}
