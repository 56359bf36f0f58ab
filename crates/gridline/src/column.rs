//! Column identity: a display name plus a key flag.

use serde::{Deserialize, Serialize};

/// Identifies one column of a [`Table`](crate::Table): a display name and a
/// flag marking whether the column holds key values.
///
/// The key flag is descriptive only — no uniqueness constraint is enforced
/// here or by the owning table.
///
/// # Example
///
/// ```rust
/// use gridline::ColumnId;
///
/// let id = ColumnId::new("id").with_key(true);
/// assert_eq!(id.name(), "id");
/// assert!(id.is_key());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnId {
    name: String,
    is_key: bool,
}

impl ColumnId {
    /// Create a column with the given name. The key flag starts unset.
    pub fn new(name: impl Into<String>) -> Self {
        ColumnId {
            name: name.into(),
            is_key: false,
        }
    }

    /// Set the key flag, consuming and returning the column.
    pub fn with_key(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }

    /// The column's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the column.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the column is marked as holding key values.
    pub fn is_key(&self) -> bool {
        self.is_key
    }

    /// Mark or unmark the column as holding key values.
    pub fn set_key(&mut self, is_key: bool) {
        self.is_key = is_key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_has_no_key_flag() {
        let col = ColumnId::new("test");
        assert_eq!(col.name(), "test");
        assert!(!col.is_key());
    }

    #[test]
    fn with_key_sets_the_flag() {
        let col = ColumnId::new("testkey").with_key(true);
        assert_eq!(col.name(), "testkey");
        assert!(col.is_key());
    }

    #[test]
    fn key_flag_can_be_cleared() {
        let mut col = ColumnId::new("testkey").with_key(true);
        col.set_key(false);
        assert!(!col.is_key());
    }

    #[test]
    fn rename_keeps_the_key_flag() {
        let mut col = ColumnId::new("before").with_key(true);
        col.set_name("after");
        assert_eq!(col.name(), "after");
        assert!(col.is_key());
    }
}
