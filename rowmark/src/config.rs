//! Table configuration types.

use serde::{Deserialize, Serialize};

use crate::status::InsertPosition;

/// Per-table configuration.
///
/// Serializable so a host can keep it alongside its own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Display name, used in log output.
    pub name: String,

    /// Field `remove_items_by_key` matches values against.
    pub key_field: String,

    /// Where `add_item` places new rows.
    pub insert_position: InsertPosition,

    /// What "every row is checked" means for an empty dataset.
    pub empty_policy: EmptyPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "table".to_string(),
            key_field: "id".to_string(),
            insert_position: InsertPosition::End,
            empty_policy: EmptyPolicy::default(),
        }
    }
}

impl TableConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the key field used by `remove_items_by_key`.
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    /// Set the default insert position.
    pub fn insert_position(mut self, position: InsertPosition) -> Self {
        self.insert_position = position;
        self
    }

    /// Set the empty dataset policy.
    pub fn empty_policy(mut self, policy: EmptyPolicy) -> Self {
        self.empty_policy = policy;
        self
    }
}

/// Result of "is every row checked" for a table with no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// No row is unchecked, so all rows are checked.
    #[default]
    AllChecked,

    /// An empty table never counts as fully checked.
    NoneChecked,
}

impl EmptyPolicy {
    /// Value reported for an empty dataset.
    pub fn all_checked(self) -> bool {
        matches!(self, Self::AllChecked)
    }
}
