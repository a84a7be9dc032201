//! TableRow trait for dataset records.

use std::collections::HashMap;

use serde_json::Value;

/// Trait for records held by a table.
///
/// Rows are identified by their position in the dataset. The only thing the
/// table needs to know about a row's contents is how to look up a key field,
/// which `remove_items` uses to find the row to drop.
///
/// # Example
///
/// ```
/// use rowmark::row::TableRow;
/// use serde_json::{json, Value};
///
/// #[derive(Clone, Debug)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(json!(self.id)),
///             "name" => Some(json!(self.name)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + 'static {
    /// Value of the named field, if the row has one.
    fn field(&self, name: &str) -> Option<Value>;
}

impl TableRow for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl TableRow for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}
