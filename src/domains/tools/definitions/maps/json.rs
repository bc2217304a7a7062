//! Lenient access into provider JSON.
//!
//! Amap responses are loosely shaped: keys go missing, and empty values are
//! often sent as `[]` instead of `""`. Shapers never index directly; they go
//! through [`Lenient`] so a missing branch degrades to a default instead of
//! failing.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Defaulting accessors over a `serde_json::Value` tree.
pub trait Lenient {
    /// Descend into `key`. Missing keys and non-objects yield `null`, which
    /// can be descended into further.
    fn at(&self, key: &str) -> &Value;

    /// Copy the value at `key` verbatim, or `""` when absent or null.
    fn leaf(&self, key: &str) -> Value;

    /// Items of the array at `key`, or an empty slice.
    fn items(&self, key: &str) -> &[Value];

    /// Like [`Lenient::items`] but as an owned JSON array.
    fn list(&self, key: &str) -> Value {
        Value::Array(self.items(key).to_vec())
    }
}

impl Lenient for Value {
    fn at(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }

    fn leaf(&self, key: &str) -> Value {
        match self.get(key) {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(value) => value.clone(),
        }
    }

    fn items(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
