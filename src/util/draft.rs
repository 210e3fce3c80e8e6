//! Transient draft state for one mounted form.
//!
//! The draft only ever holds what the user touched. Displayed values and the
//! submitted payload fall back to schema defaults, so an untouched form still
//! submits its defaults (including those of hidden fields).

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde_json::{Map, Value};

use crate::net::types::Record;
use crate::util::record_view::display_value;
use crate::util::schema::{FieldDescriptor, FormSchema};

/// Field key → value entered so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    values: Map<String, Value>,
}

impl Draft {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace the value for `key`.
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_owned(), value);
    }

    /// Append `value` to the array held for `key`.
    ///
    /// The first append starts from `seed` (the field's default): an array
    /// is copied, a scalar becomes the first element, and `null` or no seed
    /// starts empty. A scalar already in the draft is promoted the same way.
    pub fn append(&mut self, key: &str, value: Value, seed: Option<&Value>) {
        let entry = self
            .values
            .entry(key.to_owned())
            .or_insert_with(|| match seed {
                Some(Value::Array(items)) => Value::Array(items.clone()),
                Some(Value::Null) | None => Value::Array(Vec::new()),
                Some(scalar) => Value::Array(vec![scalar.clone()]),
            });
        match entry {
            Value::Array(items) => items.push(value),
            other => {
                let previous = std::mem::take(other);
                *other = Value::Array(vec![previous, value]);
            }
        }
    }

    /// Record a change reported by a field control.
    ///
    /// Multi-value fields accumulate; every other kind replaces.
    pub fn apply(&mut self, field: &FieldDescriptor, value: Value) {
        if field.kind.is_multiple() {
            self.append(&field.key, value, field.default.as_ref());
        } else {
            self.set(&field.key, value);
        }
    }

    /// Value a control should display: draft, then default, then `""`.
    pub fn display_value(&self, field: &FieldDescriptor) -> Value {
        self.values
            .get(&field.key)
            .or(field.default.as_ref())
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    }

    /// Text form of [`Draft::display_value`] for plain inputs.
    pub fn display_text(&self, field: &FieldDescriptor) -> String {
        display_value(&self.display_value(field))
    }

    /// Payload for submit: every default in schema order, overlaid with
    /// draft values for visible fields.
    pub fn submission(&self, schema: &FormSchema) -> Record {
        let mut out = Record::new();
        for field in schema.fields() {
            let drafted = if field.visible { self.values.get(&field.key) } else { None };
            if let Some(value) = drafted.or(field.default.as_ref()) {
                out.insert(field.key.clone(), value.clone());
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Build the submit payload and reset the draft.
    pub fn take_submission(&mut self, schema: &FormSchema) -> Record {
        let payload = self.submission(schema);
        self.clear();
        payload
    }
}
