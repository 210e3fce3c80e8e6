//! Declarative field schema consumed by the form engine.
//!
//! DESIGN
//! ======
//! Field types are a closed enum so renderers switch exhaustively instead of
//! probing type strings. The loose JSON shape (`{title, submitText,
//! properties}`) is parsed once at the boundary by [`FormSchema::from_json`].

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde_json::{Map, Value};
use thiserror::Error;

/// Default submit button label.
pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";

/// Failures while building or parsing a schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate field key: {0}")]
    DuplicateField(String),
    #[error("field {key}: unknown type {ty:?}")]
    UnknownType { key: String, ty: String },
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// One candidate offered by a searchable selector.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Rendering strategy for a field, carrying only what that strategy needs.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Number { integer: bool },
    SearchSingle { options: Vec<SelectOption> },
    SearchMultiple { options: Vec<SelectOption> },
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number { .. })
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::SearchMultiple { .. })
    }

    /// Candidate list for searchable kinds; empty for plain inputs.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Self::SearchSingle { options } | Self::SearchMultiple { options } => options,
            Self::Text | Self::Number { .. } => &[],
        }
    }

    /// HTML `inputmode` hint: numeric kinds get a numeric keypad.
    pub fn input_mode(&self) -> &'static str {
        match self {
            Self::Number { integer: true } => "numeric",
            Self::Number { integer: false } => "decimal",
            _ => "text",
        }
    }

    /// Convert raw input text into the value stored in the draft.
    ///
    /// Numeric kinds store a JSON number once the text parses; partial input
    /// such as `"-"` stays text so typing is never blocked.
    pub fn coerce_input(&self, raw: &str) -> Value {
        match self {
            Self::Number { integer: true } => match raw.trim().parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(raw.to_owned()),
            },
            Self::Number { integer: false } => match raw.trim().parse::<f64>().map(serde_json::Number::from_f64) {
                Ok(Some(n)) => Value::Number(n),
                _ => Value::String(raw.to_owned()),
            },
            _ => Value::String(raw.to_owned()),
        }
    }
}

/// A single schema field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub key: String,
    pub title: Option<String>,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub visible: bool,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self { key: key.into(), title: None, kind, default: None, visible: true }
    }

    pub fn text(key: impl Into<String>) -> Self {
        Self::new(key, FieldKind::Text)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Label shown next to the control; falls back to the key.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }
}

/// Ordered field definitions plus form-level chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSchema {
    pub title: Option<String>,
    pub submit_text: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Append a field, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateField` when `field.key` is already present.
    pub fn field(mut self, field: FieldDescriptor) -> Result<Self, SchemaError> {
        if self.get(&field.key).is_some() {
            return Err(SchemaError::DuplicateField(field.key));
        }
        self.fields.push(field);
        Ok(self)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields that render a control, in schema order.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.visible)
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_text.as_deref().unwrap_or(DEFAULT_SUBMIT_TEXT)
    }

    /// Parse the loose JSON schema shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` for structural problems and `UnknownType` for
    /// unsupported `type` strings.
    pub fn from_json(schema: &Value) -> Result<Self, SchemaError> {
        let root = schema
            .as_object()
            .ok_or_else(|| SchemaError::InvalidSchema("schema must be an object".to_owned()))?;

        let mut out = Self::new();
        out.title = optional_str(root, "title")?;
        out.submit_text = optional_str(root, "submitText")?;

        let Some(properties) = root.get("properties") else {
            return Ok(out);
        };
        let properties = properties
            .as_object()
            .ok_or_else(|| SchemaError::InvalidSchema("properties must be an object".to_owned()))?;

        for (key, property) in properties {
            out = out.field(parse_field(key, property)?)?;
        }
        Ok(out)
    }
}

fn optional_str(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, SchemaError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SchemaError::InvalidSchema(format!("{key} must be a string, got {other}"))),
    }
}

fn parse_field(key: &str, property: &Value) -> Result<FieldDescriptor, SchemaError> {
    let property = property
        .as_object()
        .ok_or_else(|| SchemaError::InvalidSchema(format!("field {key} must be an object")))?;

    let ty = optional_str(property, "type")?.unwrap_or_else(|| "text".to_owned());
    let multiple = match optional_str(property, "values")?.as_deref() {
        None | Some("single") => false,
        Some("multiple") => true,
        Some(other) => {
            return Err(SchemaError::InvalidSchema(format!("field {key}: values must be single|multiple, got {other}")));
        }
    };

    let kind = match ty.as_str() {
        "text" => FieldKind::Text,
        "number" => FieldKind::Number { integer: false },
        "integer" => FieldKind::Number { integer: true },
        "search" => {
            let options = parse_options(key, property.get("options"))?;
            if multiple {
                FieldKind::SearchMultiple { options }
            } else {
                FieldKind::SearchSingle { options }
            }
        }
        _ => return Err(SchemaError::UnknownType { key: key.to_owned(), ty }),
    };

    let visible = match property.get("visible") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(SchemaError::InvalidSchema(format!("field {key}: visible must be a boolean, got {other}")));
        }
    };

    Ok(FieldDescriptor {
        key: key.to_owned(),
        title: optional_str(property, "title")?,
        kind,
        default: property.get("value").filter(|v| !v.is_null()).cloned(),
        visible,
    })
}

fn parse_options(key: &str, raw: Option<&Value>) -> Result<Vec<SelectOption>, SchemaError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| SchemaError::InvalidSchema(format!("field {key}: options must be an array")))?;

    items
        .iter()
        .map(|item| {
            let label = item
                .get("label")
                .and_then(Value::as_str)
                .ok_or_else(|| SchemaError::InvalidSchema(format!("field {key}: option label must be a string")))?;
            let value = item.get("value").cloned().unwrap_or(Value::Null);
            Ok(SelectOption::new(label, value))
        })
        .collect()
}
