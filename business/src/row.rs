//! Flat, display-ready records consumed by the generic table.
//!
//! A [`Row`] keeps its fields in insertion order and is looked up by the
//! lower-cased label of a [`Column`].

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use ustr::Ustr;

/// Placeholder shown for fields a row does not carry.
pub const MISSING_TEXT: &str = "N/A";

/// A table column: display label plus the row key it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    label: Cow<'static, str>,
    key: String,
}

impl Column {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        let label = label.into();
        let key = label.to_lowercase();
        Self { label, key }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lower-cased label, used as the lookup key into a [`Row`].
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Builds columns from static labels, preserving order.
pub fn columns(labels: &[&'static str]) -> Vec<Column> {
    labels.iter().copied().map(Column::new).collect()
}

/// Stable identity of a row within a displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(Ustr);

impl RowKey {
    pub fn new(key: &str) -> Self {
        Self(Ustr::from(key))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value as received from the API or derived by a projection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Missing,
}

impl CellValue {
    /// Numeric view of the value; numeric strings are accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Truthiness used by boolean columns such as `Approval`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Missing => false,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl CellValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Bool(b) => Value::Bool(*b),
            Self::Missing => Value::Null,
        }
    }

    /// Reads form input as the same kind of value as `self`.
    ///
    /// Blank input is `Missing`; input that does not parse as the original
    /// kind is kept as text.
    pub fn parse_like(&self, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match self {
            Self::Number(_) => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map_or_else(|| Self::Text(raw.to_owned()), Self::Number),
            Self::Bool(_) => trimmed
                .parse::<bool>()
                .map_or_else(|_| Self::Text(raw.to_owned()), Self::Bool),
            Self::Text(_) | Self::Missing => Self::Text(raw.to_owned()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Missing => f.write_str(MISSING_TEXT),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// One list entity flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    key: RowKey,
    fields: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            fields: Vec::new(),
        }
    }

    /// Appends (or replaces) a field. Field names are stored lower-cased.
    pub fn with(mut self, field: &str, value: impl Into<CellValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<CellValue>) {
        let field = field.to_lowercase();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn value(&self, column: &Column) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.get(column.key()).unwrap_or(&MISSING)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
