//! Output column model and its JSON encoding.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Result;

pub type Schema = Vec<Column>;

/// One BigQuery column. Only `RECORD` columns carry `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub mode: Mode,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Column>,
    #[serde(rename = "policyTags", skip_serializing_if = "Option::is_none")]
    pub policy_tags: Option<PolicyTags>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType, mode: Mode) -> Self {
        Self {
            name: name.into(),
            column_type,
            mode,
            description: String::new(),
            fields: Vec::new(),
            policy_tags: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_fields(mut self, fields: Vec<Column>) -> Self {
        self.fields = fields;
        self
    }

    pub fn is_record(&self) -> bool {
        self.column_type == ColumnType::Record
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyTags {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    String,
    Bytes,
    Timestamp,
    Record,
    /// A type name taken verbatim from a `type_override` or extra field.
    Other(String),
}

impl ColumnType {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::String => "STRING",
            ColumnType::Bytes => "BYTES",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Record => "RECORD",
            ColumnType::Other(name) => name,
        }
    }
}

impl From<&str> for ColumnType {
    fn from(name: &str) -> Self {
        match name {
            "INTEGER" => ColumnType::Integer,
            "FLOAT" => ColumnType::Float,
            "BOOLEAN" => ColumnType::Boolean,
            "STRING" => ColumnType::String,
            "BYTES" => ColumnType::Bytes,
            "TIMESTAMP" => ColumnType::Timestamp,
            "RECORD" => ColumnType::Record,
            other => ColumnType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Nullable,
    Required,
    Repeated,
    /// A mode name taken verbatim from an extra field.
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Nullable => "NULLABLE",
            Mode::Required => "REQUIRED",
            Mode::Repeated => "REPEATED",
            Mode::Other(name) => name,
        }
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        match name {
            "NULLABLE" => Mode::Nullable,
            "REQUIRED" => Mode::Required,
            "REPEATED" => Mode::Repeated,
            other => Mode::Other(other.to_string()),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodes a schema as an indented JSON array (one space per level).
pub fn to_json(schema: &[Column]) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    schema.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
