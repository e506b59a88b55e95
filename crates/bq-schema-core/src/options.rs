//! Resolution of the `gen_bq_schema` message and field options.

use crate::descriptor::{DescriptorProto, FieldDescriptorProto};
use crate::error::{ConvertError, Result};
use crate::schema::{ColumnType, Mode};

/// Message-level options (`gen_bq_schema.bigquery_opts`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub table_name: String,
    /// Name columns after `json_name` instead of the declared field name.
    pub use_json_names: bool,
    /// Unparsed extra field specifications, see [`ExtraField::parse`].
    pub extra_fields: Vec<String>,
}

impl TableOptions {
    /// Only messages with a non-empty table name produce a schema file.
    pub fn is_target(&self) -> bool {
        !self.table_name.is_empty()
    }
}

/// Field-level options (`gen_bq_schema.bigquery`). Empty strings are
/// normalized to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub ignore: bool,
    pub require: bool,
    pub type_override: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub policy_tag: Option<String>,
}

/// `None` when the message carries no `bigquery_opts` extension.
pub fn table_options(message: &DescriptorProto) -> Option<TableOptions> {
    let opts = message.options.as_ref()?.bigquery_opts.as_ref()?;
    Some(TableOptions {
        table_name: opts.table_name().to_string(),
        use_json_names: opts.use_json_names(),
        extra_fields: opts.extra_fields.clone(),
    })
}

/// `None` when the field carries no `bigquery` extension.
pub fn column_options(field: &FieldDescriptorProto) -> Option<ColumnOptions> {
    let opts = field.options.as_ref()?.bigquery.as_ref()?;
    Some(ColumnOptions {
        ignore: opts.ignore(),
        require: opts.require(),
        type_override: non_empty(opts.type_override()),
        name: non_empty(opts.name()),
        description: non_empty(opts.description()),
        policy_tag: non_empty(opts.policy_tags()),
    })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// A synthetic column declared on the message rather than by a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraField {
    pub name: String,
    pub column_type: ColumnType,
    /// Message type to expand, present iff `column_type` is `RECORD`.
    pub type_name: Option<String>,
    pub mode: Mode,
}

impl ExtraField {
    /// Parses `name:TYPE[:MODE]` or `name:RECORD:message.Type[:MODE]`.
    pub fn parse(definition: &str) -> Result<Self> {
        let invalid = |reason: &str| ConvertError::ExtraField {
            definition: definition.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = definition.split(':').collect();
        if parts.len() < 2 {
            let reason = format!(
                "expected at least 2 colon-separated parts, got {}",
                parts.len()
            );
            return Err(invalid(reason.as_str()));
        }

        let column_type = ColumnType::from(parts[1]);
        let (type_name, mode_index) = if column_type == ColumnType::Record {
            match parts.get(2).filter(|t| !t.is_empty()) {
                Some(t) => (Some(t.to_string()), 3),
                None => return Err(invalid("RECORD needs a message type name")),
            }
        } else {
            (None, 2)
        };

        let mode = match parts.get(mode_index).filter(|m| !m.is_empty()) {
            Some(m) => Mode::from(*m),
            None => Mode::Nullable,
        };
        if let Mode::Other(name) = &mode {
            tracing::warn!(definition, mode = %name, "extra field has a non-standard mode, keeping it");
        }

        Ok(Self {
            name: parts[0].to_string(),
            column_type,
            type_name,
            mode,
        })
    }
}
