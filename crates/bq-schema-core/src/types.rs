//! Static mappings from protobuf field kinds and labels to columns.

use crate::descriptor::{FieldDescriptorProto, FieldLabel, FieldType};
use crate::error::{ConvertError, Result};
use crate::schema::{ColumnType, Mode};

pub fn column_type(field_type: FieldType) -> ColumnType {
    match field_type {
        FieldType::Double | FieldType::Float => ColumnType::Float,

        FieldType::Int64
        | FieldType::Uint64
        | FieldType::Int32
        | FieldType::Uint32
        | FieldType::Fixed64
        | FieldType::Fixed32
        | FieldType::Sfixed32
        | FieldType::Sfixed64
        | FieldType::Sint32
        | FieldType::Sint64 => ColumnType::Integer,

        FieldType::String | FieldType::Enum => ColumnType::String,
        FieldType::Bytes => ColumnType::Bytes,
        FieldType::Bool => ColumnType::Boolean,

        FieldType::Group | FieldType::Message => ColumnType::Record,
    }
}

pub fn mode(label: FieldLabel) -> Mode {
    match label {
        FieldLabel::Optional => Mode::Nullable,
        FieldLabel::Required => Mode::Required,
        FieldLabel::Repeated => Mode::Repeated,
    }
}

/// Column type of `field`'s declared kind.
pub fn field_column_type(field: &FieldDescriptorProto) -> Result<ColumnType> {
    let value = field.r#type.unwrap_or_default();
    FieldType::try_from(value)
        .map(column_type)
        .map_err(|_| ConvertError::UnknownFieldType {
            field: field.name().to_string(),
            value,
        })
}

/// Mode of `field`'s declared cardinality.
pub fn field_mode(field: &FieldDescriptorProto) -> Result<Mode> {
    let value = field.label.unwrap_or_default();
    FieldLabel::try_from(value)
        .map(mode)
        .map_err(|_| ConvertError::UnknownFieldLabel {
            field: field.name().to_string(),
            value,
        })
}

/// Well-known wrapper messages that map onto a scalar column instead of a
/// record. Accepts names with or without the leading dot.
pub fn well_known(type_name: &str) -> Option<ColumnType> {
    let name = type_name.strip_prefix('.').unwrap_or(type_name);
    let column_type = match name {
        "google.protobuf.Int32Value"
        | "google.protobuf.Int64Value"
        | "google.protobuf.UInt32Value"
        | "google.protobuf.UInt64Value" => ColumnType::Integer,
        "google.protobuf.DoubleValue" | "google.protobuf.FloatValue" => ColumnType::Float,
        "google.protobuf.BoolValue" => ColumnType::Boolean,
        "google.protobuf.StringValue" => ColumnType::String,
        "google.protobuf.BytesValue" => ColumnType::Bytes,
        "google.protobuf.Duration" => ColumnType::String,
        "google.protobuf.Timestamp" => ColumnType::Timestamp,
        _ => return None,
    };
    Some(column_type)
}
