use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Failures that abort schema generation for the whole request.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no message type `{type_name}` reachable from `{scope}`")]
    UnresolvedType { scope: String, type_name: String },

    #[error("message type `{type_name}` referenced from `{scope}` is ambiguous: {candidates:?}")]
    AmbiguousType {
        scope: String,
        type_name: String,
        candidates: Vec<String>,
    },

    #[error("unrecognized field type {value} on `{field}`")]
    UnknownFieldType { field: String, value: i32 },

    #[error("unrecognized field label {value} on `{field}`")]
    UnknownFieldLabel { field: String, value: i32 },

    #[error("record field `{field}` has no type name")]
    MissingTypeName { field: String },

    #[error("invalid extra field `{definition}`: {reason}")]
    ExtraField { definition: String, reason: String },

    #[error("failed to encode schema: {0}")]
    Encode(#[from] serde_json::Error),
}
