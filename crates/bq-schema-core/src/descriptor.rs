//! Descriptor subset decoded from a `CodeGeneratorRequest`.
//!
//! Only the parts of `plugin.proto` / `descriptor.proto` the converter reads
//! are declared here. `prost_types` would drop the `gen_bq_schema` options
//! as unknown extension fields, so the option messages below declare them as
//! ordinary fields at their extension number instead:
//!
//! ```text
//! extend google.protobuf.MessageOptions { BigQueryMessageOptions bigquery_opts = 1021; }
//! extend google.protobuf.FieldOptions   { BigQueryFieldOptions   bigquery      = 1021; }
//! ```
//!
//! Field tags follow `descriptor.proto`; anything not declared is skipped by
//! the decoder.

/// Extension number of both `bigquery_opts` and `bigquery`.
pub const BIGQUERY_EXTENSION: u32 = 1021;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// Every file in `file_to_generate` plus everything it imports, in
    /// topological order.
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, optional, tag = "9")]
    pub source_code_info: Option<SourceCodeInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub field: Vec<FieldDescriptorProto>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorProto>,
    #[prost(message, optional, tag = "7")]
    pub options: Option<MessageOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(int32, optional, tag = "3")]
    pub number: Option<i32>,
    #[prost(enumeration = "FieldLabel", optional, tag = "4")]
    pub label: Option<i32>,
    #[prost(enumeration = "FieldType", optional, tag = "5")]
    pub r#type: Option<i32>,
    /// Referenced message or enum; fully qualified when it starts with `.`.
    #[prost(string, optional, tag = "6")]
    pub type_name: Option<String>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FieldOptions>,
    #[prost(string, optional, tag = "10")]
    pub json_name: Option<String>,
    #[prost(bool, optional, tag = "17")]
    pub proto3_optional: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FieldType {
    Double = 1,
    Float = 2,
    Int64 = 3,
    Uint64 = 4,
    Int32 = 5,
    Fixed64 = 6,
    Fixed32 = 7,
    Bool = 8,
    String = 9,
    Group = 10,
    Message = 11,
    Bytes = 12,
    Uint32 = 13,
    Enum = 14,
    Sfixed32 = 15,
    Sfixed64 = 16,
    Sint32 = 17,
    Sint64 = 18,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FieldLabel {
    Optional = 1,
    Required = 2,
    Repeated = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageOptions {
    #[prost(message, optional, tag = "1021")]
    pub bigquery_opts: Option<BigQueryMessageOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldOptions {
    #[prost(message, optional, tag = "1021")]
    pub bigquery: Option<BigQueryFieldOptions>,
}

/// `gen_bq_schema.BigQueryMessageOptions`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BigQueryMessageOptions {
    /// Non-empty marks the message as a table.
    #[prost(string, optional, tag = "1")]
    pub table_name: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub use_json_names: Option<bool>,
    /// `"<name>:<TYPE>[:<message type if RECORD>][:<MODE>]"`
    #[prost(string, repeated, tag = "3")]
    pub extra_fields: Vec<String>,
    #[prost(string, optional, tag = "4")]
    pub output_field_order: Option<String>,
}

/// `gen_bq_schema.BigQueryFieldOptions`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BigQueryFieldOptions {
    #[prost(bool, optional, tag = "1")]
    pub require: Option<bool>,
    #[prost(string, optional, tag = "2")]
    pub type_override: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub ignore: Option<bool>,
    #[prost(string, optional, tag = "4")]
    pub description: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub policy_tags: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceCodeInfo {
    #[prost(message, repeated, tag = "1")]
    pub location: Vec<Location>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(int32, repeated, tag = "1")]
    pub path: Vec<i32>,
    #[prost(int32, repeated, tag = "2")]
    pub span: Vec<i32>,
    #[prost(string, optional, tag = "3")]
    pub leading_comments: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub trailing_comments: Option<String>,
    #[prost(string, repeated, tag = "6")]
    pub leading_detached_comments: Vec<String>,
}
