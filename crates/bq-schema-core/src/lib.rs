//! BigQuery table schemas from protobuf descriptors.
//!
//! This crate is the engine behind `protoc-gen-bq-schema`:
//!
//! - decode the `CodeGeneratorRequest` handed over by `protoc`
//! - index every message type of every file ([`Registry`]) together with its
//!   `gen_bq_schema` options and source comments
//! - convert each message annotated with a table name into a list of
//!   [`Column`]s, expanding message-typed fields into nested records
//! - encode each schema as JSON and return it as a `.schema` output file
//!
//! The `gen_bq_schema` options are extensions (field number 1021) on
//! `MessageOptions` and `FieldOptions`. Rather than carrying a reflective
//! protobuf runtime, [`descriptor`] declares them as regular fields of a
//! trimmed-down descriptor model so `prost` decodes them directly.

pub mod comments;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod params;
pub mod plugin;
pub mod registry;
pub mod schema;
pub mod types;

pub use convert::SchemaConverter;
pub use error::{ConvertError, Result};
pub use options::{ColumnOptions, ExtraField, TableOptions};
pub use params::PluginParams;
pub use plugin::{generate, generate_from_bytes, output_name};
pub use registry::{MessageEntry, Registry};
pub use schema::{Column, ColumnType, Mode, PolicyTags, Schema};
