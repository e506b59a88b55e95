//! Turns a `CodeGeneratorRequest` into a `CodeGeneratorResponse`.
//!
//! Every requested file contributes one `.schema` output per table message.
//! Generation stops at the first failure; the failure is reported through
//! the response's `error` field and outputs produced before it are kept.

use std::collections::HashSet;

use prost::Message;
use prost_types::compiler::code_generator_response::File as OutputFile;
use prost_types::compiler::CodeGeneratorResponse;

use crate::comments;
use crate::convert::SchemaConverter;
use crate::descriptor::{CodeGeneratorRequest, FileDescriptorProto};
use crate::error::Result;
use crate::options::TableOptions;
use crate::params::PluginParams;
use crate::registry::{MessageEntry, Registry};
use crate::schema;

/// `CodeGeneratorResponse.Feature.FEATURE_PROTO3_OPTIONAL`
pub const FEATURE_PROTO3_OPTIONAL: u64 = 1;

/// Decodes `bytes` as a request and generates its response.
pub fn generate_from_bytes(bytes: &[u8]) -> CodeGeneratorResponse {
    match CodeGeneratorRequest::decode(bytes) {
        Ok(request) => generate(request),
        Err(err) => {
            tracing::error!(%err, "cannot decode code generator request");
            CodeGeneratorResponse {
                error: Some(format!("Failed to read input: {err}")),
                supported_features: Some(FEATURE_PROTO3_OPTIONAL),
                ..Default::default()
            }
        }
    }
}

pub fn generate(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    let params = PluginParams::parse(request.parameter.as_deref());

    let registry = Registry::build_with_packages(&request.proto_file, |file| {
        params.package_for(file.name(), file.package()).to_string()
    });
    let comments = comments::index_files(&request.proto_file);
    let converter = SchemaConverter::new(&registry, &comments);
    let requested: HashSet<&str> = request
        .file_to_generate
        .iter()
        .map(String::as_str)
        .collect();

    let mut response = CodeGeneratorResponse {
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        ..Default::default()
    };

    for file in &request.proto_file {
        if !requested.contains(file.name()) {
            continue;
        }
        if let Err(err) = generate_file(&converter, &registry, file, &params, &mut response.file) {
            tracing::error!(file = file.name(), %err, "schema generation failed");
            response.error = Some(format!("Failed to convert {}: {err}", file.name()));
            break;
        }
    }

    response
}

fn generate_file<'a>(
    converter: &SchemaConverter<'_, 'a>,
    registry: &Registry<'a>,
    file: &FileDescriptorProto,
    params: &PluginParams,
    out: &mut Vec<OutputFile>,
) -> Result<()> {
    for (entry, options) in select_tables(registry, file, params) {
        let columns = converter.convert(entry, &options)?;
        let content = schema::to_json(&columns)?;
        let package = params.package_for(file.name(), file.package());
        let name = output_name(package, &options.table_name);
        tracing::info!(message = %entry.full_name, output = %name, columns = columns.len(), "generated schema");
        out.push(OutputFile {
            name: Some(name),
            content: Some(content),
            ..Default::default()
        });
    }
    Ok(())
}

/// Top-level messages of `file` that become tables, with the options to
/// convert them with.
pub fn select_tables<'r, 'a>(
    registry: &'r Registry<'a>,
    file: &FileDescriptorProto,
    params: &PluginParams,
) -> Vec<(&'r MessageEntry<'a>, TableOptions)> {
    let top_level = registry.top_level(file.name());

    if params.single_message {
        let Some(first) = top_level.first() else {
            tracing::warn!(file = file.name(), "no messages for single-message mode");
            return Vec::new();
        };
        // The file name replaces whatever options the message declares.
        let options = TableOptions {
            table_name: file_stem(file.name()).to_string(),
            ..Default::default()
        };
        return vec![(*first, options)];
    }

    top_level
        .into_iter()
        .filter_map(|entry| match &entry.options {
            Some(options) if options.is_target() => Some((entry, options.clone())),
            _ => {
                tracing::debug!(message = %entry.full_name, "no table name, skipping");
                None
            }
        })
        .collect()
}

/// `<package with / for .>/<table>.schema`, or `<table>.schema` without a
/// package.
pub fn output_name(package: &str, table_name: &str) -> String {
    if package.is_empty() {
        format!("{table_name}.schema")
    } else {
        format!("{}/{table_name}.schema", package.replace('.', "/"))
    }
}

/// Base name of a proto file without directory or extension.
fn file_stem(file_name: &str) -> &str {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    base.rsplit_once('.').map_or(base, |(stem, _)| stem)
}
