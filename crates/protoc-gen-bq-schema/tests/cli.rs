//! Runs the plugin binary the way `protoc` does.

use std::io::Write;
use std::process::{Command, Stdio};

use bq_schema_core::descriptor::{
    BigQueryMessageOptions, CodeGeneratorRequest, DescriptorProto, FieldDescriptorProto,
    FieldLabel, FieldType, FileDescriptorProto, MessageOptions,
};
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;

const BIN: &str = env!("CARGO_BIN_EXE_protoc-gen-bq-schema");

fn request() -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["foo.proto".to_string()],
        parameter: None,
        proto_file: vec![FileDescriptorProto {
            name: Some("foo.proto".to_string()),
            package: Some("example_package".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("FooProto".to_string()),
                field: vec![FieldDescriptorProto {
                    name: Some("i1".to_string()),
                    number: Some(1),
                    r#type: Some(FieldType::Int32 as i32),
                    label: Some(FieldLabel::Optional as i32),
                    ..Default::default()
                }],
                options: Some(MessageOptions {
                    bigquery_opts: Some(BigQueryMessageOptions {
                        table_name: Some("foo_table".to_string()),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}

fn pipe(input: &[u8]) -> CodeGeneratorResponse {
    let mut child = Command::new(BIN)
        .env_remove("BQ_SCHEMA_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn plugin");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write request");
    let output = child.wait_with_output().expect("plugin exits");
    assert!(output.status.success());
    CodeGeneratorResponse::decode(output.stdout.as_slice()).expect("decode response")
}

#[test]
fn stdin_to_stdout() {
    let response = pipe(&request().encode_to_vec());
    assert_eq!(response.error, None);
    assert_eq!(response.file.len(), 1);
    assert_eq!(
        response.file[0].name.as_deref(),
        Some("example_package/foo_table.schema")
    );
}

#[test]
fn decode_failure_is_returned_in_response() {
    let response = pipe(b"\x0a\x10truncated");
    assert!(response.file.is_empty());
    assert!(response
        .error
        .unwrap_or_default()
        .starts_with("Failed to read input: "));
}

#[test]
fn replays_request_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let request_path = dir.path().join("request.bin");
    let response_path = dir.path().join("response.bin");
    std::fs::write(&request_path, request().encode_to_vec()).expect("write request");

    let status = Command::new(BIN)
        .arg("--request")
        .arg(&request_path)
        .arg("--response")
        .arg(&response_path)
        .args(["--log", "debug"])
        .stderr(Stdio::null())
        .status()
        .expect("run plugin");
    assert!(status.success());

    let bytes = std::fs::read(&response_path).expect("read response");
    let response = CodeGeneratorResponse::decode(bytes.as_slice()).expect("decode response");
    assert_eq!(response.error, None);
    let content = response.file[0].content.as_deref().unwrap_or_default();
    assert!(content.contains("\"name\": \"i1\""), "{content}");
}

#[test]
fn missing_request_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let status = Command::new(BIN)
        .arg("--request")
        .arg(dir.path().join("absent.bin"))
        .stderr(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .expect("run plugin");
    assert!(!status.success());
}
