//! Documentation comments keyed by their position in the file's declaration
//! tree.
//!
//! `SourceCodeInfo.Location.path` numbers each element by the tag of the
//! repeated field holding it followed by its index, e.g. `4.0.2.1` is the
//! second field of the first top-level message and `4.0.3.0.2.0` the first
//! field of that message's first nested type.

use std::collections::HashMap;

use crate::descriptor::{FileDescriptorProto, Location};

/// `FileDescriptorProto.message_type`
pub const MESSAGE_PATH: i32 = 4;
/// `DescriptorProto.field`
pub const FIELD_PATH: i32 = 2;
/// `DescriptorProto.nested_type`
pub const NESTED_TYPE_PATH: i32 = 3;

/// Comment index of every file in a request, keyed by file name.
pub type FileComments = HashMap<String, CommentIndex>;

#[derive(Debug, Default, Clone)]
pub struct CommentIndex {
    comments: HashMap<String, String>,
}

impl CommentIndex {
    pub fn parse(file: &FileDescriptorProto) -> Self {
        let mut comments = HashMap::new();
        let Some(info) = &file.source_code_info else {
            return Self { comments };
        };

        for loc in &info.location {
            if !has_comment(loc) {
                continue;
            }
            comments.insert(path_key(&loc.path), build_comment(loc));
        }

        Self { comments }
    }

    /// Comment attached at `path`, or `""`.
    pub fn get(&self, path: &[i32]) -> &str {
        self.comments
            .get(&path_key(path))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

/// Parses the comments of every file, for types referenced across files.
pub fn index_files(files: &[FileDescriptorProto]) -> FileComments {
    files
        .iter()
        .map(|f| (f.name().to_string(), CommentIndex::parse(f)))
        .collect()
}

pub fn path_key(path: &[i32]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn has_comment(loc: &Location) -> bool {
    !loc.leading_comments().is_empty() || !loc.trailing_comments().is_empty()
}

fn build_comment(loc: &Location) -> String {
    let joined = format!(
        "{}\n\n{}",
        loc.leading_comments().trim(),
        loc.trailing_comments().trim()
    );
    joined.trim_matches('\n').to_string()
}
