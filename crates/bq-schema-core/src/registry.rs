//! Cross-file index of every message type in a request.
//!
//! Each entry records where the type was declared (package, file and
//! `SourceCodeInfo` path) and its resolved table options, so the converter
//! never has to walk the descriptor tree again.

use std::collections::HashMap;

use crate::comments::{MESSAGE_PATH, NESTED_TYPE_PATH};
use crate::descriptor::{DescriptorProto, FileDescriptorProto};
use crate::error::{ConvertError, Result};
use crate::options::{self, TableOptions};

#[derive(Debug, Clone)]
pub struct MessageEntry<'a> {
    pub descriptor: &'a DescriptorProto,
    /// Dotted name without the leading `.`, e.g. `pkg.Outer.Inner`.
    pub full_name: String,
    pub package: String,
    /// Name of the declaring file.
    pub file: String,
    /// Structural path of the declaration inside `file`.
    pub path: Vec<i32>,
    pub options: Option<TableOptions>,
}

impl MessageEntry<'_> {
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }
}

#[derive(Debug, Default)]
pub struct Registry<'a> {
    messages: HashMap<String, MessageEntry<'a>>,
    /// Final name component → full names, in registration order.
    short_names: HashMap<String, Vec<String>>,
    /// File name → full names of its top-level messages, in declaration order.
    top_level: HashMap<String, Vec<String>>,
    /// Name as declared → registered full name, for files whose package was
    /// assigned from outside.
    aliases: HashMap<String, String>,
}

impl<'a> Registry<'a> {
    pub fn build(files: &'a [FileDescriptorProto]) -> Self {
        Self::build_with_packages(files, |file| file.package().to_string())
    }

    /// Like [`Registry::build`], but registers each file's messages under
    /// `package_of(file)`. Where that differs from the declared package the
    /// declared names stay resolvable as aliases, since `protoc` writes type
    /// references against the declared package.
    pub fn build_with_packages<F>(files: &'a [FileDescriptorProto], package_of: F) -> Self
    where
        F: Fn(&FileDescriptorProto) -> String,
    {
        let mut registry = Registry::default();

        for file in files {
            let package = package_of(file);
            if package != file.package() {
                tracing::debug!(file = file.name(), %package, "assuming package for file");
            }

            let mut top_level = Vec::with_capacity(file.message_type.len());
            for (idx, message) in file.message_type.iter().enumerate() {
                let names = Names {
                    full: qualify_type_name(&package, message.name()),
                    declared: qualify_type_name(file.package(), message.name()),
                };
                top_level.push(names.full.clone());
                registry.index_message(
                    file,
                    &package,
                    message,
                    names,
                    vec![MESSAGE_PATH, idx as i32],
                );
            }
            registry
                .top_level
                .insert(file.name().to_string(), top_level);
        }

        tracing::debug!(
            files = files.len(),
            messages = registry.messages.len(),
            aliases = registry.aliases.len(),
            "built type registry"
        );
        registry
    }

    fn index_message(
        &mut self,
        file: &'a FileDescriptorProto,
        package: &str,
        message: &'a DescriptorProto,
        names: Names,
        path: Vec<i32>,
    ) {
        let Names { full, declared } = names;
        if self.messages.contains_key(&full) {
            tracing::warn!(full_name = %full, file = file.name(), "duplicate message type, keeping first");
            return;
        }

        self.short_names
            .entry(message.name().to_string())
            .or_default()
            .push(full.clone());
        self.messages.insert(
            full.clone(),
            MessageEntry {
                descriptor: message,
                full_name: full.clone(),
                package: package.to_string(),
                file: file.name().to_string(),
                path: path.clone(),
                options: options::table_options(message),
            },
        );

        for (idx, nested) in message.nested_type.iter().enumerate() {
            let mut nested_path = path.clone();
            nested_path.extend([NESTED_TYPE_PATH, idx as i32]);
            let nested_names = Names {
                full: format!("{full}.{}", nested.name()),
                declared: format!("{declared}.{}", nested.name()),
            };
            self.index_message(file, package, nested, nested_names, nested_path);
        }

        if declared != full {
            self.aliases.insert(declared, full);
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Exact lookup by full name; a leading `.` is accepted.
    pub fn get(&self, full_name: &str) -> Option<&MessageEntry<'a>> {
        self.messages
            .get(full_name.strip_prefix('.').unwrap_or(full_name))
    }

    /// Top-level messages of `file_name` in declaration order.
    pub fn top_level(&self, file_name: &str) -> Vec<&MessageEntry<'a>> {
        self.top_level
            .get(file_name)
            .into_iter()
            .flatten()
            .filter_map(|name| self.messages.get(name))
            .collect()
    }

    /// Looks `type_name` up by its final component among the types of
    /// `package`. Fails if the package declares several types with that
    /// short name.
    ///
    /// This is the by-name lookup older generators relied on; it ignores
    /// nesting. Schema conversion goes through [`Registry::resolve`], which
    /// honours scoping.
    pub fn lookup(&self, package: &str, type_name: &str) -> Result<&MessageEntry<'a>> {
        let short = type_name.rsplit('.').next().unwrap_or(type_name);
        let candidates: Vec<&MessageEntry<'a>> = self
            .short_names
            .get(short)
            .into_iter()
            .flatten()
            .filter_map(|name| self.messages.get(name))
            .filter(|entry| entry.package == package)
            .collect();

        match candidates.as_slice() {
            [entry] => Ok(*entry),
            [] => Err(ConvertError::UnresolvedType {
                scope: package.to_string(),
                type_name: type_name.to_string(),
            }),
            many => Err(ConvertError::AmbiguousType {
                scope: package.to_string(),
                type_name: type_name.to_string(),
                candidates: many.iter().map(|e| e.full_name.clone()).collect(),
            }),
        }
    }

    /// Resolves a type reference made from inside `scope` (the full name of
    /// the referencing message) following protobuf scoping: fully qualified
    /// names match exactly, relative names are tried from the innermost
    /// enclosing scope outwards. Unqualified leftovers fall back to a unique
    /// suffix match, preferring `package`.
    pub fn resolve(
        &self,
        scope: &str,
        package: &str,
        type_name: &str,
    ) -> Result<&MessageEntry<'a>> {
        let unresolved = || ConvertError::UnresolvedType {
            scope: scope.to_string(),
            type_name: type_name.to_string(),
        };

        if let Some(full_name) = type_name.strip_prefix('.') {
            return self
                .messages
                .get(full_name)
                .or_else(|| {
                    self.aliases
                        .get(full_name)
                        .and_then(|target| self.messages.get(target))
                })
                .ok_or_else(unresolved);
        }

        let mut current = scope;
        loop {
            if let Some(entry) = self.messages.get(&qualify_type_name(current, type_name)) {
                return Ok(entry);
            }
            if current.is_empty() {
                break;
            }
            current = current.rfind('.').map_or("", |idx| &current[..idx]);
        }

        self.resolve_by_suffix(scope, package, type_name)
            .and_then(|found| found.ok_or_else(unresolved))
    }

    fn resolve_by_suffix(
        &self,
        scope: &str,
        package: &str,
        type_name: &str,
    ) -> Result<Option<&MessageEntry<'a>>> {
        let short = type_name.rsplit('.').next().unwrap_or(type_name);
        let suffix = format!(".{type_name}");
        let candidates: Vec<&MessageEntry<'a>> = self
            .short_names
            .get(short)
            .into_iter()
            .flatten()
            .filter(|name| name.as_str() == type_name || name.ends_with(&suffix))
            .filter_map(|name| self.messages.get(name))
            .collect();

        if let [entry] = candidates.as_slice() {
            return Ok(Some(*entry));
        }
        if candidates.is_empty() {
            return Ok(None);
        }

        let local: Vec<&MessageEntry<'a>> = candidates
            .iter()
            .copied()
            .filter(|entry| entry.package == package)
            .collect();
        match local.as_slice() {
            [entry] => Ok(Some(*entry)),
            _ => Err(ConvertError::AmbiguousType {
                scope: scope.to_string(),
                type_name: type_name.to_string(),
                candidates: candidates.iter().map(|e| e.full_name.clone()).collect(),
            }),
        }
    }
}

/// Registered and declared full name of one message.
struct Names {
    full: String,
    declared: String,
}

pub fn qualify_type_name(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
