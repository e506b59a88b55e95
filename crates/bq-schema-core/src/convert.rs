//! Recursive conversion of a message type into a column schema.
//!
//! Record fields are expanded by resolving the referenced type through the
//! [`Registry`]. Each top-level conversion owns a [`Visited`] set of the types
//! on the current descent path; a type already on the path is not expanded
//! again, which bounds recursion by the number of distinct reachable types.

use std::collections::HashSet;

use crate::comments::{FileComments, FIELD_PATH};
use crate::descriptor::FieldDescriptorProto;
use crate::error::{ConvertError, Result};
use crate::options::{self, ExtraField, TableOptions};
use crate::registry::{MessageEntry, Registry};
use crate::schema::{Column, ColumnType, Mode, PolicyTags, Schema};
use crate::types;

/// Message types currently being expanded on the active recursion path.
#[derive(Debug, Default)]
pub struct Visited {
    active: HashSet<String>,
}

impl Visited {
    /// Returns `false` if `full_name` is already on the path.
    pub fn enter(&mut self, full_name: &str) -> bool {
        self.active.insert(full_name.to_string())
    }

    pub fn leave(&mut self, full_name: &str) {
        self.active.remove(full_name);
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.active.contains(full_name)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

pub struct SchemaConverter<'r, 'a> {
    registry: &'r Registry<'a>,
    comments: &'r FileComments,
}

impl<'r, 'a> SchemaConverter<'r, 'a> {
    pub fn new(registry: &'r Registry<'a>, comments: &'r FileComments) -> Self {
        Self { registry, comments }
    }

    /// Converts a top-level message. `options` are passed explicitly because
    /// the caller may have synthesized them (single-message mode).
    pub fn convert(&self, message: &MessageEntry<'a>, options: &TableOptions) -> Result<Schema> {
        let mut visited = Visited::default();
        visited.enter(&message.full_name);
        let schema = self.convert_message(message, options, &mut visited);
        visited.leave(&message.full_name);
        schema
    }

    fn convert_message(
        &self,
        message: &MessageEntry<'a>,
        options: &TableOptions,
        visited: &mut Visited,
    ) -> Result<Schema> {
        let comments = self.comments.get(&message.file);
        let mut schema = Vec::with_capacity(message.descriptor.field.len());

        for (idx, field) in message.descriptor.field.iter().enumerate() {
            let mut path = message.path.clone();
            path.extend([FIELD_PATH, idx as i32]);
            let description = comments.map(|c| c.get(&path)).unwrap_or("");

            if let Some(column) =
                self.convert_field(message, options, field, description, visited)?
            {
                schema.push(column);
            }
        }

        for definition in &options.extra_fields {
            if let Some(column) = self.convert_extra_field(message, definition, visited)? {
                schema.push(column);
            }
        }

        Ok(schema)
    }

    fn convert_field(
        &self,
        message: &MessageEntry<'a>,
        options: &TableOptions,
        field: &FieldDescriptorProto,
        description: &str,
        visited: &mut Visited,
    ) -> Result<Option<Column>> {
        let name = if options.use_json_names && !field.json_name().is_empty() {
            field.json_name()
        } else {
            field.name()
        };
        let column_type = types::field_column_type(field)?;
        let mode = types::field_mode(field)?;
        let mut column = Column::new(name, column_type, mode).with_description(description);

        if let Some(opts) = options::column_options(field) {
            if opts.ignore {
                return Ok(None);
            }
            if opts.require {
                column.mode = Mode::Required;
            }
            if let Some(type_override) = opts.type_override {
                column.column_type = ColumnType::from(type_override.as_str());
            }
            if let Some(name) = opts.name {
                column.name = name;
            }
            if let Some(description) = opts.description {
                column.description = description;
            }
            if let Some(tag) = opts.policy_tag {
                column.policy_tags = Some(PolicyTags { names: vec![tag] });
            }
        }

        if !column.is_record() {
            return Ok(Some(column));
        }
        if field.type_name().is_empty() {
            return Err(ConvertError::MissingTypeName {
                field: format!("{}.{}", message.full_name, field.name()),
            });
        }
        self.expand_record(message, column, field.type_name(), visited)
    }

    fn convert_extra_field(
        &self,
        message: &MessageEntry<'a>,
        definition: &str,
        visited: &mut Visited,
    ) -> Result<Option<Column>> {
        let extra = ExtraField::parse(definition)?;
        let column = Column::new(extra.name, extra.column_type, extra.mode);
        match extra.type_name {
            Some(type_name) => self.expand_record(message, column, &type_name, visited),
            None => Ok(Some(column)),
        }
    }

    /// Fills in the children of a record column referencing `type_name`.
    /// `None` means the column is dropped: its type is on the current path
    /// or it has no columns left.
    fn expand_record(
        &self,
        owner: &MessageEntry<'a>,
        mut column: Column,
        type_name: &str,
        visited: &mut Visited,
    ) -> Result<Option<Column>> {
        if let Some(scalar) = types::well_known(type_name) {
            column.column_type = scalar;
            return Ok(Some(column));
        }

        let nested = self
            .registry
            .resolve(&owner.full_name, &owner.package, type_name)?;
        if !visited.enter(&nested.full_name) {
            tracing::debug!(
                column = %column.name,
                message = %nested.full_name,
                "recursive message type, not expanding"
            );
            return Ok(None);
        }

        let defaults = TableOptions::default();
        let nested_options = nested.options.as_ref().unwrap_or(&defaults);
        let fields = self.convert_message(nested, nested_options, visited);
        visited.leave(&nested.full_name);

        let fields = fields?;
        if fields.is_empty() {
            tracing::debug!(column = %column.name, "record has no columns, dropping");
            return Ok(None);
        }
        column.fields = fields;
        Ok(Some(column))
    }
}
