//! Template records.
//!
//! [`Template`] is the one capability the projection engine needs from a
//! record: its type name and its fields, in declaration order, each paired
//! with a resolved descriptor. Concrete types implement it by hand (see
//! [`crate::templates`]); [`Record`] implements it for any registered schema.

use std::fmt;

use serde_json::Value;

use crate::descriptor::AttributeDescriptor;
use crate::error::{Result, TemplarError};
use crate::schema::TemplateSchema;

/// A field as seen by the projection engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: Value,
    pub descriptor: AttributeDescriptor,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: impl Into<Value>, descriptor: AttributeDescriptor) -> Self {
        Self {
            name,
            value: value.into(),
            descriptor,
        }
    }
}

/// A flat record whose fields carry visibility metadata.
pub trait Template {
    /// Type name, used as the top-level key of a projection.
    fn type_name(&self) -> &str;

    /// Fields in declaration order, each with its resolved descriptor.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Build the field list of a schema-backed template from its values.
///
/// `values` must be in declaration order and match the schema's field count.
pub(crate) fn schema_fields<'a>(
    schema: &'static TemplateSchema,
    values: impl IntoIterator<Item = Value>,
) -> Vec<Field<'a>> {
    schema
        .fields
        .iter()
        .zip(values)
        .map(|(spec, value)| Field::new(spec.name, value, schema.resolve_descriptor(spec)))
        .collect()
}

/// A template instance backed by a registered [`TemplateSchema`].
///
/// Values are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static TemplateSchema,
    values: Vec<Value>,
}

impl Record {
    pub fn builder(schema: &'static TemplateSchema) -> RecordBuilder {
        RecordBuilder::new(schema)
    }

    pub fn schema(&self) -> &'static TemplateSchema {
        self.schema
    }

    /// Value of a declared field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.position(name).map(|idx| &self.values[idx])
    }
}

impl Template for Record {
    fn type_name(&self) -> &str {
        self.schema.name
    }

    fn fields(&self) -> Vec<Field<'_>> {
        schema_fields(self.schema, self.values.iter().cloned())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_template(f, self)
    }
}

/// Render `name(field=value, ...)` in declaration order, hiding nothing.
pub(crate) fn write_template(f: &mut fmt::Formatter<'_>, template: &dyn Template) -> fmt::Result {
    write!(f, "{}(", template.type_name())?;
    for (idx, field) in template.fields().iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", field.name, field.value)?;
    }
    f.write_str(")")
}

/// Collects field values for a [`Record`].
///
/// Nothing is validated until [`RecordBuilder::build`], which either returns a
/// complete record or an error.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema: &'static TemplateSchema,
    supplied: Vec<(String, Value)>,
}

impl RecordBuilder {
    pub fn new(schema: &'static TemplateSchema) -> Self {
        Self {
            schema,
            supplied: Vec::new(),
        }
    }

    /// Supply a value. Setting the same field twice keeps the last value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.supplied.push((name.into(), value.into()));
        self
    }

    /// Supply a value only when one is given.
    pub fn set_opt(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub fn build(self) -> Result<Record> {
        let schema = self.schema;
        let mut slots: Vec<Option<Value>> = vec![None; schema.fields.len()];

        for (name, value) in self.supplied {
            let idx = schema
                .position(&name)
                .ok_or_else(|| TemplarError::unknown_field(schema.name, &name))?;
            slots[idx] = Some(value);
        }

        let values = schema
            .fields
            .iter()
            .zip(slots)
            .map(|(spec, slot)| {
                slot.or_else(|| spec.default.map(|lit| lit.to_value()))
                    .ok_or_else(|| TemplarError::missing_field(schema.name, spec.name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Record { schema, values })
    }
}
