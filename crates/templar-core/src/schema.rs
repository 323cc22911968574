//! Template schemas and registry.
//!
//! A [`TemplateSchema`] is the type-level metadata of a template: its name,
//! its record-level default descriptor, and its declared fields in order.
//! Schemas are static data, shared by every instance of the template.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::descriptor::AttributeDescriptor;

/// A default field value that can live in a `const` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl Literal {
    pub fn to_value(&self) -> Value {
        match *self {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::from(n),
            Literal::Float(f) => Value::from(f),
            Literal::Str(s) => Value::from(s),
        }
    }
}

/// Declaration of a single template field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// The field name used as the key in projections
    pub name: &'static str,

    /// Explicit visibility; `None` means the template's default applies
    pub descriptor: Option<AttributeDescriptor>,

    /// Value used when the caller supplies none; `None` means required
    pub default: Option<Literal>,
}

impl FieldSpec {
    /// Declare a required field with no visibility override.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            descriptor: None,
            default: None,
        }
    }

    /// Override the template's default descriptor for this field.
    pub const fn visibility(mut self, descriptor: AttributeDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Make the field optional with the given default.
    pub const fn default_value(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Type-level description of a template.
#[derive(Debug)]
pub struct TemplateSchema {
    /// Template type name, used as the top-level key in projections
    pub name: &'static str,

    /// Descriptor for fields that don't declare their own
    pub defaults: AttributeDescriptor,

    /// Declared fields, in declaration order
    pub fields: &'static [FieldSpec],
}

impl TemplateSchema {
    pub const fn new(
        name: &'static str,
        defaults: AttributeDescriptor,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            name,
            defaults,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Declaration index of a field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// The descriptor a field resolves to: its own, else the template default.
    pub fn resolve_descriptor(&self, field: &FieldSpec) -> AttributeDescriptor {
        field.descriptor.unwrap_or(self.defaults)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}

// Schemas are registry singletons; identity is the address.
impl PartialEq for TemplateSchema {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Compute template: machine shape and credentials.
pub static COMPUTE: TemplateSchema = TemplateSchema::new(
    "compute",
    AttributeDescriptor::HIDDEN,
    &[
        FieldSpec::new("instance_type").visibility(AttributeDescriptor::EVERYWHERE),
        FieldSpec::new("instance_count")
            .visibility(AttributeDescriptor::API_ONLY)
            .default_value(Literal::Int(1)),
        // No override: inherits HIDDEN
        FieldSpec::new("instance_secret").default_value(Literal::Str("")),
    ],
);

/// Application template: what runs on the compute.
pub static APPLICATION: TemplateSchema = TemplateSchema::new(
    "application",
    AttributeDescriptor::UI_ONLY,
    &[
        FieldSpec::new("version"),
        FieldSpec::new("precision").default_value(Literal::Str("SINGLE")),
        FieldSpec::new("secret")
            .visibility(AttributeDescriptor::HIDDEN)
            .default_value(Literal::Str("")),
    ],
);

/// Registry of all built-in templates.
///
/// Adding a template means declaring its schema and adding it here.
pub static SCHEMAS: &[&TemplateSchema] = &[&COMPUTE, &APPLICATION];

type FieldIndex = HashMap<&'static str, HashMap<&'static str, &'static FieldSpec>>;

/// Field lookup keyed by template name, then field name. Built once, read-only after.
static FIELD_INDEX: Lazy<FieldIndex> = Lazy::new(|| {
    SCHEMAS
        .iter()
        .map(|schema| {
            let fields = schema.fields.iter().map(|field| (field.name, field)).collect();
            (schema.name, fields)
        })
        .collect()
});

/// Look up a template schema by type name.
pub fn get_schema(name: &str) -> Option<&'static TemplateSchema> {
    SCHEMAS.iter().copied().find(|schema| schema.name == name)
}

/// Look up a registered field by `(template, field)`.
pub fn field_spec(template: &str, field: &str) -> Option<&'static FieldSpec> {
    FIELD_INDEX.get(template)?.get(field).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{channels, Channel};
    use std::collections::HashSet;

    #[test]
    fn registry_has_expected_templates() {
        assert!(get_schema("compute").is_some());
        assert!(get_schema("application").is_some());
        assert!(get_schema("storage").is_none());
    }

    #[test]
    fn field_names_are_unique_per_template() {
        for schema in SCHEMAS {
            let names: HashSet<_> = schema.field_names().collect();
            assert_eq!(names.len(), schema.fields.len(), "{}", schema.name);
        }
    }

    #[test]
    fn template_names_are_unique() {
        let names: HashSet<_> = SCHEMAS.iter().map(|schema| schema.name).collect();
        assert_eq!(names.len(), SCHEMAS.len());
    }

    #[test]
    fn field_index_covers_every_field() {
        for schema in SCHEMAS {
            for field in schema.fields {
                let indexed = field_spec(schema.name, field.name).unwrap();
                assert_eq!(indexed.name, field.name);
            }
        }
        assert!(field_spec("compute", "version").is_none());
        assert!(field_spec("nope", "instance_type").is_none());
    }

    #[test]
    fn unannotated_field_inherits_template_default() {
        let secret = COMPUTE.field("instance_secret").unwrap();
        assert!(secret.descriptor.is_none());
        let resolved = COMPUTE.resolve_descriptor(secret);
        for channel in channels() {
            assert!(!resolved.is_visible(channel).unwrap());
        }

        let precision = APPLICATION.field("precision").unwrap();
        assert_eq!(
            APPLICATION.resolve_descriptor(precision),
            AttributeDescriptor::UI_ONLY
        );
    }

    #[test]
    fn field_override_beats_template_default() {
        let secret = APPLICATION.field("secret").unwrap();
        let resolved = APPLICATION.resolve_descriptor(secret);
        assert!(!resolved.is_visible(Channel::UI_VISIBLE).unwrap());
    }

    #[test]
    fn positions_follow_declaration_order() {
        assert_eq!(COMPUTE.position("instance_type"), Some(0));
        assert_eq!(COMPUTE.position("instance_secret"), Some(2));
        assert_eq!(COMPUTE.position("version"), None);
    }

    #[test]
    fn required_fields_have_no_default() {
        assert!(COMPUTE.field("instance_type").unwrap().is_required());
        assert!(!COMPUTE.field("instance_count").unwrap().is_required());
        assert!(APPLICATION.field("version").unwrap().is_required());
    }

    #[test]
    fn literal_to_value() {
        assert_eq!(Literal::Int(1).to_value(), serde_json::json!(1));
        assert_eq!(Literal::Str("x").to_value(), serde_json::json!("x"));
        assert_eq!(Literal::Null.to_value(), Value::Null);
    }
}
