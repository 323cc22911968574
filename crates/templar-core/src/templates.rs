//! Built-in template types.
//!
//! Typed counterparts of the [`COMPUTE`] and [`APPLICATION`] schemas. Each
//! implements [`Template`] explicitly, pulling descriptors from its schema so
//! visibility is declared once per type.

use std::fmt;

use serde_json::Value;

use crate::error::{Result, TemplarError};
use crate::schema::{Literal, TemplateSchema, APPLICATION, COMPUTE};
use crate::template::{schema_fields, write_template, Field, Template};

fn default_literal(schema: &TemplateSchema, field: &str) -> Option<Literal> {
    schema.field(field).and_then(|spec| spec.default)
}

fn require_str(schema: &TemplateSchema, field: &str, value: Option<String>) -> Result<String> {
    value
        .or_else(|| match default_literal(schema, field) {
            Some(Literal::Str(s)) => Some(s.to_string()),
            _ => None,
        })
        .ok_or_else(|| TemplarError::missing_field(schema.name, field))
}

fn require_int(schema: &TemplateSchema, field: &str, value: Option<i64>) -> Result<i64> {
    value
        .or(match default_literal(schema, field) {
            Some(Literal::Int(n)) => Some(n),
            _ => None,
        })
        .ok_or_else(|| TemplarError::missing_field(schema.name, field))
}

/// A compute template: instance shape, count and secret.
///
/// `instance_secret` has no visibility of its own and inherits the
/// template's hidden default, so it never appears in a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeTemplate {
    instance_type: String,
    instance_count: i64,
    instance_secret: String,
}

impl ComputeTemplate {
    pub fn builder() -> ComputeTemplateBuilder {
        ComputeTemplateBuilder::default()
    }

    pub fn schema() -> &'static TemplateSchema {
        &COMPUTE
    }

    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }

    pub fn instance_count(&self) -> i64 {
        self.instance_count
    }

    pub fn instance_secret(&self) -> &str {
        &self.instance_secret
    }
}

impl Template for ComputeTemplate {
    fn type_name(&self) -> &str {
        COMPUTE.name
    }

    fn fields(&self) -> Vec<Field<'_>> {
        schema_fields(
            &COMPUTE,
            [
                Value::from(self.instance_type.as_str()),
                Value::from(self.instance_count),
                Value::from(self.instance_secret.as_str()),
            ],
        )
    }
}

impl fmt::Display for ComputeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_template(f, self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComputeTemplateBuilder {
    instance_type: Option<String>,
    instance_count: Option<i64>,
    instance_secret: Option<String>,
}

impl ComputeTemplateBuilder {
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = Some(value.into());
        self
    }

    pub fn instance_count(mut self, value: i64) -> Self {
        self.instance_count = Some(value);
        self
    }

    pub fn instance_secret(mut self, value: impl Into<String>) -> Self {
        self.instance_secret = Some(value.into());
        self
    }

    pub fn build(self) -> Result<ComputeTemplate> {
        Ok(ComputeTemplate {
            instance_type: require_str(&COMPUTE, "instance_type", self.instance_type)?,
            instance_count: require_int(&COMPUTE, "instance_count", self.instance_count)?,
            instance_secret: require_str(&COMPUTE, "instance_secret", self.instance_secret)?,
        })
    }
}

/// An application template: version and numeric precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationTemplate {
    version: String,
    precision: String,
    secret: String,
}

impl ApplicationTemplate {
    pub fn builder() -> ApplicationTemplateBuilder {
        ApplicationTemplateBuilder::default()
    }

    pub fn schema() -> &'static TemplateSchema {
        &APPLICATION
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn precision(&self) -> &str {
        &self.precision
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Template for ApplicationTemplate {
    fn type_name(&self) -> &str {
        APPLICATION.name
    }

    fn fields(&self) -> Vec<Field<'_>> {
        schema_fields(
            &APPLICATION,
            [
                Value::from(self.version.as_str()),
                Value::from(self.precision.as_str()),
                Value::from(self.secret.as_str()),
            ],
        )
    }
}

impl fmt::Display for ApplicationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_template(f, self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationTemplateBuilder {
    version: Option<String>,
    precision: Option<String>,
    secret: Option<String>,
}

impl ApplicationTemplateBuilder {
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn precision(mut self, value: impl Into<String>) -> Self {
        self.precision = Some(value.into());
        self
    }

    pub fn secret(mut self, value: impl Into<String>) -> Self {
        self.secret = Some(value.into());
        self
    }

    pub fn build(self) -> Result<ApplicationTemplate> {
        Ok(ApplicationTemplate {
            version: require_str(&APPLICATION, "version", self.version)?,
            precision: require_str(&APPLICATION, "precision", self.precision)?,
            secret: require_str(&APPLICATION, "secret", self.secret)?,
        })
    }
}
