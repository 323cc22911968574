//! Demo records and `--set` overrides.
//!
//! The CLI has no input format of its own: it projects a fixed set of demo
//! records, optionally adjusted with `TEMPLATE.FIELD=VALUE` overrides.

use anyhow::{anyhow, bail, Result};
use serde_json::Value;
use templar_core::{
    get_schema, ApplicationTemplate, ComputeTemplate, Literal, Record, TemplateSchema,
    APPLICATION, COMPUTE,
};

const SECRET: &str = "You should not see me!";

/// Demo values per template, in projection order.
static DEMO_VALUES: &[(&TemplateSchema, &[(&str, Literal)])] = &[
    (
        &COMPUTE,
        &[
            ("instance_type", Literal::Str("c24.xlarge")),
            ("instance_count", Literal::Int(6)),
            ("instance_secret", Literal::Str(SECRET)),
        ],
    ),
    (
        &APPLICATION,
        &[
            ("version", Literal::Str("2023.6")),
            ("precision", Literal::Str("DOUBLE")),
            ("secret", Literal::Str(SECRET)),
        ],
    ),
];

/// A parsed `--set TEMPLATE.FIELD=VALUE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub template: String,
    pub field: String,
    pub value: Value,
}

impl Override {
    pub fn parse(raw: &str) -> Result<Self> {
        let (target, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("expected TEMPLATE.FIELD=VALUE, got `{raw}`"))?;
        let (template, field) = target
            .split_once('.')
            .ok_or_else(|| anyhow!("expected TEMPLATE.FIELD before `=`, got `{target}`"))?;
        if template.is_empty() || field.is_empty() {
            bail!("expected TEMPLATE.FIELD before `=`, got `{target}`");
        }
        if get_schema(template).is_none() {
            bail!("unknown template `{template}`");
        }
        Ok(Self {
            template: template.to_string(),
            field: field.to_string(),
            value: parse_value(value),
        })
    }
}

/// Integers and booleans are typed; a JSON-quoted value is forced to a
/// string; everything else is taken verbatim as a string.
fn parse_value(raw: &str) -> Value {
    if raw.starts_with('"') {
        if let Ok(Value::String(s)) = serde_json::from_str(raw) {
            return Value::String(s);
        }
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}

/// Which demo templates to build: all of `only` (or everything when empty),
/// minus `skip`.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub only: Vec<String>,
    pub skip: Vec<String>,
}

impl Selection {
    fn validate(&self) -> Result<()> {
        for name in self.only.iter().chain(&self.skip) {
            if get_schema(name).is_none() {
                bail!("unknown template `{name}`");
            }
        }
        Ok(())
    }

    fn includes(&self, template: &str) -> bool {
        (self.only.is_empty() || self.only.iter().any(|name| name == template))
            && !self.skip.iter().any(|name| name == template)
    }
}

/// Build the selected demo records with overrides applied.
pub fn demo_records(overrides: &[Override], selection: &Selection) -> Result<Vec<Record>> {
    selection.validate()?;

    DEMO_VALUES
        .iter()
        .filter(|(schema, _)| selection.includes(schema.name))
        .map(|(schema, values)| {
            let mut builder = Record::builder(*schema);
            for (field, literal) in values.iter() {
                builder = builder.set(*field, literal.to_value());
            }
            for item in overrides.iter().filter(|o| o.template == schema.name) {
                builder = builder.set(item.field.as_str(), item.value.clone());
            }
            Ok(builder.build()?)
        })
        .collect()
}

/// The demo templates as their typed counterparts.
pub fn typed_demo() -> Result<(ComputeTemplate, ApplicationTemplate)> {
    let compute = ComputeTemplate::builder()
        .instance_type("c24.xlarge")
        .instance_count(6)
        .instance_secret(SECRET)
        .build()?;
    let application = ApplicationTemplate::builder()
        .version("2023.6")
        .precision("DOUBLE")
        .secret(SECRET)
        .build()?;
    Ok((compute, application))
}
