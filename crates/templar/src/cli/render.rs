//! Output formatting.
//!
//! Everything the CLI prints goes through here. Projections and schemas are
//! rendered as JSON; key order is whatever the value carries.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{json, Map, Value};
use templar_core::{Channel, ChannelSpec, TemplateSchema};

/// Serialize as JSON, compact when `indent` is 0.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }
    let pad = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

/// Resolved visibility of each field of `schema`.
pub fn schema_view(schema: &TemplateSchema) -> Value {
    let fields: Map<String, Value> = schema
        .fields
        .iter()
        .map(|spec| {
            let view = json!({
                "visibility": schema.resolve_descriptor(spec),
                "inherited": spec.descriptor.is_none(),
                "default": spec.default.map(|lit| lit.to_value()),
            });
            (spec.name.to_string(), view)
        })
        .collect();
    json!({
        "defaults": schema.defaults,
        "fields": fields,
    })
}

pub fn channel_line(spec: &ChannelSpec) -> String {
    format!("{:<12} {:<4} {}", spec.name, spec.alias, spec.label)
}

pub fn projection_heading(channel: Channel) -> String {
    format!("{} Visible\n", channel.label())
}
