//! # Projection Engine
//!
//! Turns template records into the view one channel is allowed to see.
//!
//! ## Rules
//!
//! - Fields are visited in declaration order and kept iff their descriptor is
//!   visible on the channel. Hidden fields are dropped, not nulled.
//! - Each record contributes one entry keyed by its type name. A record with
//!   no visible fields still contributes an empty map.
//! - Two records with the same type name: the later one replaces the earlier
//!   entry, which keeps its original position.
//! - An empty record list projects to an empty map unless the caller asks for
//!   [`Projector::require_non_empty`].
//! - The channel is validated before any record is read.
//!
//! Projection only reads its inputs, so the same records can be projected from
//! several threads at once.
//!
//! ## Example
//!
//! ```
//! use templar_core::{project, Channel, Record, Template, COMPUTE};
//!
//! let compute = Record::builder(&COMPUTE)
//!     .set("instance_type", "c24.xlarge")
//!     .set("instance_secret", "hunter2")
//!     .build()
//!     .unwrap();
//!
//! let view = project(&[&compute as &dyn Template], Channel::UI_VISIBLE).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&view).unwrap(),
//!     r#"{"compute":{"instance_type":"c24.xlarge"}}"#
//! );
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::channel::Channel;
use crate::error::{Result, TemplarError};
use crate::template::Template;

/// Visible fields of one record, in declaration order.
pub type FieldMap = Map<String, Value>;

/// The channel-filtered view of a set of records.
///
/// Serializes as `{type_name: {field: value, ...}, ...}` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Projection {
    entries: Map<String, Value>,
}

impl Projection {
    /// Visible fields of the record projected under `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&FieldMap> {
        self.entries.get(type_name).and_then(Value::as_object)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names in output order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMap)> {
        self.entries
            .iter()
            .filter_map(|(name, fields)| fields.as_object().map(|map| (name.as_str(), map)))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }

    fn insert(&mut self, type_name: &str, fields: FieldMap) {
        if self
            .entries
            .insert(type_name.to_string(), Value::Object(fields))
            .is_some()
        {
            debug!(template = type_name, "duplicate template replaced earlier entry");
        }
    }
}

/// Projects records onto a single channel.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    channel: Channel,
    require_non_empty: bool,
}

impl Projector {
    /// Create a projector for `channel`.
    ///
    /// Fails with [`TemplarError::InvalidChannel`] if the channel isn't
    /// registered.
    pub fn new(channel: Channel) -> Result<Self> {
        channel.position()?;
        Ok(Self {
            channel,
            require_non_empty: false,
        })
    }

    /// Treat an empty record list as [`TemplarError::EmptyInput`].
    pub fn require_non_empty(mut self, require: bool) -> Self {
        self.require_non_empty = require;
        self
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Visible fields of a single record.
    pub fn project_record(&self, record: &dyn Template) -> Result<FieldMap> {
        let mut visible = FieldMap::new();
        for field in record.fields() {
            if field.descriptor.is_visible(self.channel)? {
                visible.insert(field.name.to_string(), field.value);
            } else {
                trace!(
                    template = record.type_name(),
                    field = field.name,
                    channel = %self.channel,
                    "field hidden"
                );
            }
        }
        Ok(visible)
    }

    /// Project every record, keyed by type name.
    pub fn project(&self, records: &[&dyn Template]) -> Result<Projection> {
        if records.is_empty() && self.require_non_empty {
            return Err(TemplarError::EmptyInput);
        }

        debug!(
            channel = %self.channel,
            records = records.len(),
            "projecting records"
        );

        let mut projection = Projection::default();
        for record in records {
            let fields = self.project_record(*record)?;
            projection.insert(record.type_name(), fields);
        }
        Ok(projection)
    }
}

/// Project `records` onto `channel`.
///
/// Shorthand for `Projector::new(channel)?.project(records)`.
pub fn project(records: &[&dyn Template], channel: Channel) -> Result<Projection> {
    Projector::new(channel)?.project(records)
}
