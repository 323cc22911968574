//! # Templar
//!
//! Templar declares flat "template" records whose fields carry visibility
//! metadata, and produces per-channel projections of them ready to hand to a
//! serializer.
//!
//! ## The Problem
//!
//! One record is shown to several audiences. The public API may see a
//! machine's shape, the UI only what a human needs, and neither may ever see
//! the credentials stored next to them. Scattering `if channel == ...` checks
//! through serialization code makes the exposure of a record impossible to
//! audit.
//!
//! ## The Model
//!
//! ```text
//! Channel              "api_visible", "ui_visible", ... (registry: channel.rs)
//!    │
//! AttributeDescriptor  one flag per channel, hidden by default
//!    │
//! TemplateSchema       per-type defaults + per-field overrides (schema.rs)
//!    │
//! Template             (name, value, descriptor) triples in declaration order
//!    │
//! Projector            keeps visible fields, keyed by template type name
//! ```
//!
//! Visibility is declared once per field on the template *type*; instances
//! only carry values. Projection is a pure read, so the exposure of any
//! template can be checked by reading its schema.
//!
//! ## Usage
//!
//! ```
//! use templar_core::{project, Channel, ApplicationTemplate, ComputeTemplate, Template};
//!
//! let compute = ComputeTemplate::builder()
//!     .instance_type("c24.xlarge")
//!     .instance_count(6)
//!     .instance_secret("You should not see me!")
//!     .build()
//!     .unwrap();
//! let app = ApplicationTemplate::builder()
//!     .version("2023.6")
//!     .precision("DOUBLE")
//!     .build()
//!     .unwrap();
//!
//! let records: [&dyn Template; 2] = [&compute, &app];
//! let api = project(&records, Channel::API_VISIBLE).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&api).unwrap(),
//!     r#"{"compute":{"instance_type":"c24.xlarge","instance_count":6},"application":{}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`channel`]: channel registry and lookup
//! - [`descriptor`]: per-field visibility flags
//! - [`schema`]: template schemas and the built-in registry
//! - [`template`]: the [`Template`] capability and schema-backed [`Record`]s
//! - [`templates`]: typed built-in templates
//! - [`projection`]: the projection engine
//! - [`error`]: error types

pub mod channel;
pub mod descriptor;
pub mod error;
pub mod projection;
pub mod schema;
pub mod template;
pub mod templates;

pub use channel::{channels, Channel, ChannelSpec, CHANNELS};
pub use descriptor::AttributeDescriptor;
pub use error::{Result, TemplarError};
pub use projection::{project, FieldMap, Projection, Projector};
pub use schema::{
    field_spec, get_schema, FieldSpec, Literal, TemplateSchema, APPLICATION, COMPUTE, SCHEMAS,
};
pub use template::{Field, Record, RecordBuilder, Template};
pub use templates::{
    ApplicationTemplate, ApplicationTemplateBuilder, ComputeTemplate, ComputeTemplateBuilder,
};
