//! # CLI Behavior
//!
//! This is **one possible UI client** for templar, not the library itself.
//! It demonstrates projections over a fixed set of demo templates.
//!
//! ## Commands
//!
//! - `templar`: print the demo templates, then their API and UI projections.
//! - `templar project [--channel C] [--set T.F=V]... [--only T]... [--skip T]... [--strict]`:
//!   print one projection as JSON.
//! - `templar show`: print the demo templates with every field, secrets included.
//! - `templar schema [--template T]`: print resolved visibility per field.
//! - `templar channels`: list recognized channels.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `demo`: demo records and `--set` overrides
//! - `render`: JSON and text output
//! - `setup`: argument parsing via clap

mod commands;
mod demo;
mod render;
pub mod setup;

pub use commands::run;
