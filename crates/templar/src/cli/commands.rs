//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing and configuration
//! - Installs a tracing subscriber
//!
//! Everything below it (`templar_core`) is pure: it takes values and returns
//! values. Handlers here build the demo records, call the projection engine
//! and print what comes back.

use anyhow::{bail, Result};
use clap::Parser;
use templar_core::{channels, get_schema, Channel, Projector, Template, CHANNELS, SCHEMAS};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::demo::{demo_records, typed_demo, Override, Selection};
use super::render::{channel_line, projection_heading, schema_view, to_json};
use super::setup::{Cli, Commands};
use crate::config::TemplarConfig;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TemplarConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        None => handle_demo(&config),
        Some(Commands::Project {
            channel,
            indent,
            overrides,
            only,
            skip,
            strict,
        }) => {
            let options = ProjectOptions {
                channel: match channel {
                    Some(name) => Channel::parse(&name)?,
                    None => config.channel()?,
                },
                indent: indent.unwrap_or(config.indent),
                strict: strict || config.require_records,
            };
            let selection = Selection { only, skip };
            handle_project(&options, &overrides, &selection)
        }
        Some(Commands::Show) => handle_show(),
        Some(Commands::Schema { template }) => handle_schema(template.as_deref(), config.indent),
        Some(Commands::Channels) => handle_channels(),
    }
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "templar=debug,templar_core=debug"
    } else {
        "templar=warn,templar_core=warn"
    };
    // A subscriber may already be installed (e.g. under test harnesses).
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

struct ProjectOptions {
    channel: Channel,
    indent: usize,
    strict: bool,
}

fn handle_project(
    options: &ProjectOptions,
    overrides: &[String],
    selection: &Selection,
) -> Result<()> {
    let overrides = overrides
        .iter()
        .map(|raw| Override::parse(raw))
        .collect::<Result<Vec<_>>>()?;
    let records = demo_records(&overrides, selection)?;
    let refs: Vec<&dyn Template> = records.iter().map(|r| r as &dyn Template).collect();

    let projection = Projector::new(options.channel)?
        .require_non_empty(options.strict)
        .project(&refs)?;
    println!("{}", to_json(&projection, options.indent)?);
    Ok(())
}

/// The naked `templar` run: print the demo templates, then every channel's view.
fn handle_demo(config: &TemplarConfig) -> Result<()> {
    let (compute, application) = typed_demo()?;

    println!("Instantiate templates with template attributes\n");
    println!("{compute}\n");
    println!("{application}\n");

    println!("Apply representations\n");
    let records: [&dyn Template; 2] = [&compute, &application];
    for channel in channels() {
        let projection = Projector::new(channel)?.project(&records)?;
        println!("{}", projection_heading(channel));
        println!("{}\n", to_json(&projection, config.indent)?);
    }
    Ok(())
}

fn handle_show() -> Result<()> {
    for record in demo_records(&[], &Selection::default())? {
        println!("{record}");
    }
    Ok(())
}

fn handle_schema(template: Option<&str>, indent: usize) -> Result<()> {
    let selected = match template {
        Some(name) => match get_schema(name) {
            Some(schema) => vec![schema],
            None => bail!("unknown template `{name}`"),
        },
        None => SCHEMAS.to_vec(),
    };

    let view: serde_json::Map<String, serde_json::Value> = selected
        .into_iter()
        .map(|schema| (schema.name.to_string(), schema_view(schema)))
        .collect();
    println!("{}", to_json(&view, indent)?);
    Ok(())
}

fn handle_channels() -> Result<()> {
    for spec in CHANNELS {
        println!("{}", channel_line(spec));
    }
    Ok(())
}
