use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "templar",
    bin_name = "templar",
    version,
    disable_help_subcommand = true,
    after_help = "Run without a command to print the demo templates and both projections."
)]
#[command(about = "Channel-filtered projections of visibility-tagged templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (overrides ./templar.toml and the user config)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project the demo templates onto a channel and print JSON
    #[command(display_order = 1)]
    Project {
        /// Channel to project on (api, ui, api_visible, ui_visible)
        #[arg(short, long)]
        channel: Option<String>,

        /// JSON indent width; 0 prints compact JSON
        #[arg(long)]
        indent: Option<usize>,

        /// Override a demo value: TEMPLATE.FIELD=VALUE (repeatable)
        #[arg(long = "set", value_name = "TEMPLATE.FIELD=VALUE")]
        overrides: Vec<String>,

        /// Only project these templates (repeatable)
        #[arg(long = "only", value_name = "TEMPLATE")]
        only: Vec<String>,

        /// Leave these templates out (repeatable)
        #[arg(long = "skip", value_name = "TEMPLATE")]
        skip: Vec<String>,

        /// Fail if no templates are selected
        #[arg(long)]
        strict: bool,
    },

    /// Print the demo templates with every field
    #[command(display_order = 2)]
    Show,

    /// Print resolved field visibility for each template
    #[command(display_order = 3)]
    Schema {
        /// Only this template
        #[arg(short, long)]
        template: Option<String>,
    },

    /// List recognized channels
    #[command(display_order = 4)]
    Channels,
}
