//! # Templar CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/templar-core/`: library: channels, descriptors, schemas, records
//!   and the projection engine. No I/O.
//! - `crates/templar/`: this CLI, depends on `templar-core`.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/templar/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - configuration loading (config.rs)                        │
//! │  - demo records + overrides (demo.rs)                       │
//! │  - JSON output (render.rs)                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (crates/templar-core/src/)                            │
//! │  - Template schemas and records                             │
//! │  - Projector: channel-filtered, ordered maps                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
