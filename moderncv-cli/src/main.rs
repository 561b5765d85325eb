//! moderncv: CV editor with live template preview.
//!
//! # Usage
//!
//! ```text
//! moderncv edit [--script FILE] [--template ID] [--lang CODE] [--theme dark|light] [--output-dir DIR]
//! moderncv preview [--template ID] [--lang CODE] [--out FILE]
//! moderncv templates [--json]
//! moderncv languages
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    edit::EditArgs, languages::LanguagesArgs, preview::PreviewArgs, templates::TemplatesArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "moderncv",
    version,
    about = "Edit a CV and preview it under interchangeable templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an editing session on the sample CV (commands from stdin or a script).
    Edit(EditArgs),

    /// Render the sample CV and print or save the markup.
    Preview(PreviewArgs),

    /// List available templates and their layouts.
    Templates(TemplatesArgs),

    /// List display languages.
    Languages(LanguagesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    moderncv_editor::init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Edit(args) => args.run(),
        Commands::Preview(args) => args.run(),
        Commands::Templates(args) => args.run(),
        Commands::Languages(args) => args.run(),
    }
}
