//! `moderncv edit`: interactive or scripted editing session.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use moderncv_core::{Language, Theme};
use moderncv_editor::{start_blocking, EditorConfig, Session};

/// Arguments for `moderncv edit`.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Initial template (unknown ids fall back to modern).
    #[arg(long)]
    pub template: Option<String>,

    /// Initial display language.
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Initial theme.
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Directory exports are written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl EditArgs {
    pub fn run(self) -> Result<()> {
        let mut config = EditorConfig::load().context("failed to load ~/.moderncv/config.yaml")?;
        if let Some(template) = self.template {
            config.template = template;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }

        let mut session = Session::new(&config).context("failed to start editing session")?;
        start_blocking(&mut session, self.script.as_deref()).context("editing session failed")?;
        Ok(())
    }
}
