//! `moderncv preview`: one-shot render of the sample CV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use moderncv_core::{CvDocument, Language};
use moderncv_editor::EditorConfig;
use moderncv_export::write_atomic;
use moderncv_renderer::{Renderer, TemplateKind};

/// Arguments for `moderncv preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Template id (unknown ids fall back to modern).
    #[arg(long)]
    pub template: Option<String>,

    /// Display language.
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Write the markup to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        let config = EditorConfig::load().context("failed to load ~/.moderncv/config.yaml")?;
        let template = self.template.unwrap_or(config.template);
        let language = self.language.unwrap_or(config.language);

        if TemplateKind::lookup(&template).is_none() {
            eprintln!(
                "{} unknown template '{}', using {}",
                "warning:".yellow().bold(),
                template,
                TemplateKind::resolve(&template)
            );
        }

        let renderer = Renderer::with_template_dir(config.templates_dir.as_deref())
            .context("failed to load templates")?;
        let rendered = renderer
            .render(&CvDocument::sample(), &template, language)
            .with_context(|| format!("failed to render template '{template}'"))?;

        match self.out {
            Some(path) => {
                let receipt = write_atomic(&path, rendered.markup.as_bytes())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!(
                    "{} {} ({}, {}, {} bytes)",
                    "wrote".green().bold(),
                    receipt.path.display(),
                    rendered.template,
                    rendered.language,
                    receipt.bytes
                );
            }
            None => println!("{}", rendered.markup),
        }
        Ok(())
    }
}
