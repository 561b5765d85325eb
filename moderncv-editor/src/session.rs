//! One editing session: the document plus everything the user picked
//! around it.
//!
//! All edits flow through [`Session::apply`]. Template, language and theme
//! are session state only; switching them never touches the document.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moderncv_core::{
    CvDocument, FieldPath, LabelDictionary, Language, PersonalField, Section, Theme,
};
use moderncv_export::{
    CommandRasterExporter, DataUriDecoder, DocumentExporter, ExportError, ExportReceipt,
    MsWordHtmlExporter, RasterExporter, RasterRequest, DEFAULT_DOCUMENT_FILE, DEFAULT_RASTER_FILE,
};
use moderncv_renderer::{RenderedCv, Renderer, TemplateKind};

use crate::command::{EditorCommand, ExportKind, ThemeChange, HELP};
use crate::config::EditorConfig;
use crate::error::{io_err, EditorError};
use crate::picture::{PictureCompletion, PictureLoader, PictureOutcome};

/// Lines to print after a command, and whether the session should end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Response {
    fn line(text: impl Into<String>) -> Self {
        Response {
            lines: vec![text.into()],
            quit: false,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Response { lines, quit: false }
    }
}

pub struct Session {
    document: CvDocument,
    template: TemplateKind,
    language: Language,
    theme: Theme,
    output_dir: PathBuf,
    renderer: Renderer,
    pictures: PictureLoader,
    max_picture_bytes: usize,
    document_exporter: Box<dyn DocumentExporter>,
    raster_exporter: Option<Arc<dyn RasterExporter>>,
}

impl Session {
    /// Session on the sample document, configured from `config`.
    pub fn new(config: &EditorConfig) -> Result<Self, EditorError> {
        Self::with_document(CvDocument::sample(), config)
    }

    pub fn with_document(document: CvDocument, config: &EditorConfig) -> Result<Self, EditorError> {
        let renderer = Renderer::with_template_dir(config.templates_dir.as_deref())?;
        let raster_exporter = config
            .raster_command
            .as_deref()
            .and_then(CommandRasterExporter::from_command_line)
            .map(|e| Arc::new(e) as Arc<dyn RasterExporter>);

        Ok(Session {
            document,
            template: resolve_template(&config.template),
            language: config.language,
            theme: config.theme,
            output_dir: config.output_dir.clone(),
            renderer,
            pictures: PictureLoader::new(Arc::new(DataUriDecoder::new(config.max_picture_bytes))),
            max_picture_bytes: config.max_picture_bytes,
            document_exporter: Box::new(MsWordHtmlExporter),
            raster_exporter,
        })
    }

    /// Replace the raster collaborator (a configured command by default).
    pub fn set_raster_exporter(&mut self, exporter: Box<dyn RasterExporter>) {
        self.raster_exporter = Some(Arc::from(exporter));
    }

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn labels(&self) -> &LabelDictionary {
        self.renderer.labels()
    }

    /// Render the current document with the current template and language.
    pub fn render(&self) -> Result<RenderedCv, EditorError> {
        let rendered = self
            .renderer
            .render_kind(&self.document, self.template, self.language)?;
        tracing::debug!(template = %rendered.template, language = %rendered.language, "rendered preview");
        Ok(rendered)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    pub async fn apply(&mut self, cmd: EditorCommand) -> Result<Response, EditorError> {
        let response = match cmd {
            EditorCommand::Set { path, value } => {
                if path == FieldPath::Personal(PersonalField::ProfilePicture) {
                    self.pictures.supersede();
                }
                if self.document.set_field(path, value) {
                    Response::line("ok")
                } else {
                    tracing::debug!(?path, "edit addressed a missing entry");
                    Response::line(format!("nothing to change: {}", describe_missing(path)))
                }
            }
            EditorCommand::Add(section) => {
                let index = self.document.add_entry(section);
                Response::line(format!("added {section} {index}"))
            }
            EditorCommand::Remove(section, index) => {
                if self.document.remove_entry(section, index) {
                    Response::line(format!("removed {section} {index}"))
                } else {
                    tracing::debug!(%section, index, "remove addressed a missing entry");
                    Response::line(format!("nothing to change: no {section} {index}"))
                }
            }
            EditorCommand::Skills(raw) => {
                self.document.set_skills_from_text(&raw);
                Response::line(format!("skills: {}", self.document.skills_text()))
            }
            EditorCommand::Picture(path) => {
                let size = tokio::fs::metadata(&path)
                    .await
                    .map_err(|e| io_err(&path, e))?
                    .len();
                let size = usize::try_from(size).unwrap_or(usize::MAX);
                if size > self.max_picture_bytes {
                    return Err(ExportError::ImageTooLarge {
                        size,
                        max: self.max_picture_bytes,
                    }
                    .into());
                }
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|e| io_err(&path, e))?;
                let seq = self.pictures.request(bytes);
                Response::line(format!("picture #{seq} loading {}", path.display()))
            }
            EditorCommand::Wait => Response::lines(self.drain_pictures().await?),
            EditorCommand::Template(id) => {
                self.template = resolve_template(&id);
                if TemplateKind::lookup(&id).is_some() {
                    Response::line(format!("template: {}", self.template))
                } else {
                    Response::line(format!("unknown template '{id}', using {}", self.template))
                }
            }
            EditorCommand::Lang(language) => {
                self.language = language;
                Response::line(format!("language: {} ({})", language, language.name()))
            }
            EditorCommand::Theme(change) => {
                self.theme = match change {
                    ThemeChange::Set(theme) => theme,
                    ThemeChange::Toggle => self.theme.toggle(),
                };
                Response::line(format!("theme: {}", self.theme))
            }
            EditorCommand::Show { json } => {
                if json {
                    Response::line(serde_json::to_string_pretty(&self.document)?)
                } else {
                    Response::lines(self.summary())
                }
            }
            EditorCommand::Preview => Response::line(self.render()?.markup),
            EditorCommand::Export { kind, path } => {
                let receipt = self.export(kind, path.as_deref()).await?;
                Response::line(format!(
                    "exported {} ({} bytes)",
                    receipt.path.display(),
                    receipt.bytes
                ))
            }
            EditorCommand::Help => Response::line(HELP),
            EditorCommand::Quit => Response {
                lines: Vec::new(),
                quit: true,
            },
        };
        Ok(response)
    }

    /// The rasterizer runs on the blocking pool; decodes keep completing meanwhile.
    async fn export(
        &self,
        kind: ExportKind,
        path: Option<&Path>,
    ) -> Result<ExportReceipt, EditorError> {
        let rendered = self.render()?;
        let receipt = match kind {
            ExportKind::Doc => {
                let dest = self.export_path(path, DEFAULT_DOCUMENT_FILE);
                self.document_exporter.export(&rendered.markup, &dest)?
            }
            ExportKind::Pdf => {
                let exporter = self
                    .raster_exporter
                    .clone()
                    .ok_or(ExportError::NoRasterCommand)?;
                let dest = self.export_path(path, DEFAULT_RASTER_FILE);
                let request = RasterRequest::new(rendered.markup, self.theme);
                tokio::task::spawn_blocking(move || exporter.export(&request, &dest))
                    .await
                    .map_err(|e| EditorError::ExportTask(e.to_string()))??
            }
        };
        Ok(receipt)
    }

    fn export_path(&self, path: Option<&Path>, default_name: &str) -> PathBuf {
        match path {
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => self.output_dir.join(p),
            None => self.output_dir.join(default_name),
        }
    }

    fn summary(&self) -> Vec<String> {
        let info = &self.document.personal_info;
        let labels = self.renderer.labels().labels(self.language);
        let mut lines = vec![
            format!("{} | {}", info.name, info.title),
            format!(
                "{}: {} | {}: {} | {}: {} | {}: {}",
                labels.phone,
                info.phone,
                labels.email,
                info.email,
                labels.location,
                info.location,
                labels.website_portfolio,
                info.website
            ),
        ];
        for (i, e) in self.document.experience.iter().enumerate() {
            lines.push(format!(
                "{} {i}: {} @ {} ({})",
                Section::Experience,
                e.role,
                e.company,
                e.duration
            ));
        }
        for (i, e) in self.document.education.iter().enumerate() {
            lines.push(format!(
                "{} {i}: {}, {} ({})",
                Section::Education,
                e.degree,
                e.institution,
                e.duration
            ));
        }
        lines.push(format!("{}: {}", labels.skills, self.document.skills_text()));
        lines.push(format!(
            "template: {} | language: {} | theme: {}",
            self.template, self.language, self.theme
        ));
        lines
    }

    // -----------------------------------------------------------------------
    // Pictures
    // -----------------------------------------------------------------------

    pub fn pending_pictures(&self) -> usize {
        self.pictures.pending()
    }

    /// Wait for the next picture completion. Cancel-safe.
    pub async fn next_picture(&mut self) -> Result<PictureCompletion, EditorError> {
        self.pictures.next_completion().await
    }

    /// Apply or discard a completion; returns the line to report, if any.
    pub fn on_picture(&mut self, completion: PictureCompletion) -> Option<String> {
        match self.pictures.accept(completion) {
            PictureOutcome::Apply { seq, data_uri } => {
                tracing::info!(seq, bytes = data_uri.len(), "profile picture applied");
                self.document.set_profile_picture(data_uri);
                Some(format!("picture #{seq} applied"))
            }
            PictureOutcome::Failed { seq, error } => {
                Some(format!("picture #{seq} failed: {error}"))
            }
            PictureOutcome::Stale { .. } => None,
        }
    }

    /// Wait for every in-flight decode and apply the winner.
    pub async fn drain_pictures(&mut self) -> Result<Vec<String>, EditorError> {
        let mut lines = Vec::new();
        while self.pictures.pending() > 0 {
            let completion = self.pictures.next_completion().await?;
            lines.extend(self.on_picture(completion));
        }
        Ok(lines)
    }
}

fn resolve_template(id: &str) -> TemplateKind {
    let kind = TemplateKind::resolve(id);
    if TemplateKind::lookup(id).is_none() {
        tracing::warn!(id, fallback = %kind, "unknown template id");
    }
    kind
}

fn describe_missing(path: FieldPath) -> String {
    match path {
        FieldPath::Experience(i, _) => format!("no {} {i}", Section::Experience),
        FieldPath::Education(i, _) => format!("no {} {i}", Section::Education),
        FieldPath::Personal(_) => "no such field".to_string(),
    }
}
