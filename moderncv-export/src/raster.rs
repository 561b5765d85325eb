//! Raster (PDF) export.
//!
//! Rasterizing HTML is left to an external program. [`CommandRasterExporter`]
//! writes a standalone page next to the destination, runs the configured
//! command with `{input}`, `{output}`, `{scale}` and `{orientation}`
//! substituted, and reports the file the program produced.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use moderncv_core::Theme;

use crate::error::{io_err, ExportError};
use crate::writer::{write_atomic, ExportReceipt};

/// File name used when the user gives no destination.
pub const DEFAULT_RASTER_FILE: &str = "cv.pdf";

/// Canvas scale used for the snapshot.
pub const DEFAULT_SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// What the rasterizer is asked to snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterRequest {
    pub markup: String,
    /// CSS colour painted behind the preview.
    pub background: String,
    pub scale: u32,
    pub orientation: Orientation,
}

impl RasterRequest {
    pub fn new(markup: impl Into<String>, theme: Theme) -> Self {
        RasterRequest {
            markup: markup.into(),
            background: theme.export_background().to_string(),
            scale: DEFAULT_SCALE,
            orientation: Orientation::Portrait,
        }
    }

    /// Self-contained page handed to the rasterizer.
    pub fn standalone_page(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>@page {{ size: A4 {orientation}; }} \
             body {{ margin: 0; background: {background}; }}</style>\n\
             </head>\n<body>{markup}</body>\n</html>\n",
            orientation = self.orientation,
            background = self.background,
            markup = self.markup,
        )
    }
}

pub trait RasterExporter: Send + Sync {
    fn export(&self, request: &RasterRequest, dest: &Path) -> Result<ExportReceipt, ExportError>;
}

/// Adapter around a user-configured HTML-to-PDF program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRasterExporter {
    program: String,
    args: Vec<String>,
}

impl CommandRasterExporter {
    /// Split a whitespace-separated command line. `None` when it is blank.
    ///
    /// Without an `{input}` placeholder the input and output paths are
    /// appended as the final two arguments.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(CommandRasterExporter {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn expand_args(&self, request: &RasterRequest, input: &Path, output: &Path) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        let scale = request.scale.to_string();
        let orientation = request.orientation.to_string();

        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                arg.replace("{input}", &input)
                    .replace("{output}", &output)
                    .replace("{scale}", &scale)
                    .replace("{orientation}", &orientation)
            })
            .collect();
        if !self.args.iter().any(|a| a.contains("{input}")) {
            args.push(input);
            args.push(output);
        }
        args
    }

    fn command_err(&self, message: impl Into<String>) -> ExportError {
        ExportError::Command {
            program: self.program.clone(),
            message: message.into(),
        }
    }
}

fn page_path(dest: &Path) -> PathBuf {
    PathBuf::from(format!("{}.moderncv.html", dest.display()))
}

impl RasterExporter for CommandRasterExporter {
    fn export(&self, request: &RasterRequest, dest: &Path) -> Result<ExportReceipt, ExportError> {
        let page = page_path(dest);
        write_atomic(&page, request.standalone_page().as_bytes())?;

        let args = self.expand_args(request, &page, dest);
        tracing::debug!(program = %self.program, ?args, "running raster command");
        let result = Command::new(&self.program).args(&args).output();
        let _ = std::fs::remove_file(&page);

        let output = result.map_err(|e| self.command_err(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.command_err(format!("{} {}", output.status, stderr.trim())));
        }

        let meta = match std::fs::metadata(dest) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(self.command_err(format!("no file produced at {}", dest.display())));
            }
            Err(e) => return Err(io_err(dest, e)),
        };

        tracing::info!(path = %dest.display(), bytes = meta.len(), "exported raster");
        Ok(ExportReceipt::new(dest, meta.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_theme_background_and_defaults() {
        let dark = RasterRequest::new("<div/>", Theme::Dark);
        assert_eq!(dark.background, "#1a1a1a");
        assert_eq!(dark.scale, 2);
        assert_eq!(dark.orientation, Orientation::Portrait);
        assert_eq!(RasterRequest::new("", Theme::Light).background, "#ffffff");
    }

    #[test]
    fn standalone_page_embeds_markup_and_background() {
        let page = RasterRequest::new("<div>cv</div>", Theme::Light).standalone_page();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("background: #ffffff"));
        assert!(page.contains("size: A4 portrait"));
        assert!(page.contains("<body><div>cv</div></body>"));
    }

    #[test]
    fn blank_command_line_is_none() {
        assert!(CommandRasterExporter::from_command_line("   ").is_none());
    }

    #[test]
    fn placeholders_are_substituted() {
        let exporter =
            CommandRasterExporter::from_command_line("wkhtmltopdf --zoom {scale} {input} {output}")
                .unwrap();
        let req = RasterRequest::new("", Theme::Dark);
        let args = exporter.expand_args(&req, Path::new("/tmp/in.html"), Path::new("/tmp/cv.pdf"));
        assert_eq!(exporter.program(), "wkhtmltopdf");
        assert_eq!(args, vec!["--zoom", "2", "/tmp/in.html", "/tmp/cv.pdf"]);
    }

    #[test]
    fn paths_are_appended_without_placeholders() {
        let exporter = CommandRasterExporter::from_command_line("html2pdf --quiet").unwrap();
        let req = RasterRequest::new("", Theme::Dark);
        let args = exporter.expand_args(&req, Path::new("in.html"), Path::new("out.pdf"));
        assert_eq!(args, vec!["--quiet", "in.html", "out.pdf"]);
    }

    #[test]
    fn missing_program_is_a_command_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let exporter =
            CommandRasterExporter::from_command_line("moderncv-no-such-rasterizer-binary").unwrap();
        let dest = dir.path().join("cv.pdf");
        let err = exporter
            .export(&RasterRequest::new("<p/>", Theme::Dark), &dest)
            .unwrap_err();
        assert!(matches!(err, ExportError::Command { .. }));
        assert!(!page_path(&dest).exists(), "page must be cleaned up");
    }
}
