//! Tera rendering engine: [`TemplateKind`] enum and [`Renderer`].
//!
//! | Template   | Tera name            | Header                              | Skills   |
//! |------------|----------------------|-------------------------------------|----------|
//! | Modern     | `cv/modern.html`     | centred, round picture, inline contact | pills |
//! | Classic    | `cv/classic.html`    | row, square picture, contact aside  | outlined |
//! | Minimalist | `cv/minimalist.html` | left, no picture, two contact lines | plain    |
//!
//! All names end in `.html`, so Tera escapes every interpolated value.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tera::Tera;

use moderncv_core::{CvDocument, LabelDictionary, Language};

use crate::context::TemplateContext;
use crate::error::RenderError;
use crate::layout::{self, LayoutSpec};

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    (
        "cv/_sections.html",
        include_str!("templates/_partials/sections.html.tera"),
    ),
    ("cv/modern.html", include_str!("templates/modern.html.tera")),
    ("cv/classic.html", include_str!("templates/classic.html.tera")),
    (
        "cv/minimalist.html",
        include_str!("templates/minimalist.html.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// Load `.html` overrides from `dir`; `<dir>/cv/modern.html` replaces `cv/modern.html`.
fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("html") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// The closed set of preview layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimalist,
}

impl TemplateKind {
    /// All templates in picker order.
    pub fn all() -> &'static [TemplateKind] {
        &[
            TemplateKind::Modern,
            TemplateKind::Classic,
            TemplateKind::Minimalist,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimalist => "minimalist",
        }
    }

    /// Label on the template picker button.
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
            TemplateKind::Minimalist => "Minimalist",
        }
    }

    /// Tera name of the root template.
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "cv/modern.html",
            TemplateKind::Classic => "cv/classic.html",
            TemplateKind::Minimalist => "cv/minimalist.html",
        }
    }

    pub fn layout(&self) -> &'static LayoutSpec {
        match self {
            TemplateKind::Modern => &layout::MODERN,
            TemplateKind::Classic => &layout::CLASSIC,
            TemplateKind::Minimalist => &layout::MINIMALIST,
        }
    }

    /// Exact lookup by id, ignoring case and surrounding whitespace.
    pub fn lookup(id: &str) -> Option<TemplateKind> {
        match id.trim().to_ascii_lowercase().as_str() {
            "modern" => Some(TemplateKind::Modern),
            "classic" => Some(TemplateKind::Classic),
            "minimalist" => Some(TemplateKind::Minimalist),
            _ => None,
        }
    }

    /// Lookup with the default-on-unknown policy: anything unrecognised is Modern.
    pub fn resolve(id: &str) -> TemplateKind {
        match Self::lookup(id) {
            Some(kind) => kind,
            None => TemplateKind::Modern,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| RenderError::UnknownTemplate(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine with optional user overrides.
///
/// `user_template_dir` may contain `.html` files that replace embedded
/// templates of the same relative name.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the HTML fragment of `kind` from a prepared context.
    pub fn render(&self, ctx: &TemplateContext, kind: TemplateKind) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(kind.template_name(), &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Output of one render: the template actually used and the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCv {
    pub template: TemplateKind,
    pub language: Language,
    pub markup: String,
}

/// Pure mapping from (document, template id, language) to preview markup.
///
/// Create once with [`Renderer::new`] and reuse; rendering never mutates
/// the document.
pub struct Renderer {
    engine: TemplateEngine,
    labels: LabelDictionary,
}

impl Renderer {
    /// Embedded templates and the built-in label table.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template_dir(None)
    }

    pub fn with_template_dir(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(user_template_dir)?,
            labels: LabelDictionary::builtin()?,
        })
    }

    pub fn labels(&self) -> &LabelDictionary {
        &self.labels
    }

    /// Render with a template id; unknown ids fall back to Modern.
    pub fn render(
        &self,
        doc: &CvDocument,
        template_id: &str,
        language: Language,
    ) -> Result<RenderedCv, RenderError> {
        self.render_kind(doc, TemplateKind::resolve(template_id), language)
    }

    pub fn render_kind(
        &self,
        doc: &CvDocument,
        kind: TemplateKind,
        language: Language,
    ) -> Result<RenderedCv, RenderError> {
        let ctx = TemplateContext::build(doc, kind, language, self.labels.labels(language));
        let markup = self.engine.render(&ctx, kind)?;
        Ok(RenderedCv {
            template: kind,
            language,
            markup,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn all_templates_render_without_error() {
        let renderer = Renderer::new().unwrap();
        let doc = CvDocument::sample();
        for kind in TemplateKind::all() {
            let out = renderer
                .render_kind(&doc, *kind, Language::En)
                .unwrap_or_else(|e| panic!("render failed for {kind:?}: {e}"));
            assert!(out.markup.contains("Jane Doe"), "{kind:?} must show the name");
            assert!(
                out.markup.contains(&format!("data-template=\"{}\"", kind.id())),
                "{kind:?} must tag its root element"
            );
        }
    }

    #[test]
    fn resolve_falls_back_to_modern() {
        assert_eq!(TemplateKind::resolve("futuristic"), TemplateKind::Modern);
        assert_eq!(TemplateKind::resolve(""), TemplateKind::Modern);
        assert_eq!(TemplateKind::resolve("Classic"), TemplateKind::Classic);
        assert_eq!(TemplateKind::resolve(" minimalist "), TemplateKind::Minimalist);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!(matches!(
            "futuristic".parse::<TemplateKind>(),
            Err(RenderError::UnknownTemplate(_))
        ));
        assert_eq!("modern".parse::<TemplateKind>().unwrap(), TemplateKind::Modern);
    }

    #[test]
    fn ids_roundtrip() {
        for kind in TemplateKind::all() {
            assert_eq!(TemplateKind::lookup(kind.id()), Some(*kind));
            assert_eq!(TemplateKind::lookup(kind.display_name()), Some(*kind));
        }
    }

    #[test]
    fn only_minimalist_omits_picture() {
        let renderer = Renderer::new().unwrap();
        let doc = CvDocument::sample();
        for kind in TemplateKind::all() {
            let out = renderer.render_kind(&doc, *kind, Language::En).unwrap();
            let has_img = out.markup.contains("<img");
            assert_eq!(has_img, *kind != TemplateKind::Minimalist, "{kind:?}");
        }
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let renderer = Renderer::new().unwrap();
        let doc = CvDocument::sample();
        for kind in TemplateKind::all() {
            let out = renderer.render_kind(&doc, *kind, Language::En).unwrap();
            assert!(!out.markup.contains('\r'), "{kind:?} output contains CR");
        }
    }
}
