//! # moderncv-renderer
//!
//! Tera-based template engine that turns a [`CvDocument`](moderncv_core::CvDocument)
//! into preview markup under one of three layouts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use moderncv_core::{CvDocument, Language};
//! use moderncv_renderer::{Renderer, TemplateKind};
//!
//! fn render_all(doc: &CvDocument) {
//!     if let Ok(renderer) = Renderer::new() {
//!         for kind in TemplateKind::all() {
//!             if let Ok(out) = renderer.render_kind(doc, *kind, Language::En) {
//!                 println!("{}: {} bytes", kind, out.markup.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod layout;

pub use context::TemplateContext;
pub use engine::{RenderedCv, Renderer, TemplateEngine, TemplateKind};
pub use error::RenderError;
pub use layout::{ContactPlacement, Direction, LayoutSpec, SkillPresentation};
