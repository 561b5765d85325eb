//! Template context: the presentational tree built from a [`CvDocument`].
//!
//! Building a context only borrows the document. Everything the templates
//! print is precomputed here so the Tera files stay free of layout logic.

use serde::Serialize;

use moderncv_core::{CvDocument, Labels, Language};

use crate::engine::TemplateKind;
use crate::error::RenderError;
use crate::layout::{ContactPlacement, Direction, SkillPresentation, StyleClasses};

/// Serializable rendering payload for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// Template id (`modern`, `classic`, `minimalist`).
    pub template: String,
    /// Language code for the root `lang` attribute.
    pub lang: String,
    /// `ltr` or `rtl`.
    pub dir: String,
    pub direction: Direction,
    pub classes: StyleClasses,
    pub header: HeaderCtx,
    pub headings: HeadingsCtx,
    pub experience: Vec<ItemCtx>,
    pub education: Vec<ItemCtx>,
    pub skills: Vec<String>,
    pub skill_presentation: SkillPresentation,
}

/// Identity block at the top of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCtx {
    pub picture: Option<PictureCtx>,
    pub name: String,
    pub title: String,
    pub contact: ContactCtx,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureCtx {
    pub src: String,
    pub size_px: u32,
    pub class_name: String,
}

/// Contact details, already arranged into the lines the template prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCtx {
    pub placement: ContactPlacement,
    pub lines: Vec<String>,
}

/// Localized section headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingsCtx {
    pub experience: String,
    pub education: String,
    pub skills: String,
}

/// One experience or education entry as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCtx {
    pub heading: String,
    pub duration: String,
    pub detail: String,
}

impl TemplateContext {
    /// Build the presentational tree for `kind`.
    pub fn build(doc: &CvDocument, kind: TemplateKind, language: Language, labels: &Labels) -> Self {
        let layout = kind.layout();
        let info = &doc.personal_info;

        let picture = layout.picture.map(|p| PictureCtx {
            src: info.profile_picture.clone(),
            size_px: p.size_px,
            class_name: p.class_name.to_string(),
        });

        let lines = match layout.contact {
            ContactPlacement::Inline => {
                vec![info.phone.clone(), info.email.clone(), info.location.clone()]
            }
            ContactPlacement::Aside => vec![
                info.phone.clone(),
                info.email.clone(),
                info.location.clone(),
                info.website.clone(),
            ],
            ContactPlacement::Stacked => vec![
                format!("{} / {} / {}", info.email, info.phone, info.location),
                info.website.clone(),
            ],
        };

        let experience = doc
            .experience
            .iter()
            .map(|e| ItemCtx {
                heading: format!("{} @ {}", e.role, e.company),
                duration: e.duration.clone(),
                detail: e.description.clone(),
            })
            .collect();

        let education = doc
            .education
            .iter()
            .map(|e| ItemCtx {
                heading: e.degree.clone(),
                duration: e.duration.clone(),
                detail: e.institution.clone(),
            })
            .collect();

        TemplateContext {
            template: kind.id().to_string(),
            lang: language.code().to_string(),
            dir: language.direction().to_string(),
            direction: layout.direction,
            classes: layout.classes,
            header: HeaderCtx {
                picture,
                name: info.name.clone(),
                title: info.title.clone(),
                contact: ContactCtx {
                    placement: layout.contact,
                    lines,
                },
            },
            headings: HeadingsCtx {
                experience: labels.experience_header.clone(),
                education: labels.education_header.clone(),
                skills: labels.skills_header.clone(),
            },
            experience,
            education,
            skills: doc.skills.clone(),
            skill_presentation: layout.skills,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
