//! moderncv core library: CV document model, its mutations, labels.
//!
//! - [`types`]: records, field names, sections, theme
//! - [`document`]: [`FieldPath`] addressing and the mutation operations
//! - [`labels`]: [`Language`] and the read-only [`LabelDictionary`]
//! - [`error`]: [`CvError`]

pub mod document;
pub mod error;
pub mod labels;
pub mod types;

pub use document::{FieldPath, SectionEntry};
pub use error::CvError;
pub use labels::{LabelDictionary, Labels, Language};
pub use types::{
    CvDocument, EducationEntry, EducationField, ExperienceEntry, ExperienceField, PersonalField,
    PersonalInfo, Section, Theme,
};
