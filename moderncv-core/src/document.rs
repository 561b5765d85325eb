//! The closed set of mutations a [`CvDocument`] accepts.
//!
//! # Index semantics
//!
//! Entries of the repeatable sections are addressed by position only.
//! Every operation that takes an index treats an out-of-range index as a
//! no-op and reports it through its `bool` return instead of an error.

use crate::error::CvError;
use crate::types::{
    CvDocument, EducationEntry, EducationField, ExperienceEntry, ExperienceField, PersonalField,
    PersonalInfo, Section,
};

// ---------------------------------------------------------------------------
// Repeatable-section capability
// ---------------------------------------------------------------------------

/// An entry kind that lives in an ordered, repeatable section.
pub trait SectionEntry: Clone + Default {
    type Field: Copy;

    /// The entry appended by "add": every field empty.
    fn blank() -> Self {
        Self::default()
    }

    fn field(&self, field: Self::Field) -> &str;

    fn set_field(&mut self, field: Self::Field, value: String);
}

impl SectionEntry for ExperienceEntry {
    type Field = ExperienceField;

    fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Role => &self.role,
            ExperienceField::Duration => &self.duration,
            ExperienceField::Description => &self.description,
        }
    }

    fn set_field(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Company => self.company = value,
            ExperienceField::Role => self.role = value,
            ExperienceField::Duration => self.duration = value,
            ExperienceField::Description => self.description = value,
        }
    }
}

impl SectionEntry for EducationEntry {
    type Field = EducationField;

    fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::Institution => &self.institution,
            EducationField::Degree => &self.degree,
            EducationField::Duration => &self.duration,
        }
    }

    fn set_field(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Institution => self.institution = value,
            EducationField::Degree => self.degree = value,
            EducationField::Duration => self.duration = value,
        }
    }
}

fn replace_field<E: SectionEntry>(
    entries: &mut [E],
    index: usize,
    field: E::Field,
    value: String,
) -> bool {
    match entries.get_mut(index) {
        Some(entry) => {
            entry.set_field(field, value);
            true
        }
        None => false,
    }
}

fn remove_at<E>(entries: &mut Vec<E>, index: usize) -> bool {
    if index < entries.len() {
        entries.remove(index);
        true
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Field addressing
// ---------------------------------------------------------------------------

/// Address of exactly one string field inside a [`CvDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Personal(PersonalField),
    Experience(usize, ExperienceField),
    Education(usize, EducationField),
}

impl FieldPath {
    /// Resolve the loose `(section, index, field)` triple used by form inputs.
    ///
    /// A `None` index always addresses personal info, whatever `section`
    /// says (the form passes `"personalInfo"` there). An index without a
    /// section is an error.
    pub fn parse(section: Option<&str>, index: Option<usize>, field: &str) -> Result<Self, CvError> {
        let Some(index) = index else {
            return Ok(FieldPath::Personal(field.parse()?));
        };
        let section = section.ok_or_else(|| CvError::UnknownSection(String::new()))?;
        match section.parse::<Section>()? {
            Section::Experience => Ok(FieldPath::Experience(index, field.parse()?)),
            Section::Education => Ok(FieldPath::Education(index, field.parse()?)),
        }
    }

    /// The section this path points into, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            FieldPath::Personal(_) => None,
            FieldPath::Experience(..) => Some(Section::Experience),
            FieldPath::Education(..) => Some(Section::Education),
        }
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

impl PersonalInfo {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Title => &self.title,
            PersonalField::Phone => &self.phone,
            PersonalField::Email => &self.email,
            PersonalField::Location => &self.location,
            PersonalField::Website => &self.website,
            PersonalField::ProfilePicture => &self.profile_picture,
        }
    }

    pub fn set_field(&mut self, field: PersonalField, value: String) {
        match field {
            PersonalField::Name => self.name = value,
            PersonalField::Title => self.title = value,
            PersonalField::Phone => self.phone = value,
            PersonalField::Email => self.email = value,
            PersonalField::Location => self.location = value,
            PersonalField::Website => self.website = value,
            PersonalField::ProfilePicture => self.profile_picture = value,
        }
    }
}

impl CvDocument {
    /// Replace the field at `path` with `value`.
    ///
    /// Returns `false` (and changes nothing) when the entry index is out of range.
    #[must_use = "an out-of-range index silently changes nothing"]
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) -> bool {
        let value = value.into();
        match path {
            FieldPath::Personal(field) => {
                self.personal_info.set_field(field, value);
                true
            }
            FieldPath::Experience(index, field) => {
                replace_field(&mut self.experience, index, field, value)
            }
            FieldPath::Education(index, field) => {
                replace_field(&mut self.education, index, field, value)
            }
        }
    }

    /// Read the field at `path`; `None` when the entry index is out of range.
    pub fn field(&self, path: FieldPath) -> Option<&str> {
        match path {
            FieldPath::Personal(field) => Some(self.personal_info.field(field)),
            FieldPath::Experience(index, field) => {
                self.experience.get(index).map(|e| e.field(field))
            }
            FieldPath::Education(index, field) => {
                self.education.get(index).map(|e| e.field(field))
            }
        }
    }

    /// Assign an already-decoded picture (data URI or URL).
    pub fn set_profile_picture(&mut self, data_uri: impl Into<String>) {
        self.personal_info.profile_picture = data_uri.into();
    }

    /// Replace the skills wholesale from comma-separated text.
    ///
    /// Each piece is trimmed; empty pieces are kept, so `""` yields `[""]`.
    pub fn set_skills_from_text(&mut self, raw: &str) {
        self.skills = raw.split(',').map(|s| s.trim().to_string()).collect();
    }

    /// The skills as the comma-separated text shown in the skills input.
    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }

    /// Append a blank entry to `section` and return its index.
    pub fn add_entry(&mut self, section: Section) -> usize {
        match section {
            Section::Experience => {
                self.experience.push(ExperienceEntry::blank());
                self.experience.len() - 1
            }
            Section::Education => {
                self.education.push(EducationEntry::blank());
                self.education.len() - 1
            }
        }
    }

    /// Remove the entry at `index`; later entries shift down by one.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    #[must_use = "an out-of-range index silently changes nothing"]
    pub fn remove_entry(&mut self, section: Section, index: usize) -> bool {
        match section {
            Section::Experience => remove_at(&mut self.experience, index),
            Section::Education => remove_at(&mut self.education, index),
        }
    }

    /// Number of entries in `section`.
    pub fn entry_count(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Education => self.education.len(),
        }
    }

    /// Placeholder content shown when a session starts.
    pub fn sample() -> Self {
        CvDocument {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                title: "Senior Product Designer".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                email: "jane.doe@example.com".to_string(),
                location: "San Francisco, CA".to_string(),
                website: "janedoe.design".to_string(),
                profile_picture: "https://placehold.co/400x400/a78bfa/ffffff?text=JD".to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    company: "Innovate Inc.".to_string(),
                    role: "Lead UX Designer".to_string(),
                    duration: "Jan 2020 - Present".to_string(),
                    description: "Led the design of a new flagship product, resulting in a 25% \
                                  increase in user engagement. Managed a team of 4 junior designers."
                        .to_string(),
                },
                ExperienceEntry {
                    company: "Tech Solutions".to_string(),
                    role: "UI/UX Designer".to_string(),
                    duration: "Jun 2017 - Dec 2019".to_string(),
                    description: "Redesigned the main dashboard for a SaaS application, improving \
                                  user satisfaction by 15%. Collaborated with developers to \
                                  implement pixel-perfect designs."
                        .to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    institution: "Design University".to_string(),
                    degree: "M.A. in Human-Computer Interaction".to_string(),
                    duration: "2015 - 2017".to_string(),
                },
                EducationEntry {
                    institution: "State College".to_string(),
                    degree: "B.S. in Graphic Design".to_string(),
                    duration: "2011 - 2015".to_string(),
                },
            ],
            skills: [
                "Figma",
                "Sketch",
                "Adobe XD",
                "Prototyping",
                "User Research",
                "HTML/CSS",
                "JavaScript",
                "React",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
