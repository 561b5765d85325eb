//! Domain types for a CV document.
//!
//! Every field is a plain `String`; the editor never validates contents.
//! Serialized names use the camelCase keys of the form fields
//! (`personalInfo`, `profilePicture`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CvError;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Contact and identity block. One instance per document, edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub website: String,
    /// Data URI of the uploaded picture, or any URL the preview can load.
    pub profile_picture: String,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

/// One degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

/// Aggregate root of everything the user edits.
///
/// Sequence order is display order. Entries have no identity besides their
/// position: removing index `i` shifts every later entry down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Editable fields of [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    Name,
    Title,
    Phone,
    Email,
    Location,
    Website,
    ProfilePicture,
}

impl PersonalField {
    pub fn all() -> &'static [PersonalField] {
        &[
            PersonalField::Name,
            PersonalField::Title,
            PersonalField::Phone,
            PersonalField::Email,
            PersonalField::Location,
            PersonalField::Website,
            PersonalField::ProfilePicture,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Title => "title",
            PersonalField::Phone => "phone",
            PersonalField::Email => "email",
            PersonalField::Location => "location",
            PersonalField::Website => "website",
            PersonalField::ProfilePicture => "profilePicture",
        }
    }
}

impl FromStr for PersonalField {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PersonalField::Name),
            "title" => Ok(PersonalField::Title),
            "phone" => Ok(PersonalField::Phone),
            "email" => Ok(PersonalField::Email),
            "location" => Ok(PersonalField::Location),
            "website" => Ok(PersonalField::Website),
            "profilePicture" | "profile_picture" | "picture" => Ok(PersonalField::ProfilePicture),
            other => Err(CvError::UnknownField {
                scope: "personal info",
                field: other.to_string(),
            }),
        }
    }
}

/// Editable fields of [`ExperienceEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Company,
    Role,
    Duration,
    Description,
}

impl ExperienceField {
    pub fn all() -> &'static [ExperienceField] {
        &[
            ExperienceField::Company,
            ExperienceField::Role,
            ExperienceField::Duration,
            ExperienceField::Description,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Role => "role",
            ExperienceField::Duration => "duration",
            ExperienceField::Description => "description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(ExperienceField::Company),
            "role" => Ok(ExperienceField::Role),
            "duration" => Ok(ExperienceField::Duration),
            "description" => Ok(ExperienceField::Description),
            other => Err(CvError::UnknownField {
                scope: "experience",
                field: other.to_string(),
            }),
        }
    }
}

/// Editable fields of [`EducationEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    Institution,
    Degree,
    Duration,
}

impl EducationField {
    pub fn all() -> &'static [EducationField] {
        &[
            EducationField::Institution,
            EducationField::Degree,
            EducationField::Duration,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationField::Institution => "institution",
            EducationField::Degree => "degree",
            EducationField::Duration => "duration",
        }
    }
}

impl FromStr for EducationField {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "institution" => Ok(EducationField::Institution),
            "degree" => Ok(EducationField::Degree),
            "duration" => Ok(EducationField::Duration),
            other => Err(CvError::UnknownField {
                scope: "education",
                field: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The repeatable record kinds of a [`CvDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            other => Err(CvError::UnknownSection(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Colour scheme of the editor. Affects the export background only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Background colour painted behind a rasterized preview.
    pub fn export_background(&self) -> &'static str {
        match self {
            Theme::Dark => "#1a1a1a",
            Theme::Light => "#ffffff",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(CvError::UnknownTheme(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_roundtrip_through_from_str() {
        for field in PersonalField::all() {
            assert_eq!(field.as_str().parse::<PersonalField>().unwrap(), *field);
        }
        for field in ExperienceField::all() {
            assert_eq!(field.as_str().parse::<ExperienceField>().unwrap(), *field);
        }
        for field in EducationField::all() {
            assert_eq!(field.as_str().parse::<EducationField>().unwrap(), *field);
        }
    }

    #[test]
    fn profile_picture_accepts_snake_case() {
        assert_eq!(
            "profile_picture".parse::<PersonalField>().unwrap(),
            PersonalField::ProfilePicture
        );
    }

    #[test]
    fn education_rejects_experience_fields() {
        let err = "company".parse::<EducationField>().unwrap_err();
        assert!(err.to_string().contains("company"));
        assert!(err.to_string().contains("education"));
    }

    #[test]
    fn section_parse_is_case_insensitive() {
        assert_eq!("Experience".parse::<Section>().unwrap(), Section::Experience);
        assert!(matches!(
            "projects".parse::<Section>(),
            Err(CvError::UnknownSection(_))
        ));
    }

    #[test]
    fn theme_toggle_and_background() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.export_background(), "#1a1a1a");
        assert_eq!(Theme::Light.export_background(), "#ffffff");
    }

    #[test]
    fn document_serializes_with_camel_case_keys() {
        let doc = CvDocument::default();
        let yaml = serde_yaml::to_string(&doc).expect("serialize");
        assert!(yaml.contains("personalInfo:"));
        assert!(yaml.contains("profilePicture:"));
    }
}
