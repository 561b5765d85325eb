//! Display languages and the read-only label dictionary.
//!
//! The table is embedded at compile time from `labels.yaml` and parsed once
//! by [`LabelDictionary::builtin`]. Nothing in the crate mutates labels.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CvError;

const BUILTIN_LABELS: &str = include_str!("labels.yaml");

/// Languages the preview and form can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    De,
    Ar,
}

impl Language {
    /// All languages in a stable order.
    pub fn all() -> &'static [Language] {
        &[
            Language::En,
            Language::Fr,
            Language::Es,
            Language::De,
            Language::Ar,
        ]
    }

    /// ISO 639-1 code, also the key in the label table.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::Ar => "ar",
        }
    }

    /// Endonym shown in the language picker.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Ar => "العربية",
        }
    }

    /// Country code of the flag shown next to the name.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "gb",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::De => "de",
            Language::Ar => "sa",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value of the HTML `dir` attribute.
    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "es" => Ok(Language::Es),
            "de" => Ok(Language::De),
            "ar" => Ok(Language::Ar),
            other => Err(CvError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Every static string the form and the preview read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Labels {
    pub personal_info: String,
    pub full_name: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub website_portfolio: String,
    pub upload_picture: String,
    pub work_experience: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub add_experience: String,
    pub education: String,
    pub institution: String,
    pub degree: String,
    pub add_education: String,
    pub skills: String,
    pub skills_placeholder: String,
    pub controls: String,
    pub export_pdf: String,
    pub export_docx: String,
    pub experience_header: String,
    pub education_header: String,
    pub skills_header: String,
}

/// Read-only lookup from [`Language`] to [`Labels`].
#[derive(Debug, Clone)]
pub struct LabelDictionary {
    entries: HashMap<Language, Labels>,
}

impl LabelDictionary {
    /// Parse the table embedded in the binary.
    pub fn builtin() -> Result<Self, CvError> {
        Self::from_yaml_str(BUILTIN_LABELS)
    }

    /// Parse a YAML table keyed by language code.
    ///
    /// Every [`Language`] must be present; unknown codes are rejected.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CvError> {
        let raw: HashMap<String, Labels> =
            serde_yaml::from_str(yaml).map_err(|e| CvError::Labels(e.to_string()))?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (code, labels) in raw {
            entries.insert(code.parse::<Language>()?, labels);
        }
        if let Some(missing) = Language::all().iter().find(|l| !entries.contains_key(*l)) {
            return Err(CvError::Labels(format!(
                "no labels for language '{}'",
                missing.code()
            )));
        }
        Ok(LabelDictionary { entries })
    }

    pub fn labels(&self, language: Language) -> &Labels {
        // Construction guarantees every language has an entry.
        &self.entries[&language]
    }
}
