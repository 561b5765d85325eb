//! `~/.moderncv/config.yaml`: session defaults.
//!
//! Every key is optional. A missing file yields [`EditorConfig::default`];
//! a malformed one is an [`EditorError::Config`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use moderncv_core::{Language, Theme};
use moderncv_export::DEFAULT_MAX_PICTURE_BYTES;

use crate::error::{io_err, EditorError};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Template id; unknown ids fall back to modern when the session starts.
    pub template: String,
    pub language: Language,
    pub theme: Theme,
    /// Directory exports land in when no explicit path is given.
    pub output_dir: PathBuf,
    pub max_picture_bytes: usize,
    /// HTML-to-PDF command line with `{input}`/`{output}` placeholders.
    pub raster_command: Option<String>,
    /// Directory of `.html` template overrides.
    pub templates_dir: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            template: "modern".to_string(),
            language: Language::default(),
            theme: Theme::default(),
            output_dir: PathBuf::from("."),
            max_picture_bytes: DEFAULT_MAX_PICTURE_BYTES,
            raster_command: None,
            templates_dir: None,
        }
    }
}

impl EditorConfig {
    /// Load from the user's home directory, or defaults when it is unknown.
    pub fn load() -> Result<Self, EditorError> {
        match dirs::home_dir() {
            Some(home) => Self::load_at(&home),
            None => {
                tracing::debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn load_at(home: &Path) -> Result<Self, EditorError> {
        let path = paths::config_path(home);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml_str(&text, &path)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(io_err(&path, e)),
        };
        if config.templates_dir.is_none() {
            config.templates_dir = Some(paths::templates_dir(home));
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn from_yaml_str(text: &str, path: &Path) -> Result<Self, EditorError> {
        // An empty file parses as YAML null.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
