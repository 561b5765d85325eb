//! Error types for moderncv-core.

use thiserror::Error;

/// Errors raised while addressing or parsing parts of a CV document.
///
/// Mutations themselves never fail: an out-of-range index is a no-op.
/// These errors only cover input that cannot name a field at all.
#[derive(Debug, Error)]
pub enum CvError {
    /// The section name is neither `experience` nor `education`.
    #[error("unknown section '{0}'; expected: experience, education")]
    UnknownSection(String),

    /// The field name does not exist in the addressed record kind.
    #[error("unknown field '{field}' for {scope}")]
    UnknownField { scope: &'static str, field: String },

    /// The language code has no entry in the label dictionary.
    #[error("unknown language '{0}'; expected one of: en, fr, es, de, ar")]
    UnknownLanguage(String),

    /// The theme name is neither `dark` nor `light`.
    #[error("unknown theme '{0}'; expected: dark, light")]
    UnknownTheme(String),

    /// The embedded label table could not be parsed or is incomplete.
    #[error("label dictionary error: {0}")]
    Labels(String),
}
