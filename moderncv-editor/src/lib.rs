//! Editing session: the document, the user's template/language/theme
//! choices, a line command protocol and background picture decoding.

pub mod command;
pub mod config;
mod error;
pub mod paths;
pub mod picture;
mod runtime;
pub mod session;

pub use command::{EditorCommand, ExportKind, ThemeChange};
pub use config::EditorConfig;
pub use error::EditorError;
pub use picture::{PictureCompletion, PictureLoader, PictureOutcome};
pub use runtime::{init_tracing, run_session, start_blocking};
pub use session::{Response, Session};
