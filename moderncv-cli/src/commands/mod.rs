pub mod edit;
pub mod languages;
pub mod preview;
pub mod templates;
