//! # moderncv-export
//!
//! The collaborators that sit outside the editor core: turning picture bytes
//! into a data URI, writing the word-processor document, and handing the
//! preview to an external rasterizer. Every file lands through
//! [`write_atomic`].

pub mod document;
pub mod error;
pub mod image;
pub mod raster;
pub mod writer;

pub use document::{DocumentExporter, MsWordHtmlExporter, DEFAULT_DOCUMENT_FILE};
pub use error::ExportError;
pub use image::{DataUriDecoder, ImageDecoder, ImageFormat, DEFAULT_MAX_PICTURE_BYTES};
pub use raster::{
    CommandRasterExporter, Orientation, RasterExporter, RasterRequest, DEFAULT_RASTER_FILE,
};
pub use writer::{write_atomic, ExportReceipt};
