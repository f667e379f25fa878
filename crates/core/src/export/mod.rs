//! Report export.
//!
//! Turns a composed document into a downloadable artifact: PDF bytes plus a
//! filename derived from the client name and the generation date.

pub mod error;
pub mod filename;
pub mod pdf;
pub mod service;

pub use error::ExportError;
pub use filename::{NamingContext, report_filename, slugify};
pub use pdf::PdfRenderer;
pub use service::{Artifact, Exporter, PDF_CONTENT_TYPE};
