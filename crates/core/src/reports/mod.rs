//! Printable simulation report.
//!
//! The composer lays a simulation result out as pages of positioned text and
//! table regions:
//! - Title block with client, property and date
//! - Operation summary
//! - Key indicators
//! - Amortization schedule, paginated with a repeated header
//! - Footer with page counter and disclaimer

pub mod amortization;
pub mod composer;
pub mod document;
pub mod error;
pub mod format;
pub mod labels;
pub mod layout;
mod sections;


pub use amortization::{COLUMN_WIDTHS, validate_schedule};
pub use composer::{ReportComposer, ReportContext};
pub use document::{
    Column, ComposedDocument, FontWeight, Fragment, Page, SectionKind, TableRegion, TableRow,
    TextFragment,
};
pub use error::CompositionError;
pub use format::CellFormatter;
pub use labels::ReportLabels;
pub use layout::{Cursor, PageLayout};
