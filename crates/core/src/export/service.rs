//! Exporter: composed document in, named artifact out.

use tracing::{error, info};

use super::error::ExportError;
use super::filename::NamingContext;
use super::pdf::PdfRenderer;
use crate::reports::{ComposedDocument, ReportComposer, ReportContext};
use crate::simulation::SimulationResult;

/// MIME type of every exported report.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested filename.
    pub filename: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// A PDF artifact.
    #[must_use]
    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes,
        }
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Composes and renders simulation reports.
#[derive(Debug, Clone)]
pub struct Exporter {
    composer: ReportComposer,
    renderer: PdfRenderer,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ReportComposer::new())
    }
}

impl Exporter {
    /// Exporter whose PDF pages match the composer's geometry.
    #[must_use]
    pub fn new(composer: ReportComposer) -> Self {
        let renderer = PdfRenderer::new(composer.layout());
        Self { composer, renderer }
    }

    /// The composer used by [`Exporter::export_simulation`].
    #[must_use]
    pub fn composer(&self) -> &ReportComposer {
        &self.composer
    }

    /// Renders an already composed document.
    ///
    /// # Errors
    ///
    /// Returns `Render` if PDF serialization fails. Nothing is emitted then.
    pub fn export(
        &self,
        document: &ComposedDocument,
        naming: &NamingContext,
    ) -> Result<Artifact, ExportError> {
        let filename = naming.filename();
        let bytes = self
            .renderer
            .render(document)
            .inspect_err(|e| error!(error = %e, filename = %filename, "Failed to render report"))?;

        info!(
            filename = %filename,
            pages = document.page_count(),
            size = bytes.len(),
            "Report exported"
        );
        Ok(Artifact::pdf(filename, bytes))
    }

    /// Composes a simulation and renders it in one step.
    ///
    /// # Errors
    ///
    /// A composition failure is returned unchanged as `Composition`; no
    /// artifact exists in that case.
    pub fn export_simulation(
        &self,
        result: &SimulationResult,
        context: &ReportContext,
    ) -> Result<Artifact, ExportError> {
        let document = self
            .composer
            .compose(result, context)
            .inspect_err(|e| error!(error = %e, "Failed to compose report"))?;
        self.export(
            &document,
            &NamingContext::from_result(result, context.generated_on),
        )
    }
}
