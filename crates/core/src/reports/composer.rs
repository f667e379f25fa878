//! Report composer.
//!
//! Runs the section renderers in a fixed order over one simulation result,
//! threading the write cursor from section to section, then stamps the footer
//! on every page.

use chrono::NaiveDate;
use simucredito_shared::config::ReportLocale;
use simucredito_shared::types::{Currency, NumberFormat};
use tracing::debug;

use super::amortization::{AmortizationTable, COLUMN_WIDTHS};
use super::document::{ComposedDocument, DocumentBuilder};
use super::error::CompositionError;
use super::format::CellFormatter;
use super::labels::ReportLabels;
use super::layout::{Cursor, PageLayout};
use super::sections::{
    FooterStamp, IndicatorsTable, RenderContext, SectionRenderer, SummaryTable, TitleBlock,
};
use crate::simulation::SimulationResult;

/// Per-call inputs that are not part of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    /// Date printed on the report.
    pub generated_on: NaiveDate,
    /// Label language.
    pub locale: ReportLocale,
}

impl ReportContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(generated_on: NaiveDate, locale: ReportLocale) -> Self {
        Self {
            generated_on,
            locale,
        }
    }
}

/// Lays a simulation result out as a paginated document.
#[derive(Debug, Clone, Default)]
pub struct ReportComposer {
    layout: PageLayout,
    number_format: NumberFormat,
}

impl ReportComposer {
    /// Composer with A4 landscape geometry, Peruvian grouping and soles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the page geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Page geometry in use.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Builds the full document.
    ///
    /// The result is read, never modified. Output is a pure function of the
    /// inputs: the same result and context always give the same pages.
    ///
    /// # Errors
    ///
    /// Returns `CompositionError` when the layout cannot hold a section or the
    /// schedule violates payment ordering. No partial document is returned.
    pub fn compose(
        &self,
        result: &SimulationResult,
        context: &ReportContext,
    ) -> Result<ComposedDocument, CompositionError> {
        self.layout.validate(COLUMN_WIDTHS.iter().sum())?;

        let labels = ReportLabels::for_locale(context.locale);
        let ctx = RenderContext {
            layout: &self.layout,
            labels: &labels,
            formatter: CellFormatter::new(self.number_format, Currency::Pen, &labels),
            result,
            generated_on: context.generated_on,
        };

        let sections: [&dyn SectionRenderer; 4] = [
            &TitleBlock,
            &SummaryTable,
            &IndicatorsTable,
            &AmortizationTable,
        ];

        let mut builder = DocumentBuilder::new(self.layout.top_margin);
        let mut cursor = Cursor::new(0, self.layout.top_margin);
        for section in sections {
            cursor = section.render(&mut builder, cursor, &ctx)?;
        }

        let mut document = builder.finish(labels.title);
        FooterStamp.apply(&mut document, &ctx);

        debug!(
            pages = document.page_count(),
            rows = result.payments().len(),
            last_page = cursor.page,
            last_y = cursor.y,
            "Report composed"
        );
        Ok(document)
    }
}
