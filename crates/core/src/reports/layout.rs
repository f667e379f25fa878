//! Page geometry and the vertical write cursor.
//!
//! All distances are whole millimetres measured from the top-left corner of
//! the page. Integer units keep pagination exact and repeatable.

use super::error::CompositionError;

/// Data rows of the summary table, which sits at a fixed position on page 1.
const SUMMARY_ROWS: u32 = 4;

/// Fixed geometry of the printed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width.
    pub page_width: u32,
    /// Page height.
    pub page_height: u32,
    /// Where the cursor restarts on a new page.
    pub top_margin: u32,
    /// Space below the printable boundary, reserved for the footer.
    pub bottom_margin: u32,
    /// Left edge of text blocks.
    pub text_x: u32,
    /// Left and right margin of tables.
    pub table_margin: u32,
    /// Space between the end of one section and the next heading.
    pub section_gap: u32,
    /// Space between a section heading and its table.
    pub heading_gap: u32,
    /// Baseline of the report title.
    pub title_y: u32,
    /// Baseline of the first title detail line (client).
    pub details_y: u32,
    /// Distance between title detail lines.
    pub details_spacing: u32,
    /// Baseline of the summary heading.
    pub summary_heading_y: u32,
    /// Top of the summary table.
    pub summary_table_y: u32,
    /// Row height of the summary and indicator tables.
    pub compact_row_height: u32,
    /// Row height of the amortization table.
    pub amortization_row_height: u32,
    /// Distance from the page bottom to the page counter line.
    pub footer_counter_offset: u32,
    /// Distance from the page bottom to the disclaimer line.
    pub footer_disclaimer_offset: u32,
}

impl Default for PageLayout {
    /// A4 landscape.
    fn default() -> Self {
        Self {
            page_width: 297,
            page_height: 210,
            top_margin: 15,
            bottom_margin: 25,
            text_x: 20,
            table_margin: 14,
            section_gap: 20,
            heading_gap: 10,
            title_y: 30,
            details_y: 50,
            details_spacing: 10,
            summary_heading_y: 90,
            summary_table_y: 100,
            compact_row_height: 7,
            amortization_row_height: 6,
            footer_counter_offset: 10,
            footer_disclaimer_offset: 20,
        }
    }
}

impl PageLayout {
    /// Lowest y a table row may reach.
    #[must_use]
    pub fn printable_bottom(&self) -> u32 {
        self.page_height.saturating_sub(self.bottom_margin)
    }

    /// Width available to tables between the margins.
    #[must_use]
    pub fn table_width(&self) -> u32 {
        self.page_width.saturating_sub(2 * self.table_margin)
    }

    /// Left edge for a table of the given width.
    ///
    /// Tables wider than the space between margins are centred on the page.
    #[must_use]
    pub fn table_x(&self, width: u32) -> u32 {
        if width <= self.table_width() {
            self.table_margin
        } else {
            self.page_width.saturating_sub(width) / 2
        }
    }

    /// Space a section needs before it may start: heading, table header, one row.
    #[must_use]
    pub fn section_lead(&self, row_height: u32) -> u32 {
        self.heading_gap + 2 * row_height
    }

    /// Checks that every section can be placed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` when a header plus one row cannot fit on a fresh
    /// page, the summary table does not fit whole, a table is wider than the
    /// page, or footer lines fall off the page.
    pub fn validate(&self, widest_table: u32) -> Result<(), CompositionError> {
        let bottom = self.printable_bottom();

        if self.top_margin >= bottom {
            return Err(CompositionError::invalid_layout(format!(
                "top margin {} leaves no printable area above {bottom}",
                self.top_margin
            )));
        }

        let tallest_row = self.compact_row_height.max(self.amortization_row_height);
        if tallest_row == 0 {
            return Err(CompositionError::invalid_layout("row height must be positive"));
        }

        if self.top_margin + self.section_lead(tallest_row) > bottom {
            return Err(CompositionError::invalid_layout(format!(
                "a section heading with one row does not fit between {} and {bottom}",
                self.top_margin
            )));
        }

        if self.summary_table_y + (SUMMARY_ROWS + 1) * self.compact_row_height > bottom {
            return Err(CompositionError::invalid_layout(format!(
                "summary table at {} does not fit above {bottom}",
                self.summary_table_y
            )));
        }

        if widest_table > self.page_width {
            return Err(CompositionError::invalid_layout(format!(
                "table width {widest_table} exceeds page width {}",
                self.page_width
            )));
        }

        let nearest = self.footer_counter_offset.min(self.footer_disclaimer_offset);
        let farthest = self.footer_counter_offset.max(self.footer_disclaimer_offset);
        if nearest == 0 || farthest > self.bottom_margin {
            return Err(CompositionError::invalid_layout(
                "footer lines must sit inside the bottom margin",
            ));
        }

        Ok(())
    }
}

/// Current write position: page index (0-based) and y offset on that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based page index.
    pub page: usize,
    /// Millimetres from the top edge.
    pub y: u32,
}

impl Cursor {
    /// Creates a cursor.
    #[must_use]
    pub const fn new(page: usize, y: u32) -> Self {
        Self { page, y }
    }

    /// Same page, moved down by `offset`.
    #[must_use]
    pub const fn advance(self, offset: u32) -> Self {
        Self {
            page: self.page,
            y: self.y + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = PageLayout::default();
        assert_eq!(layout.printable_bottom(), 185);
        assert!(layout.validate(290).is_ok());
    }

    #[test]
    fn test_wide_table_is_centred() {
        let layout = PageLayout::default();
        assert_eq!(layout.table_x(200), 14);
        assert_eq!(layout.table_x(290), 3);
    }

    #[test]
    fn test_table_wider_than_page_is_rejected() {
        let layout = PageLayout::default();
        assert!(matches!(
            layout.validate(300),
            Err(CompositionError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_page_too_short_is_rejected() {
        let layout = PageLayout {
            page_height: 60,
            ..PageLayout::default()
        };
        assert!(layout.validate(100).is_err());
    }

    #[test]
    fn test_summary_must_fit_whole() {
        // Header at 150, four rows end at 185: fits exactly.
        let fits = PageLayout {
            summary_table_y: 150,
            ..PageLayout::default()
        };
        assert!(fits.validate(100).is_ok());

        // One more millimetre pushes the last row past 185.
        let splits = PageLayout {
            summary_table_y: 151,
            ..PageLayout::default()
        };
        assert!(splits.validate(100).is_err());
    }

    #[test]
    fn test_footer_outside_margin_is_rejected() {
        let layout = PageLayout {
            footer_disclaimer_offset: 40,
            ..PageLayout::default()
        };
        assert!(layout.validate(100).is_err());
    }

    #[test]
    fn test_cursor_advance_keeps_page() {
        let cursor = Cursor::new(2, 40).advance(6);
        assert_eq!(cursor, Cursor::new(2, 46));
    }
}
